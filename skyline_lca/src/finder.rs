// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Euler tour plus sparse table.
//!
//! Every tree of the forest is walked depth first; the walk records a node each time it is
//! entered or returned to, together with its depth. The lowest common ancestor of `a` and `b`
//! is the shallowest node recorded between the first visits of `a` and `b`. A sparse table of
//! range minima over the recorded depths answers that in constant time.

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::hierarchy::Hierarchy;

/// Representative of a node the tour has not entered yet.
const UNVISITED: usize = usize::MAX;

/// Lowest common ancestor queries over a validated forest.
///
/// Built once from a [`Hierarchy`] and a set of roots; immutable afterwards. Changes to the
/// hierarchy require building a new finder.
///
/// Construction takes O(n log n) time and space for n nodes, queries take O(1).
pub struct LcaFinder<N> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    /// Tree (component) number per node.
    tree: Vec<usize>,
    depth: Vec<usize>,
    /// First tour position per node.
    representative: Vec<usize>,
    tour: Vec<usize>,
    levels: Vec<usize>,
    /// `sparse[k][i]`: tour position of minimum level in `i..i + 2^k`.
    sparse: Vec<Vec<usize>>,
    log2: Vec<usize>,
    trees: usize,
}

impl<N: Debug> Debug for LcaFinder<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LcaFinder")
            .field("nodes", &self.nodes.len())
            .field("trees", &self.trees)
            .field("tour_len", &self.tour.len())
            .field("sparse_rows", &self.sparse.len())
            .finish_non_exhaustive()
    }
}

impl<N: Copy + Eq + Hash + Debug> LcaFinder<N> {
    /// Build a finder for a single tree.
    pub fn from_root<H: Hierarchy<Node = N>>(hierarchy: &H, root: N) -> Result<Self> {
        Self::new(hierarchy, [root])
    }

    /// Build a finder for the forest spanned by `roots`.
    ///
    /// The forest is validated first: there must be at least one root, roots must not report
    /// a parent or be given twice, no node may be reachable twice, and every child must report
    /// the node listing it as its parent.
    pub fn new<H: Hierarchy<Node = N>>(
        hierarchy: &H,
        roots: impl IntoIterator<Item = N>,
    ) -> Result<Self> {
        let roots: Vec<N> = roots.into_iter().collect();
        validate(hierarchy, &roots)?;

        let nodes = breadth_first(hierarchy, &roots);
        let index: HashMap<N, usize> = nodes.iter().enumerate().map(|(i, n)| (*n, i)).collect();
        let count = nodes.len();

        let mut finder = Self {
            nodes,
            index,
            tree: vec![0; count],
            depth: vec![0; count],
            representative: vec![UNVISITED; count],
            tour: Vec::with_capacity(2 * count),
            levels: Vec::with_capacity(2 * count),
            sparse: Vec::new(),
            log2: Vec::new(),
            trees: 0,
        };
        for root in &roots {
            let root = finder.index[root];
            finder.euler_tour(hierarchy, root);
            finder.trees += 1;
        }
        finder.build_sparse_table();
        tracing::debug!(
            nodes = count,
            trees = finder.trees,
            tour = finder.tour.len(),
            "built LCA index"
        );
        Ok(finder)
    }

    /// The lowest common ancestor of `a` and `b`.
    ///
    /// Returns `Ok(None)` when the nodes belong to different trees and an error when either
    /// node is not part of the forest. `lca(a, a)` is `a`.
    pub fn lca(&self, a: N, b: N) -> Result<Option<N>> {
        let ia = self.index_of(&a)?;
        let ib = self.index_of(&b)?;
        if a == b {
            return Ok(Some(a));
        }
        if self.tree[ia] != self.tree[ib] {
            return Ok(None);
        }
        let (mut lo, mut hi) = (self.representative[ia], self.representative[ib]);
        if lo > hi {
            core::mem::swap(&mut lo, &mut hi);
        }
        let k = self.log2[hi - lo + 1];
        let left = self.sparse[k][lo];
        let right = self.sparse[k][hi + 1 - (1 << k)];
        let pos = if self.levels[left] > self.levels[right] {
            right
        } else {
            left
        };
        Ok(Some(self.nodes[self.tour[pos]]))
    }

    /// Whether `node` is part of the forest.
    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Number of nodes in the forest.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the forest has no nodes. Construction rejects an empty root set, so a built
    /// finder reports `false`.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of trees in the forest.
    pub fn tree_count(&self) -> usize {
        self.trees
    }

    /// Distance from `node` to the root of its tree.
    pub fn depth(&self, node: &N) -> Result<usize> {
        Ok(self.depth[self.index_of(node)?])
    }

    /// Number of the tree containing `node`, counting roots in the order they were given.
    pub fn tree_of(&self, node: &N) -> Result<usize> {
        Ok(self.tree[self.index_of(node)?])
    }

    fn index_of(&self, node: &N) -> Result<usize> {
        self.index
            .get(node)
            .copied()
            .ok_or_else(|| Error::UnknownNode(format!("{node:?}")))
    }

    /// Walk the tree below `root`. Validation guarantees a forest, so a node whose
    /// representative is still unset is being entered for the first time.
    fn euler_tour<H: Hierarchy<Node = N>>(&mut self, hierarchy: &H, root: usize) {
        let mut stack = vec![(root, 0_usize)];
        while let Some((n, level)) = stack.pop() {
            if self.representative[n] == UNVISITED {
                self.tree[n] = self.trees;
                self.depth[n] = level;
                self.representative[n] = self.tour.len();
                let node = self.nodes[n];
                for child in hierarchy.children_of(&node) {
                    // The parent is pushed again so the tour returns to it after the child.
                    stack.push((n, level));
                    stack.push((self.index[&child], level + 1));
                }
            }
            self.tour.push(n);
            self.levels.push(level);
        }
    }

    fn build_sparse_table(&mut self) {
        let len = self.tour.len();
        self.log2 = vec![0; len + 1];
        for i in 2..=len {
            self.log2[i] = self.log2[i / 2] + 1;
        }
        self.sparse = vec![(0..len).collect()];
        let mut k = 1;
        while (1 << k) <= len {
            let half = 1 << (k - 1);
            let prev = &self.sparse[k - 1];
            let row: Vec<usize> = (0..=len - (1 << k))
                .map(|j| {
                    let (left, right) = (prev[j], prev[j + half]);
                    if self.levels[left] < self.levels[right] {
                        left
                    } else {
                        right
                    }
                })
                .collect();
            self.sparse.push(row);
            k += 1;
        }
    }
}

/// Depth-first pre-order check that `roots` span a forest with consistent links.
fn validate<H: Hierarchy>(hierarchy: &H, roots: &[H::Node]) -> Result<()> {
    if roots.is_empty() {
        return Err(Error::EmptyRoots);
    }
    let mut visited: HashSet<H::Node> = HashSet::new();
    let mut stack = Vec::new();
    for root in roots {
        if let Some(parent) = hierarchy.parent_of(root) {
            return Err(Error::RootHasParent {
                root: format!("{root:?}"),
                parent: format!("{parent:?}"),
            });
        }
        if visited.contains(root) {
            return Err(Error::DuplicateRoot(format!("{root:?}")));
        }
        stack.push(*root);
        while let Some(node) = stack.pop() {
            if !visited.insert(node) {
                return Err(Error::Revisited(format!("{node:?}")));
            }
            for child in hierarchy.children_of(&node) {
                let reported = hierarchy.parent_of(&child);
                if reported != Some(node) {
                    return Err(Error::InconsistentParent {
                        child: format!("{child:?}"),
                        parent: format!("{node:?}"),
                        reported: format!("{reported:?}"),
                    });
                }
                stack.push(child);
            }
        }
    }
    Ok(())
}

/// All nodes reachable from `roots`, roots first, then level by level.
fn breadth_first<H: Hierarchy>(hierarchy: &H, roots: &[H::Node]) -> Vec<H::Node> {
    let mut nodes = roots.to_vec();
    let mut next = 0;
    while next < nodes.len() {
        let node = nodes[next];
        nodes.extend(hierarchy.children_of(&node));
        next += 1;
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parent table plus child lists, with nodes numbered from zero.
    struct Forest {
        parents: Vec<Option<usize>>,
        children: Vec<Vec<usize>>,
    }

    impl Forest {
        fn from_parents(parents: &[Option<usize>]) -> Self {
            let mut children = vec![Vec::new(); parents.len()];
            for (child, parent) in parents.iter().enumerate() {
                if let Some(parent) = parent {
                    children[*parent].push(child);
                }
            }
            Self {
                parents: parents.to_vec(),
                children,
            }
        }

        fn naive_lca(&self, a: usize, b: usize) -> Option<usize> {
            let mut ancestors = Vec::new();
            let mut cur = Some(a);
            while let Some(n) = cur {
                ancestors.push(n);
                cur = self.parents[n];
            }
            let mut cur = Some(b);
            while let Some(n) = cur {
                if ancestors.contains(&n) {
                    return Some(n);
                }
                cur = self.parents[n];
            }
            None
        }
    }

    impl Hierarchy for Forest {
        type Node = usize;

        fn parent_of(&self, node: &usize) -> Option<usize> {
            self.parents[*node]
        }

        fn children_of(&self, node: &usize) -> impl Iterator<Item = usize> {
            self.children[*node].iter().copied()
        }
    }

    //        0
    //      /   \
    //     1     2
    //    / \   / \
    //   3   4 5   6
    fn binary_tree() -> Forest {
        Forest::from_parents(&[None, Some(0), Some(0), Some(1), Some(1), Some(2), Some(2)])
    }

    #[test]
    fn seven_node_binary_tree() {
        let forest = binary_tree();
        let finder = LcaFinder::from_root(&forest, 0).unwrap();
        assert_eq!(finder.lca(3, 4).unwrap(), Some(1));
        assert_eq!(finder.lca(3, 5).unwrap(), Some(0));
        assert_eq!(finder.lca(5, 6).unwrap(), Some(2));
        assert_eq!(finder.lca(4, 2).unwrap(), Some(0));
        assert_eq!(finder.lca(3, 1).unwrap(), Some(1));
        assert_eq!(finder.lca(0, 6).unwrap(), Some(0));
        assert_eq!(finder.lca(6, 6).unwrap(), Some(6));
        assert_eq!(finder.len(), 7);
        assert_eq!(finder.depth(&0).unwrap(), 0);
        assert_eq!(finder.depth(&5).unwrap(), 2);
    }

    #[test]
    fn symmetric_and_reflexive_on_all_pairs() {
        let forest = binary_tree();
        let finder = LcaFinder::from_root(&forest, 0).unwrap();
        for a in 0..7 {
            assert_eq!(finder.lca(a, a).unwrap(), Some(a));
            for b in 0..7 {
                assert_eq!(finder.lca(a, b).unwrap(), finder.lca(b, a).unwrap());
            }
        }
    }

    #[test]
    fn matches_naive_walk_on_irregular_tree() {
        // Pseudo-random parent for every node among the earlier ones.
        let mut parents = vec![None];
        let mut seed = 0x2545_f491_u64;
        for i in 1..60_usize {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            parents.push(Some((seed % i as u64) as usize));
        }
        let forest = Forest::from_parents(&parents);
        let finder = LcaFinder::from_root(&forest, 0).unwrap();
        for a in 0..60 {
            for b in 0..60 {
                assert_eq!(
                    finder.lca(a, b).unwrap(),
                    forest.naive_lca(a, b),
                    "lca({a}, {b})"
                );
            }
        }
    }

    #[test]
    fn separate_trees_have_no_common_ancestor() {
        // Two trees: 0 -> {1, 2} and 3 -> {4}.
        let forest = Forest::from_parents(&[None, Some(0), Some(0), None, Some(3)]);
        let finder = LcaFinder::new(&forest, [0, 3]).unwrap();
        assert_eq!(finder.tree_count(), 2);
        assert_eq!(finder.lca(1, 2).unwrap(), Some(0));
        assert_eq!(finder.lca(1, 4).unwrap(), None);
        assert_eq!(finder.lca(0, 3).unwrap(), None);
        assert_eq!(finder.tree_of(&4).unwrap(), 1);
        assert_eq!(finder.tree_of(&2).unwrap(), 0);
    }

    #[test]
    fn unknown_nodes_are_rejected() {
        // Node 2 is a separate root that is not handed to the finder.
        let forest = Forest::from_parents(&[None, Some(0), None]);
        let finder = LcaFinder::from_root(&forest, 0).unwrap();
        assert!(!finder.contains(&2));
        assert_eq!(finder.lca(0, 2), Err(Error::UnknownNode("2".into())));
        assert_eq!(finder.lca(2, 2), Err(Error::UnknownNode("2".into())));
        assert!(finder.depth(&2).is_err());
    }

    #[test]
    fn invalid_forests_are_rejected() {
        let forest = binary_tree();
        assert_eq!(
            LcaFinder::new(&forest, []).unwrap_err(),
            Error::EmptyRoots
        );
        assert!(matches!(
            LcaFinder::from_root(&forest, 1),
            Err(Error::RootHasParent { .. })
        ));
        assert_eq!(
            LcaFinder::new(&forest, [0, 0]).unwrap_err(),
            Error::DuplicateRoot("0".into())
        );

        // Node 2 lists 3 as a child, but 3 reports 1 as its parent.
        let mut crossed = binary_tree();
        crossed.children[2].push(3);
        assert!(matches!(
            LcaFinder::from_root(&crossed, 0),
            Err(Error::InconsistentParent { .. })
        ));

        // Node 1 lists child 3 twice.
        let mut doubled = binary_tree();
        doubled.children[1].push(3);
        assert_eq!(
            LcaFinder::from_root(&doubled, 0).unwrap_err(),
            Error::Revisited("3".into())
        );
    }

    #[test]
    fn forest_of_many_small_trees() {
        // 20_000 roots; every third root also has one child.
        let roots = 20_000;
        let mut parents = vec![None; roots];
        for root in (0..roots).step_by(3) {
            parents.push(Some(root));
        }
        let forest = Forest::from_parents(&parents);
        let finder = LcaFinder::new(&forest, 0..roots).unwrap();
        assert_eq!(finder.tree_count(), roots);
        assert_eq!(finder.len(), parents.len());
        assert!(!finder.is_empty());

        let first_child = roots;
        assert_eq!(finder.lca(first_child, 0).unwrap(), Some(0));
        assert_eq!(finder.depth(&first_child).unwrap(), 1);
        assert_eq!(finder.lca(first_child, 1).unwrap(), None);
        let last = roots - 1;
        assert_eq!(finder.tree_of(&last).unwrap(), last);
        assert_eq!(finder.lca(last, last).unwrap(), Some(last));
        assert_eq!(finder.lca(last - 1, last).unwrap(), None);
    }

    #[test]
    fn finder_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LcaFinder<usize>>();
    }
}
