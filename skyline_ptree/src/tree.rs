// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core kd-tree implementation: splitting, releasing, and leaf queries.

use alloc::vec;
use alloc::vec::Vec;
use kurbo::{Point, Rect, Size};

use crate::error::{Error, Result};
use crate::types::{Cell, PNodeId, fits_into};

/// A node of the kd-tree.
///
/// Inner nodes have exactly two children whose cells tile the parent's cell. Leaves are
/// either occupied (allocated to a caller) or free.
#[derive(Clone, Debug)]
pub struct PNode {
    generation: u32,
    cell: Cell,
    occupied: bool,
    parent: Option<PNodeId>,
    children: Option<[PNodeId; 2]>,
}

impl PNode {
    fn new(generation: u32, cell: Cell, parent: Option<PNodeId>) -> Self {
        Self {
            generation,
            cell,
            occupied: false,
            parent,
            children: None,
        }
    }

    /// The region represented by this node.
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// The region represented by this node as a Kurbo rectangle.
    pub fn rect(&self) -> Rect {
        self.cell.rect()
    }

    /// Whether this node has been allocated.
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Parent node, `None` for the root.
    pub fn parent(&self) -> Option<PNodeId> {
        self.parent
    }

    /// Upper (horizontal split) or left (vertical split) child.
    pub fn left(&self) -> Option<PNodeId> {
        self.children.map(|[left, _]| left)
    }

    /// Lower (horizontal split) or right (vertical split) child.
    pub fn right(&self) -> Option<PNodeId> {
        self.children.map(|[_, right]| right)
    }
}

/// A two-dimensional kd-tree partitioning a rectangle into allocated and free cells.
///
/// The root corresponds to the entire available space; every other node is a partition of
/// its parent. Allocation happens through [`PTree::split`] on a free leaf, candidate leaves
/// are found with [`PTree::sufficiently_large_leaves`].
///
/// Free leaves are kept in creation order and scanned linearly.
pub struct PTree {
    nodes: Vec<Option<PNode>>, // slots
    generations: Vec<u32>,     // last generation per slot (persists across merges)
    vacant: Vec<usize>,
    free_leaves: Vec<PNodeId>,
}

impl core::fmt::Debug for PTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("PTree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_leaves", &self.free_leaves.len())
            .field("root", &self.root_cell())
            .finish_non_exhaustive()
    }
}

impl PTree {
    /// Create a tree whose root covers the rectangle at `origin` with the given `size`.
    ///
    /// The root is the only free leaf.
    pub fn new(origin: Point, size: Size) -> Self {
        let root = PNode::new(1, Cell::new(origin, size), None);
        Self {
            nodes: vec![Some(root)],
            generations: vec![1],
            vacant: Vec::new(),
            free_leaves: vec![PNodeId::new(0, 1)],
        }
    }

    /// The root node, covering the whole space.
    pub const fn root(&self) -> PNodeId {
        PNodeId::new(0, 1)
    }

    /// The root's cell.
    pub fn root_cell(&self) -> Cell {
        self.node(self.root()).cell
    }

    /// Look up a node. Returns `None` for identifiers of merged-away nodes.
    pub fn get(&self, id: PNodeId) -> Option<&PNode> {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .filter(|n| n.generation == id.1)
    }

    /// Returns true if `id` refers to a node that is still part of the tree.
    pub fn is_alive(&self, id: PNodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live nodes (inner nodes and leaves). Never zero, the root always exists.
    #[expect(
        clippy::len_without_is_empty,
        reason = "A PTree always holds its root node."
    )]
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// The leaves that are not occupied, in the order they were created.
    pub fn free_leaves(&self) -> &[PNodeId] {
        &self.free_leaves
    }

    /// Whether `id` is currently a free leaf.
    pub fn is_free_leaf(&self, id: PNodeId) -> bool {
        self.free_leaves.contains(&id)
    }

    /// All free leaves whose cell can host a rectangle of `size` in both dimensions.
    ///
    /// This is the candidate set for a placement heuristic; see [`crate::pack()`].
    pub fn sufficiently_large_leaves(&self, size: Size) -> impl Iterator<Item = PNodeId> + '_ {
        self.free_leaves
            .iter()
            .copied()
            .filter(move |id| fits_into(size, self.node(*id).cell.size))
    }

    /// Pre-order traversal of the subtree rooted at `id` (inclusive).
    pub fn descendants(&self, id: PNodeId) -> impl Iterator<Item = PNodeId> + '_ {
        let mut stack = if self.is_alive(id) {
            vec![id]
        } else {
            Vec::new()
        };
        core::iter::from_fn(move || {
            let next = stack.pop()?;
            if let Some([left, right]) = self.node(next).children {
                stack.push(right);
                stack.push(left);
            }
            Some(next)
        })
    }

    /// All occupied leaves, in pre-order.
    pub fn occupied_leaves(&self) -> impl Iterator<Item = PNodeId> + '_ {
        self.descendants(self.root())
            .filter(|id| self.node(*id).occupied)
    }

    /// Allocate a rectangle of `size` in the free leaf `node`.
    ///
    /// The allocated rectangle is anchored at the leaf's origin (its upper-left corner). Let
    /// R be the leaf's rectangle and R' the requested one:
    ///
    /// - R' has the size of R: the leaf itself becomes occupied; no new leaves are created.
    /// - Same width, smaller height: R is split horizontally; the upper part is R' and the
    ///   lower part becomes a free leaf.
    /// - Same height, smaller width: R is split vertically; the left part is R' and the
    ///   right part becomes a free leaf.
    /// - Both smaller: R is split horizontally into an upper part (as wide as R, as high as
    ///   R') and a free lower part; the upper part is then split vertically into R' and a
    ///   free right part.
    ///
    /// Returns the occupied node. Fails without touching the tree if `node` is not a free
    /// leaf or if `size` exceeds its cell in either dimension.
    pub fn split(&mut self, node: PNodeId, size: Size) -> Result<PNodeId> {
        let position = self
            .free_leaves
            .iter()
            .position(|id| *id == node)
            .ok_or(Error::NotAFreeLeaf(node))?;
        let Cell {
            origin,
            size: available,
        } = self.node(node).cell;
        if !fits_into(size, available) {
            return Err(Error::DoesNotFit {
                requested: size,
                available,
            });
        }
        self.free_leaves.remove(position);

        let fit = if size.width == available.width {
            if size.height == available.height {
                node
            } else {
                let (upper, _) = self.divide(
                    node,
                    Cell::new(origin, size),
                    Cell::new(
                        Point::new(origin.x, origin.y + size.height),
                        Size::new(available.width, available.height - size.height),
                    ),
                );
                upper
            }
        } else if size.height == available.height {
            let (left, _) = self.divide(
                node,
                Cell::new(origin, size),
                Cell::new(
                    Point::new(origin.x + size.width, origin.y),
                    Size::new(available.width - size.width, size.height),
                ),
            );
            left
        } else {
            let (upper, _) = self.divide(
                node,
                Cell::new(origin, Size::new(available.width, size.height)),
                Cell::new(
                    Point::new(origin.x, origin.y + size.height),
                    Size::new(available.width, available.height - size.height),
                ),
            );
            let (left, _) = self.divide(
                upper,
                Cell::new(origin, size),
                Cell::new(
                    Point::new(origin.x + size.width, origin.y),
                    Size::new(available.width - size.width, size.height),
                ),
            );
            left
        };
        self.node_mut(fit).occupied = true;
        tracing::trace!(node = ?node, fit = ?fit, requested = ?size, "split free leaf");
        Ok(fit)
    }

    /// Give an occupied leaf back.
    ///
    /// The leaf becomes free again. Walking upward, every parent whose two children are now
    /// free leaves absorbs them and becomes a single free leaf; identifiers of the absorbed
    /// children go stale (see [`PTree::is_alive`]).
    pub fn release(&mut self, node: PNodeId) -> Result<()> {
        match self.get(node) {
            Some(n) if n.occupied && n.is_leaf() => {}
            _ => return Err(Error::NotOccupied(node)),
        }
        self.node_mut(node).occupied = false;
        self.free_leaves.push(node);

        let mut current = node;
        while let Some(parent) = self.node(current).parent {
            let Some([left, right]) = self.node(parent).children else {
                break;
            };
            if !(self.is_free_leaf(left) && self.is_free_leaf(right)) {
                break;
            }
            self.free_leaves.retain(|id| *id != left && *id != right);
            self.vacate(left);
            self.vacate(right);
            self.node_mut(parent).children = None;
            self.free_leaves.push(parent);
            current = parent;
        }
        tracing::trace!(node = ?node, merged_into = ?current, "released leaf");
        Ok(())
    }

    // --- internals ---

    /// Access a node; panics if `id` is stale.
    pub(crate) fn node(&self, id: PNodeId) -> &PNode {
        self.get(id).expect("dangling PNodeId")
    }

    fn node_mut(&mut self, id: PNodeId) -> &mut PNode {
        self.nodes[id.idx()]
            .as_mut()
            .filter(|n| n.generation == id.1)
            .expect("dangling PNodeId")
    }

    /// Attach two children to `parent`; the second one becomes a free leaf.
    fn divide(&mut self, parent: PNodeId, first: Cell, second: Cell) -> (PNodeId, PNodeId) {
        let first = self.alloc(first, parent);
        let second = self.alloc(second, parent);
        self.node_mut(parent).children = Some([first, second]);
        self.free_leaves.push(second);
        (first, second)
    }

    fn alloc(&mut self, cell: Cell, parent: PNodeId) -> PNodeId {
        let (idx, generation) = if let Some(idx) = self.vacant.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(PNode::new(generation, cell, Some(parent)));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(PNode::new(generation, cell, Some(parent))));
            self.generations.push(generation);
            (self.nodes.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "PNodeId uses 32-bit indices by design."
        )]
        PNodeId::new(idx as u32, generation)
    }

    fn vacate(&mut self, id: PNodeId) {
        self.nodes[id.idx()] = None;
        self.vacant.push(id.idx());
    }
}
