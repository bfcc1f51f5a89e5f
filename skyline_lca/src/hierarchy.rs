// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Access to the forest an [`LcaFinder`](crate::LcaFinder) is built over.

use core::fmt::Debug;
use core::hash::Hash;

/// Parent and child links of a forest.
///
/// Implement this for whatever owns the hierarchy (a scene, a graph of layout nodes, a plain
/// parent table). Both directions are needed: children drive the traversal, parents are
/// checked against them.
pub trait Hierarchy {
    /// Node handle. Cheap to copy and usable as a hash key.
    type Node: Copy + Eq + Hash + Debug;

    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Returns the children of `node`.
    fn children_of(&self, node: &Self::Node) -> impl Iterator<Item = Self::Node>;
}
