// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the kd-tree: node identifiers and cells.

use kurbo::{Point, Rect, Size};

/// Identifier for a node in a [`PTree`](crate::PTree).
///
/// A slot index plus a generation counter. Splitting allocates nodes; releasing a leaf can
/// merge free siblings back into their parent (see [`PTree::release`](crate::PTree::release)),
/// which frees their slots. A freed slot is reused with an incremented generation, so a
/// stale `PNodeId` never aliases a newer node.
///
/// Use [`PTree::is_alive`](crate::PTree::is_alive) to check whether an identifier still refers
/// to a node of the tree.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PNodeId(pub(crate) u32, pub(crate) u32);

impl PNodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// An axis-aligned region of the plane, stored as origin plus size.
///
/// Exact-fit checks in [`PTree::split`](crate::PTree::split) compare stored sizes, never
/// extents recovered from corner differences.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cell {
    /// Upper-left corner.
    pub origin: Point,
    /// Extent along x (width) and y (height).
    pub size: Size,
}

impl Cell {
    /// Create a cell from its upper-left corner and size.
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// The cell as a Kurbo rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// The area covered by the cell.
    pub fn area(&self) -> f64 {
        self.size.width * self.size.height
    }

    /// The corner opposite to the origin.
    pub fn far_corner(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width,
            self.origin.y + self.size.height,
        )
    }
}

/// Whether `sub` fits into `container` in both dimensions.
#[inline]
pub fn fits_into(sub: Size, container: Size) -> bool {
    sub.width <= container.width && sub.height <= container.height
}
