// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sibling rectangle packing on top of [`PTree`].
//!
//! ## Placement heuristic
//!
//! Elements are placed largest area first. A running covered rectangle (the bounding box of
//! everything placed so far, anchored at the origin) decides between the candidate leaves
//! returned by [`PTree::sufficiently_large_leaves`]:
//!
//! - Preservers are leaves where the element fits without growing the covered rectangle.
//!   The one with the least wasted area wins.
//! - Expanders grow the covered rectangle. If there is no preserver, the expander whose
//!   grown covered rectangle is closest to a square wins.
//!
//! Ties keep the earlier leaf in free-list order.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use kurbo::{Point, Rect, Size};

use crate::error::{Error, Result};
use crate::tree::PTree;
use crate::types::{PNodeId, fits_into};

/// Options for [`pack`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackOptions {
    /// Gap kept around every element, on each side. Two neighbors end up `2 * padding` apart.
    pub padding: f64,
    /// Factor applied to the worst-case space given to the tree.
    ///
    /// The worst case (all widths summed by all heights summed) always suffices in exact
    /// arithmetic; the slack absorbs floating-point imprecision.
    pub slack: f64,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            padding: 0.0,
            slack: 1.1,
        }
    }
}

/// Where one element ended up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Upper-left corner, padding already removed.
    pub origin: Point,
    /// The element's size as requested.
    pub size: Size,
}

impl Placement {
    /// The placed element as a rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Center of the placed element.
    pub fn center(&self) -> Point {
        self.rect().center()
    }
}

/// Result of [`pack`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Packing {
    /// One placement per input size, in input order.
    pub placements: Vec<Placement>,
    /// Extent of the area used by all elements including their padding, starting at the
    /// origin.
    pub covered: Size,
}

/// Pack rectangles of the given sizes close together.
///
/// Returns one [`Placement`] per size in input order. An empty input gives an empty packing
/// with a zero covered size.
pub fn pack(sizes: &[Size], options: &PackOptions) -> Result<Packing> {
    if sizes.is_empty() {
        return Ok(Packing::default());
    }
    let padding = options.padding;
    let padded: Vec<Size> = sizes
        .iter()
        .map(|s| Size::new(s.width + 2.0 * padding, s.height + 2.0 * padding))
        .collect();

    // Largest area first; `sort_by` is stable so equal areas keep input order.
    let mut order: Vec<usize> = (0..sizes.len()).collect();
    order.sort_by(|&a, &b| {
        padded[b]
            .area()
            .partial_cmp(&padded[a].area())
            .unwrap_or(Ordering::Equal)
    });

    let worst_case = padded.iter().fold(Size::ZERO, |acc, s| {
        Size::new(acc.width + s.width, acc.height + s.height)
    });
    let mut tree = PTree::new(Point::ORIGIN, worst_case * options.slack);

    let mut covered = Size::ZERO;
    let mut origins = vec![Point::ORIGIN; sizes.len()];
    for &i in &order {
        let required = padded[i];
        let target =
            choose_leaf(&tree, required, covered).ok_or(Error::NoFreeLeaf { size: required })?;
        let fit = tree.split(target, required)?;
        let origin = tree.node(fit).cell().origin;
        origins[i] = origin;
        covered = grow(covered, origin, required);
        tracing::trace!(element = i, x = origin.x, y = origin.y, "placed element");
    }

    let placements = origins
        .into_iter()
        .zip(sizes)
        .map(|(origin, size)| Placement {
            origin: Point::new(origin.x + padding, origin.y + padding),
            size: *size,
        })
        .collect();
    tracing::debug!(
        elements = sizes.len(),
        width = covered.width,
        height = covered.height,
        "packed rectangles"
    );
    Ok(Packing {
        placements,
        covered,
    })
}

/// The covered rectangle after placing `size` at `origin`.
fn grow(covered: Size, origin: Point, size: Size) -> Size {
    Size::new(
        covered.width.max(origin.x + size.width),
        covered.height.max(origin.y + size.height),
    )
}

/// How far a size is from a square; 1 for a square.
fn squareness(size: Size) -> f64 {
    (size.width / size.height).max(size.height / size.width)
}

fn choose_leaf(tree: &PTree, required: Size, covered: Size) -> Option<PNodeId> {
    let mut preserver: Option<(PNodeId, f64)> = None;
    let mut expander: Option<(PNodeId, f64)> = None;
    for id in tree.sufficiently_large_leaves(required) {
        let cell = tree.node(id).cell();
        let expanded = grow(covered, cell.origin, required);
        if fits_into(expanded, covered) {
            let waste = cell.area() - required.area();
            if preserver.is_none_or(|(_, best)| waste < best) {
                preserver = Some((id, waste));
            }
        } else {
            let ratio = squareness(expanded);
            if expander.is_none_or(|(_, best)| ratio < best) {
                expander = Some((id, ratio));
            }
        }
    }
    preserver.or(expander).map(|(id, _)| id)
}
