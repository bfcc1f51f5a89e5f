// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The squarified treemap algorithm (Bruls, Huizing, van Wijk).
//!
//! Items are laid out in rows along the shorter side of the space that is still free. A row
//! keeps growing while adding the next item does not make its worst aspect ratio worse; then
//! it is frozen and the rest of the items go into the leftover space.

use alloc::vec::Vec;

use crate::tile::Tile;

/// Tile `bounds` into one tile per item, with areas proportional to the item weights.
///
/// Weights are rescaled so that they sum to the area of `bounds`. The result is ordered by
/// descending weight (stable for equal weights), which is also the order in which tiles are
/// placed. An empty input yields an empty result.
///
/// Weights must be positive; this is only checked in debug builds.
pub fn squarified<K: Copy>(items: &[(K, f64)], bounds: Tile) -> Vec<(K, Tile)> {
    if items.is_empty() {
        return Vec::new();
    }
    debug_assert!(
        items.iter().all(|(_, weight)| *weight > 0.0),
        "treemap weights must be positive"
    );

    let total: f64 = items.iter().map(|(_, weight)| weight).sum();
    let scale = bounds.area() / total;
    let mut sizes: Vec<(K, f64)> = items
        .iter()
        .map(|&(key, weight)| (key, weight * scale))
        .collect();
    sizes.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut result = Vec::with_capacity(sizes.len());
    let mut space = bounds;
    let mut rest = &sizes[..];
    while !rest.is_empty() {
        let mut len = 1;
        while len < rest.len()
            && worst_aspect_ratio(&rest[..len], space) >= worst_aspect_ratio(&rest[..=len], space)
        {
            len += 1;
        }
        let (row, tail) = rest.split_at(len);
        result.extend(row.iter().map(|(key, _)| *key).zip(layout_row(row, space)));
        space = remaining_space(row, space);
        rest = tail;
    }
    tracing::debug!(tiles = result.len(), "squarified treemap");
    result
}

/// [`squarified`], then every tile shrunk by `padding` (see [`Tile::padded`]).
pub fn squarified_with_padding<K: Copy>(
    items: &[(K, f64)],
    bounds: Tile,
    padding: f64,
) -> Vec<(K, Tile)> {
    let mut tiles = squarified(items, bounds);
    for (_, tile) in &mut tiles {
        *tile = tile.padded(padding);
    }
    tiles
}

fn row_sum<K>(row: &[(K, f64)]) -> f64 {
    row.iter().map(|(_, size)| size).sum()
}

/// Lay `row` out along the shorter side of `space`.
///
/// A space at least as wide as deep gets a column of full depth stacked along z; otherwise
/// the row spans the full width and is stacked along x.
fn layout_row<K>(row: &[(K, f64)], space: Tile) -> impl Iterator<Item = Tile> + '_ {
    let sum = row_sum(row);
    let along_z = space.width >= space.depth;
    let thickness = if along_z {
        sum / space.depth
    } else {
        sum / space.width
    };
    let mut offset = 0.0;
    row.iter().map(move |(_, size)| {
        let length = size / thickness;
        let tile = if along_z {
            Tile::new(space.x, space.z + offset, thickness, length)
        } else {
            Tile::new(space.x + offset, space.z, length, thickness)
        };
        offset += length;
        tile
    })
}

/// The part of `space` left over after laying out `row`.
fn remaining_space<K>(row: &[(K, f64)], space: Tile) -> Tile {
    let sum = row_sum(row);
    if space.width >= space.depth {
        let used = sum / space.depth;
        Tile::new(space.x + used, space.z, space.width - used, space.depth)
    } else {
        let used = sum / space.width;
        Tile::new(space.x, space.z + used, space.width, space.depth - used)
    }
}

fn worst_aspect_ratio<K>(row: &[(K, f64)], space: Tile) -> f64 {
    layout_row(row, space)
        .map(|tile| tile.aspect_ratio())
        .fold(0.0, f64::max)
}
