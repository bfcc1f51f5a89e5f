// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rectangle type produced by the tiler.

use kurbo::{Point, Rect};

/// An axis-aligned tile on the ground plane.
///
/// Treemaps are laid out on the `x`/`z` plane of a 3D scene, so the second axis is called
/// `z` and the second extent `depth`. [`Tile::to_rect`] maps `z` onto Kurbo's `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tile {
    /// Left edge.
    pub x: f64,
    /// Near edge.
    pub z: f64,
    /// Extent along x.
    pub width: f64,
    /// Extent along z.
    pub depth: f64,
}

impl Tile {
    /// Create a tile from its corner and extents.
    pub const fn new(x: f64, z: f64, width: f64, depth: f64) -> Self {
        Self {
            x,
            z,
            width,
            depth,
        }
    }

    /// The tile's area.
    pub fn area(&self) -> f64 {
        self.width * self.depth
    }

    /// The midpoint, with `z` as the second coordinate.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.z + self.depth * 0.5)
    }

    /// `max(width / depth, depth / width)`; 1 for a square.
    pub fn aspect_ratio(&self) -> f64 {
        (self.width / self.depth).max(self.depth / self.width)
    }

    /// Shrink by `padding` on each side, per axis, unless the extent on that axis is at most
    /// `2 * padding`.
    pub fn padded(self, padding: f64) -> Self {
        let mut tile = self;
        if tile.width > 2.0 * padding {
            tile.x += padding;
            tile.width -= 2.0 * padding;
        }
        if tile.depth > 2.0 * padding {
            tile.z += padding;
            tile.depth -= 2.0 * padding;
        }
        tile
    }

    /// The tile as a Kurbo rectangle (`z` becomes `y`).
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.z, self.x + self.width, self.z + self.depth)
    }
}

impl From<Rect> for Tile {
    fn from(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_is_skipped_per_axis() {
        let tile = Tile::new(0.0, 0.0, 10.0, 2.0).padded(1.0);
        assert_eq!(tile, Tile::new(1.0, 0.0, 8.0, 2.0));
        let square = Tile::new(2.0, 3.0, 10.0, 10.0).padded(1.0);
        assert_eq!(square, Tile::new(3.0, 4.0, 8.0, 8.0));
    }

    #[test]
    fn rect_round_trip_maps_z_to_y() {
        let tile = Tile::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(tile.to_rect(), Rect::new(1.0, 2.0, 4.0, 6.0));
        assert_eq!(Tile::from(tile.to_rect()), tile);
        assert_eq!(tile.center(), Point::new(2.5, 4.0));
    }
}
