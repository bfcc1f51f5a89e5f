// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Treemap basics.
//!
//! Tiles a 6 x 4 area for seven weighted items, once plain and once with padding.
//!
//! Run:
//! - `cargo run -p skyline_demos --example treemap_basics`

use skyline_treemap::{Tile, squarified, squarified_with_padding};

fn main() {
    let items = [
        ("a", 6.0),
        ("b", 6.0),
        ("c", 4.0),
        ("d", 3.0),
        ("e", 2.0),
        ("f", 2.0),
        ("g", 1.0),
    ];
    let bounds = Tile::new(0.0, 0.0, 6.0, 4.0);

    println!("== Squarified ==");
    for (key, tile) in squarified(&items, bounds) {
        println!(
            "{key}: x {:.3} z {:.3} {:.3} x {:.3} (aspect {:.2})",
            tile.x,
            tile.z,
            tile.width,
            tile.depth,
            tile.aspect_ratio()
        );
    }

    println!("\n== With padding 0.1 ==");
    for (key, tile) in squarified_with_padding(&items, bounds, 0.1) {
        println!("{key}: {:?}", tile.to_rect());
    }
}
