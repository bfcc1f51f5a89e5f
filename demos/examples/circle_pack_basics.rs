// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circle packing basics.
//!
//! Packs a handful of district circles and prints where each one ended up, relative to the
//! center of the enclosing circle.
//!
//! Run:
//! - `cargo run -p skyline_demos --example circle_pack_basics`

use skyline_circle_pack::{CirclePackOptions, pack_radii, smallest_enclosing_circle};

fn main() {
    let districts = [
        ("core", 4.0),
        ("ui", 2.5),
        ("net", 2.0),
        ("io", 1.5),
        ("util", 1.0),
        ("test", 0.75),
    ];
    let options = CirclePackOptions {
        relative_margin: 0.1,
        ..Default::default()
    };
    let packing = pack_radii(&districts, &options).unwrap();

    println!("== Packed circles ==");
    for c in &packing.circles {
        println!(
            "{:>5}: center ({:7.3}, {:7.3}) radius {:.2}",
            c.key, c.center.x, c.center.y, c.radius
        );
    }
    println!("enclosing radius (with margin): {:.3}", packing.radius);

    let tight = smallest_enclosing_circle(&packing.circles).unwrap();
    println!(
        "tight enclosing circle: center ({:.3}, {:.3}) radius {:.3}",
        tight.center.x, tight.center.y, tight.radius
    );
}
