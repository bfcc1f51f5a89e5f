// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! PTree basics.
//!
//! Splits a few rectangles out of a kd-tree by hand, releases one again, and then packs a
//! set of building footprints with the sibling packer.
//!
//! Run:
//! - `cargo run -p skyline_demos --example ptree_basics`

use kurbo::{Point, Size};
use skyline_ptree::{PTree, PackOptions, pack};

fn main() {
    let mut tree = PTree::new(Point::ORIGIN, Size::new(10.0, 10.0));

    let a = tree.split(tree.root(), Size::new(6.0, 4.0)).unwrap();
    println!("== Manual splits ==");
    println!("a -> {:?}", tree.get(a).unwrap().rect());

    let b_leaf = tree
        .sufficiently_large_leaves(Size::new(5.0, 5.0))
        .next()
        .unwrap();
    let b = tree.split(b_leaf, Size::new(5.0, 5.0)).unwrap();
    println!("b -> {:?}", tree.get(b).unwrap().rect());

    for id in tree.free_leaves() {
        println!("  free: {:?}", tree.get(*id).unwrap().rect());
    }

    tree.release(a).unwrap();
    println!(
        "after releasing a: {} free leaves, {} nodes",
        tree.free_leaves().len(),
        tree.len()
    );

    println!("\n== Sibling packing ==");
    let sizes = [
        Size::new(4.0, 3.0),
        Size::new(2.0, 2.0),
        Size::new(5.0, 1.0),
        Size::new(1.0, 1.0),
        Size::new(3.0, 3.0),
    ];
    let options = PackOptions {
        padding: 0.25,
        ..Default::default()
    };
    let packing = pack(&sizes, &options).unwrap();
    for (size, placement) in sizes.iter().zip(&packing.placements) {
        println!("{:?} at {:?}", size, placement.origin);
    }
    println!("covered: {:?}", packing.covered);
}
