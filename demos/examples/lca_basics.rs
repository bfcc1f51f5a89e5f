// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! LCA basics.
//!
//! Builds a finder over a small package forest and asks for common ancestors, including a
//! pair from different trees and a node the finder never saw.
//!
//! Run:
//! - `cargo run -p skyline_demos --example lca_basics`

use std::collections::HashMap;

use skyline_lca::{Hierarchy, LcaFinder};

/// Package hierarchy given as child -> parent pairs.
struct Packages {
    parents: HashMap<&'static str, &'static str>,
}

impl Hierarchy for Packages {
    type Node = &'static str;

    fn parent_of(&self, node: &&'static str) -> Option<&'static str> {
        self.parents.get(node).copied()
    }

    fn children_of(&self, node: &&'static str) -> impl Iterator<Item = &'static str> {
        let node = *node;
        self.parents
            .iter()
            .filter(move |(_, parent)| **parent == node)
            .map(|(child, _)| *child)
    }
}

fn main() {
    let parents = HashMap::from([
        ("see.layout", "see"),
        ("see.layout.packing", "see.layout"),
        ("see.layout.treemap", "see.layout"),
        ("see.game", "see"),
        ("see.game.city", "see.game"),
        ("tests.layout", "tests"),
    ]);
    let packages = Packages { parents };
    let finder = LcaFinder::new(&packages, ["see", "tests"]).unwrap();
    println!("{finder:?}");

    let queries = [
        ("see.layout.packing", "see.layout.treemap"),
        ("see.layout.packing", "see.game.city"),
        ("see.game", "see.game.city"),
        ("see.layout", "tests.layout"),
        ("see.layout", "unknown"),
    ];
    for (a, b) in queries {
        match finder.lca(a, b) {
            Ok(Some(ancestor)) => println!("lca({a}, {b}) = {ancestor}"),
            Ok(None) => println!("lca({a}, {b}) = none (different trees)"),
            Err(err) => println!("lca({a}, {b}) failed: {err}"),
        }
    }
}
