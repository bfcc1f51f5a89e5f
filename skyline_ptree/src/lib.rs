// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skyline PTree: a Kurbo-native kd-tree for allocating rectangles inside a rectangle.
//!
//! The tree starts as a single free leaf covering the available space. Each allocation
//! ([`PTree::split`]) carves a requested size out of the upper-left corner of a free leaf and
//! leaves the remainder behind as one or two new free leaves. Releasing an allocation
//! ([`PTree::release`]) merges free siblings back together.
//!
//! On top of the tree, [`pack()`] lays out a set of sibling rectangles (for instance the
//! buildings of one district in a software city) close together, keeping the covered area
//! near square.
//!
//! ## API overview
//!
//! - [`PTree`]: the kd-tree; owns all nodes and the list of free leaves.
//! - [`PNode`]: a node; read access to its [`Cell`], occupancy, and children.
//! - [`PNodeId`]: generational handle of a node.
//! - [`pack()`] with [`PackOptions`] → [`Packing`] of one [`Placement`] per input.
//!
//! Key operations:
//! - [`PTree::split`] → the occupied node.
//! - [`PTree::sufficiently_large_leaves`] → candidate leaves for a size.
//! - [`PTree::release`] → frees an occupied leaf.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Size};
//! use skyline_ptree::PTree;
//!
//! let mut tree = PTree::new(Point::ORIGIN, Size::new(10.0, 10.0));
//!
//! // Same width, smaller height: the root is split horizontally.
//! let upper = tree.split(tree.root(), Size::new(10.0, 4.0)).unwrap();
//! assert_eq!(tree.get(upper).unwrap().cell().size, Size::new(10.0, 4.0));
//!
//! // The lower part is the only free leaf and matches exactly.
//! let lower = tree.sufficiently_large_leaves(Size::new(10.0, 6.0)).next().unwrap();
//! let fit = tree.split(lower, Size::new(10.0, 6.0)).unwrap();
//! assert_eq!(fit, lower);
//! assert!(tree.free_leaves().is_empty());
//! ```
//!
//! ### Packing siblings
//!
//! ```
//! use kurbo::Size;
//! use skyline_ptree::{pack, PackOptions};
//!
//! let sizes = [Size::new(4.0, 4.0), Size::new(2.0, 2.0), Size::new(2.0, 2.0)];
//! let packing = pack(&sizes, &PackOptions::default()).unwrap();
//!
//! assert_eq!(packing.placements.len(), 3);
//! assert!(packing.covered.width <= 6.0 && packing.covered.height <= 6.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod pack;
mod tree;
mod types;

pub use error::{Error, Result};
pub use pack::{PackOptions, Packing, Placement, pack};
pub use tree::{PNode, PTree};
pub use types::{Cell, PNodeId, fits_into};
