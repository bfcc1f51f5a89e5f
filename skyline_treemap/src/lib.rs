// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skyline Treemap: squarified treemap tiling.
//!
//! [`squarified`] partitions a rectangle into one [`Tile`] per weighted item, with tile areas
//! proportional to the weights and aspect ratios kept close to 1. [`squarified_with_padding`]
//! additionally insets every tile so that neighbors do not touch.
//!
//! ## Example
//!
//! ```
//! use skyline_treemap::{Tile, squarified};
//!
//! let items = [("a", 6.0), ("b", 6.0), ("c", 4.0), ("d", 3.0), ("e", 2.0), ("f", 2.0), ("g", 1.0)];
//! let tiles = squarified(&items, Tile::new(0.0, 0.0, 6.0, 4.0));
//!
//! assert_eq!(tiles.len(), 7);
//! let total: f64 = tiles.iter().map(|(_, tile)| tile.area()).sum();
//! assert!((total - 24.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod squarify;
mod tile;

pub use squarify::{squarified, squarified_with_padding};
pub use tile::Tile;
