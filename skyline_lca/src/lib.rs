// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skyline LCA: lowest common ancestors in a forest.
//!
//! [`LcaFinder`] indexes a forest exposed through the [`Hierarchy`] trait and then answers
//! lowest common ancestor queries in constant time. Building the index validates the forest
//! (see [`Error`] for what is rejected); the index is immutable afterwards and can be shared
//! between threads.
//!
//! ## Example
//!
//! ```
//! use skyline_lca::{Hierarchy, LcaFinder};
//!
//! // 0 -> {1, 2}, 1 -> {3}
//! struct Parents([Option<usize>; 4]);
//!
//! impl Hierarchy for Parents {
//!     type Node = usize;
//!
//!     fn parent_of(&self, node: &usize) -> Option<usize> {
//!         self.0[*node]
//!     }
//!
//!     fn children_of(&self, node: &usize) -> impl Iterator<Item = usize> {
//!         let node = *node;
//!         (0..4).filter(move |&c| self.0[c] == Some(node))
//!     }
//! }
//!
//! let parents = Parents([None, Some(0), Some(0), Some(1)]);
//! let finder = LcaFinder::from_root(&parents, 0).unwrap();
//!
//! assert_eq!(finder.lca(3, 2).unwrap(), Some(0));
//! assert_eq!(finder.lca(3, 1).unwrap(), Some(1));
//! assert!(finder.lca(3, 7).is_err());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod finder;
mod hierarchy;

pub use error::{Error, Result};
pub use finder::LcaFinder;
pub use hierarchy::Hierarchy;
