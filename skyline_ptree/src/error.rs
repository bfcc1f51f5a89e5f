// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by [`PTree`](crate::PTree) and [`pack`](crate::pack()).

use kurbo::Size;

use crate::types::PNodeId;

/// Precondition violations of the kd-tree operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// [`PTree::split`](crate::PTree::split) was called on a node that is occupied or
    /// already split.
    #[error("node {0:?} is not a free leaf")]
    NotAFreeLeaf(PNodeId),
    /// The requested size exceeds the free leaf in at least one dimension.
    #[error("requested size {requested:?} does not fit into {available:?}")]
    DoesNotFit {
        /// Size handed to `split`.
        requested: Size,
        /// Size of the leaf that was asked to host it.
        available: Size,
    },
    /// [`PTree::release`](crate::PTree::release) was called on a node that is not an
    /// occupied leaf.
    #[error("node {0:?} is not an occupied leaf")]
    NotOccupied(PNodeId),
    /// Packing found no free leaf large enough for an element.
    #[error("no free leaf can host an element of size {size:?}")]
    NoFreeLeaf {
        /// Padded size of the element that could not be placed.
        size: Size,
    },
}

/// Result alias for this crate.
pub type Result<T> = core::result::Result<T, Error>;
