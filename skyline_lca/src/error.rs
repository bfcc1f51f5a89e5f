// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while building or querying an [`LcaFinder`](crate::LcaFinder).

use alloc::string::String;

/// Invalid forests and invalid queries.
///
/// Nodes are reported by their `Debug` rendering, so the error type does not depend on the
/// node handle type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No roots were given.
    #[error("empty set of roots")]
    EmptyRoots,
    /// A root reports a parent.
    #[error("root {root} has parent {parent}")]
    RootHasParent {
        /// The offending root.
        root: String,
        /// The parent it reports.
        parent: String,
    },
    /// A node is reachable more than once, so the input is not a forest.
    #[error("node {0} can be reached more than once")]
    Revisited(String),
    /// A node lists a child that names a different parent.
    #[error("child {child} of {parent} reports parent {reported}")]
    InconsistentParent {
        /// The child in question.
        child: String,
        /// The node listing it as a child.
        parent: String,
        /// What the child reports as its parent.
        reported: String,
    },
    /// A root was given twice.
    #[error("root {0} was given more than once")]
    DuplicateRoot(String),
    /// A queried node is not part of the indexed forest.
    #[error("node {0} is not part of the forest")]
    UnknownNode(String),
}

/// Result alias for this crate.
pub type Result<T> = core::result::Result<T, Error>;
