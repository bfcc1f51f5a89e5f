// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while computing enclosing circles.

use kurbo::Point;

/// Failures of the three-circle closed form used by the enclosing-circle solver.
///
/// Both variants mean that no circle is internally tangent to all three boundary circles.
/// The solver reports them instead of guessing a radius.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The three centers are (nearly) collinear, so the tangency equations have no unique
    /// solution.
    #[error("centers {0:?} are collinear")]
    CollinearCenters([Point; 3]),
    /// The quadratic in the enclosing radius has no real root, or its root is negative.
    #[error("no enclosing circle is tangent to all three circles (radius {radius})")]
    DegenerateConfiguration {
        /// The rejected root; NaN when the discriminant is negative.
        radius: f64,
    },
}

/// Result alias for this crate.
pub type Result<T> = core::result::Result<T, Error>;
