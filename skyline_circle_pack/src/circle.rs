// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The circle type moved around by the packer.

use core::f64::consts::TAU;
use kurbo::{Circle, Point, Vec2};

/// Tolerance of [`PackedCircle::contains`] and the enclosing-circle solver.
pub const CONTAINMENT_EPSILON: f64 = 1e-9;

/// A circle owned by a caller entity, identified by `key`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackedCircle<K> {
    /// The caller's handle for the entity this circle stands for.
    pub key: K,
    /// Current center; moved by [`pack`](crate::pack()).
    pub center: Point,
    /// Radius; restored to the caller's value when packing finishes.
    pub radius: f64,
}

impl<K> PackedCircle<K> {
    /// Create a circle at `center`.
    pub const fn new(key: K, center: Point, radius: f64) -> Self {
        Self {
            key,
            center,
            radius,
        }
    }

    /// Create circle `index` of `count` with its starting position on the unit-circle
    /// direction `2π * index / count`, scaled by its own radius.
    ///
    /// Packing only pushes circles apart, so it needs a clustered start like this one.
    pub fn seeded(key: K, radius: f64, index: usize, count: usize) -> Self {
        let angle = TAU * index as f64 / count.max(1) as f64;
        Self::new(key, (Vec2::from_angle(angle) * radius).to_point(), radius)
    }

    /// The circle as a Kurbo [`Circle`].
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }

    /// Whether `other` lies inside this circle, up to [`CONTAINMENT_EPSILON`].
    pub fn contains<L>(&self, other: &PackedCircle<L>) -> bool {
        contains(&self.circle(), &other.circle())
    }
}

/// Whether `inner` lies inside `outer`, up to [`CONTAINMENT_EPSILON`].
pub(crate) fn contains(outer: &Circle, inner: &Circle) -> bool {
    outer.center.distance(inner.center) < outer.radius - inner.radius + CONTAINMENT_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_circles_start_on_their_direction() {
        let first = PackedCircle::seeded('a', 2.0, 0, 4);
        assert!((first.center - Point::new(2.0, 0.0)).hypot() < 1e-12);
        let second = PackedCircle::seeded('b', 3.0, 1, 4);
        assert!((second.center - Point::new(0.0, 3.0)).hypot() < 1e-12);
    }

    #[test]
    fn containment_is_tolerant_of_touching() {
        let outer = PackedCircle::new((), Point::ORIGIN, 2.0);
        let inner = PackedCircle::new((), Point::new(1.0, 0.0), 1.0);
        let outside = PackedCircle::new((), Point::new(1.5, 0.0), 1.0);
        assert!(outer.contains(&inner));
        assert!(!outer.contains(&outside));
        assert!(!inner.contains(&outer));
    }
}
