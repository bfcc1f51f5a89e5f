// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Relaxation-based circle packing.

use kurbo::{Point, Vec2};

use crate::circle::PackedCircle;
use crate::enclose::smallest_enclosing_circle;
use crate::error::Result;

/// Squared distance by which a pair may fall short of touching before it is pushed apart.
const CONTACT_TOLERANCE: f64 = 0.01;

/// Upper bound on the passes that resolve overlaps left by an early stop.
const SETTLE_PASSES: usize = 10_000;

/// Options for [`pack`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CirclePackOptions {
    /// Extra room around every circle, relative to its radius. Negative values are treated
    /// as zero.
    pub relative_margin: f64,
    /// Minimal gap kept between neighboring circles.
    pub min_separation: f64,
    /// Once the enclosing circle stops growing, relaxation ends as soon as a pass shrinks
    /// its radius by less than this ratio (`0.99`: less than one percent).
    pub improvement_threshold: f64,
    /// Upper bound on relaxation passes; `None` means one pass per circle.
    pub max_iterations: Option<usize>,
}

impl Default for CirclePackOptions {
    fn default() -> Self {
        Self {
            relative_margin: 0.0,
            min_separation: 0.1,
            improvement_threshold: 0.99,
            max_iterations: None,
        }
    }
}

/// Packed circles together with the radius of their enclosing circle.
#[derive(Clone, Debug, PartialEq)]
pub struct CirclePacking<K> {
    /// The circles, sorted by descending radius, centered around the origin.
    pub circles: Vec<PackedCircle<K>>,
    /// Radius of the circle around the origin that encloses all of them.
    pub radius: f64,
}

impl<K: PartialEq> CirclePacking<K> {
    /// The packed circle for `key`, if any.
    pub fn get(&self, key: &K) -> Option<&PackedCircle<K>> {
        self.circles.iter().find(|c| c.key == *key)
    }
}

/// Push `circles` apart until they no longer overlap and return the radius of the circle
/// enclosing them.
///
/// Circles are sorted by descending radius in place. Each pass visits every unordered pair
/// and moves overlapping partners away from each other by half the overlap each. After the
/// last pass all centers are translated so that the enclosing circle is centered at the
/// origin. Radii are left as they were passed in.
///
/// The improvement threshold and `max_iterations` only bound the compaction phase. When it
/// ends while circles still move, further passes run until no pair overlaps, up to 10 000 of
/// them; a warning is logged if overlaps survive that.
///
/// Relaxation only ever pushes, so the circles should start clustered, for instance with
/// [`PackedCircle::seeded`].
pub fn pack<K>(circles: &mut [PackedCircle<K>], options: &CirclePackOptions) -> Result<f64> {
    if circles.is_empty() {
        return Ok(0.0);
    }
    let margin = if options.relative_margin < 0.0 {
        tracing::warn!(
            relative_margin = options.relative_margin,
            "negative relative margin is treated as zero"
        );
        0.0
    } else {
        options.relative_margin
    };
    if margin > 0.0 {
        for c in circles.iter_mut() {
            c.radius *= 1.0 + margin;
        }
    }
    circles.sort_by(|a, b| b.radius.total_cmp(&a.radius));

    let min_separation_sq = options.min_separation * options.min_separation;
    let max_iterations = options.max_iterations.unwrap_or(circles.len());
    let mut settled = false;
    let mut last_radius = f64::INFINITY;
    for iteration in 1..=max_iterations {
        if !repel(circles, min_separation_sq) {
            tracing::debug!(iteration, "relaxation converged");
            settled = true;
            break;
        }
        let current = smallest_enclosing_circle(circles)?;
        // While the layout still expands, overlaps are being resolved; only a shrinking
        // layout may stop early.
        let shrinking = current.radius <= last_radius;
        let ratio = current.radius / last_radius;
        if last_radius.is_finite() && shrinking && ratio >= options.improvement_threshold {
            tracing::debug!(iteration, ratio, "relaxation stopped on minor improvement");
            break;
        }
        last_radius = current.radius;
    }
    if !settled && !settle(circles, min_separation_sq) {
        tracing::warn!(
            passes = SETTLE_PASSES,
            "circles still overlap after settling"
        );
    }

    if margin > 0.0 {
        for c in circles.iter_mut() {
            c.radius /= 1.0 + margin;
        }
    }
    let mut enclosing = smallest_enclosing_circle(circles)?;
    enclosing.radius *= 1.0 + margin;

    let shift = enclosing.center.to_vec2();
    for c in circles.iter_mut() {
        c.center -= shift;
    }
    tracing::debug!(
        circles = circles.len(),
        radius = enclosing.radius,
        "packed circles"
    );
    Ok(enclosing.radius)
}

/// Seed one circle per `(key, radius)` with [`PackedCircle::seeded`] and [`pack`] them.
pub fn pack_radii<K: Copy>(
    items: &[(K, f64)],
    options: &CirclePackOptions,
) -> Result<CirclePacking<K>> {
    let count = items.len();
    let mut circles: Vec<PackedCircle<K>> = items
        .iter()
        .enumerate()
        .map(|(index, &(key, radius))| PackedCircle::seeded(key, radius, index, count))
        .collect();
    let radius = pack(&mut circles, options)?;
    Ok(CirclePacking { circles, radius })
}

/// One relaxation pass. Returns whether any circle moved.
fn repel<K>(circles: &mut [PackedCircle<K>], min_separation_sq: f64) -> bool {
    let mut moved = false;
    for i in 0..circles.len() {
        for j in i + 1..circles.len() {
            let offset = circles[j].center - circles[i].center;
            let reach = circles[i].radius + circles[j].radius;
            let mut d = offset.hypot2() - min_separation_sq;
            d -= d.min(min_separation_sq);
            if d < reach * reach - CONTACT_TOLERANCE {
                let length = offset.hypot();
                let direction = if length > 0.0 {
                    offset / length
                } else {
                    separation_axis(i, j)
                };
                let push = direction * ((reach - d.sqrt()) * 0.5);
                circles[j].center += push;
                circles[i].center -= push;
                moved = true;
            }
        }
    }
    moved
}

/// Relax until a pass moves nothing, at most [`SETTLE_PASSES`] times. Returns whether the
/// circles came to rest.
fn settle<K>(circles: &mut [PackedCircle<K>], min_separation_sq: f64) -> bool {
    for pass in 1..=SETTLE_PASSES {
        if !repel(circles, min_separation_sq) {
            tracing::trace!(pass, "settled remaining overlaps");
            return true;
        }
    }
    false
}

/// Direction used to split a pair with coincident centers; fixed per pair.
fn separation_axis(i: usize, j: usize) -> Vec2 {
    let angle = (i * 7 + j * 13) as f64;
    Vec2::from_angle(angle)
}

/// The centroid of the circle centers.
pub fn centroid<K>(circles: &[PackedCircle<K>]) -> Point {
    if circles.is_empty() {
        return Point::ORIGIN;
    }
    let sum = circles
        .iter()
        .fold(Vec2::ZERO, |acc, c| acc + c.center.to_vec2());
    (sum / circles.len() as f64).to_point()
}
