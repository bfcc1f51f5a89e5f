// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skyline Circle Pack: pack circles tightly and find the circle enclosing them.
//!
//! Each circle stands for a caller entity (its `key`) and carries a fixed radius. [`pack()`]
//! pushes overlapping circles apart pass by pass and recomputes the
//! [`smallest_enclosing_circle`] after every pass, stopping once the enclosure no longer
//! shrinks noticeably. The result is centered at the origin, so callers can place the whole
//! group by translating it.
//!
//! ## API overview
//!
//! - [`PackedCircle`]: key, center and radius of one circle.
//! - [`pack()`] with [`CirclePackOptions`]: relaxes circles in place and returns the
//!   enclosing radius.
//! - [`pack_radii`]: seeds circles from `(key, radius)` pairs and packs them into a
//!   [`CirclePacking`].
//! - [`smallest_enclosing_circle`]: Welzl-style solver returning a Kurbo [`Circle`](kurbo::Circle).
//!
//! ## Example
//!
//! ```
//! use skyline_circle_pack::{CirclePackOptions, pack_radii};
//!
//! let packing = pack_radii(&[("core", 3.0), ("util", 1.0), ("io", 1.0)], &CirclePackOptions::default())
//!     .unwrap();
//!
//! // Every circle lies inside the enclosing circle around the origin.
//! for c in &packing.circles {
//!     assert!(c.center.to_vec2().hypot() + c.radius <= packing.radius + 1e-6);
//! }
//! assert!(packing.radius >= 3.0);
//! ```
//!
//! Unlike the other Skyline crates this one requires `std` for floating-point functions.

mod circle;
mod enclose;
mod error;
mod pack;

pub use circle::{CONTAINMENT_EPSILON, PackedCircle};
pub use enclose::smallest_enclosing_circle;
pub use error::{Error, Result};
pub use pack::{CirclePackOptions, CirclePacking, centroid, pack, pack_radii};
