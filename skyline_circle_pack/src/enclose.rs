// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smallest circle enclosing a set of circles.
//!
//! Welzl's incremental algorithm generalized from points to circles. Candidates are sorted by
//! descending radius so the circle removed at each step is the smallest one left. A removed
//! circle only joins the boundary set when the circle enclosing the others misses it; with
//! three boundary circles the answer is fixed by the closed form in [`tangent_circle`].

use kurbo::{Circle, Point, Vec2};

use crate::circle::{PackedCircle, contains};
use crate::error::{Error, Result};

/// Relative tolerance below which the three-circle equations count as singular.
const SINGULAR_EPSILON: f64 = 1e-12;

/// The smallest circle containing every circle in `circles`.
///
/// An empty input gives a zero-radius circle at the origin. The recursion is as deep as
/// `circles` is long.
///
/// Fails when three boundary circles admit no common internally tangent circle (see
/// [`Error`]).
pub fn smallest_enclosing_circle<K>(circles: &[PackedCircle<K>]) -> Result<Circle> {
    let mut candidates: Vec<Circle> = circles.iter().map(PackedCircle::circle).collect();
    candidates.sort_by(|a, b| b.radius.total_cmp(&a.radius));
    let mut border = Vec::with_capacity(3);
    welzl(&candidates, &mut border)
}

fn welzl(candidates: &[Circle], border: &mut Vec<Circle>) -> Result<Circle> {
    let Some((smallest, rest)) = candidates.split_last() else {
        return enclose_border(border);
    };
    if border.len() == 3 {
        return enclose_border(border);
    }
    let without = welzl(rest, border)?;
    if contains(&without, smallest) {
        return Ok(without);
    }
    border.push(*smallest);
    let with = welzl(rest, border);
    border.pop();
    with
}

fn enclose_border(border: &[Circle]) -> Result<Circle> {
    match *border {
        [] => Ok(Circle::new(Point::ORIGIN, 0.0)),
        [a] => Ok(a),
        [a, b] => Ok(enclose_two(a, b)),
        [a, b, c, ..] => tangent_circle(a, b, c),
    }
}

/// Smallest circle containing `a` and `b`.
pub(crate) fn enclose_two(a: Circle, b: Circle) -> Circle {
    if contains(&a, &b) {
        return a;
    }
    if contains(&b, &a) {
        return b;
    }
    let offset = b.center - a.center;
    let distance = offset.hypot();
    let center = a.center.midpoint(b.center) + offset * ((b.radius - a.radius) * 0.5 / distance);
    Circle::new(center, (distance + a.radius + b.radius) * 0.5)
}

/// The circle internally tangent to `a`, `b` and `c`.
///
/// Fails with [`Error::CollinearCenters`] when the linear system is singular and with
/// [`Error::DegenerateConfiguration`] when the quadratic has no finite non-negative root.
///
/// Requiring the same distance `R - r_i` from the center to every circle gives two linear
/// equations; solving them expresses the center as `u + v * R`, and substituting back yields
/// a quadratic in `R`.
pub(crate) fn tangent_circle(a: Circle, b: Circle, c: Circle) -> Result<Circle> {
    let (p0, r0) = (a.center.to_vec2(), a.radius);
    let (p1, r1) = (b.center.to_vec2(), b.radius);
    let (p2, r2) = (c.center.to_vec2(), c.radius);

    let a0 = (p0 - p1) * 2.0;
    let a1 = 2.0 * (r1 - r0);
    let a2 = p0.hypot2() - r0 * r0 - p1.hypot2() + r1 * r1;
    let b0 = (p0 - p2) * 2.0;
    let b1 = 2.0 * (r2 - r0);
    let b2 = p0.hypot2() - r0 * r0 - p2.hypot2() + r2 * r2;

    let det = b0.x * a0.y - a0.x * b0.y;
    if det.abs() <= SINGULAR_EPSILON * a0.hypot() * b0.hypot() {
        return Err(Error::CollinearCenters([a.center, b.center, c.center]));
    }

    // Center relative to `b`: u + v * R.
    let u = Vec2::new(
        (a0.y * b2 - b0.y * a2) / det - p1.x,
        -(a0.x * b2 - b0.x * a2) / det - p1.y,
    );
    let v = Vec2::new(
        (b0.y * a1 - a0.y * b1) / det,
        -(b0.x * a1 - a0.x * b1) / det,
    );

    let e1 = v.hypot2() - 1.0;
    let e2 = 2.0 * (u.dot(v) + r1);
    let e3 = u.hypot2() - r1 * r1;
    // A negative discriminant turns the root into NaN, which fails the check below.
    let radius = if e1.abs() <= SINGULAR_EPSILON {
        -e3 / e2
    } else {
        let discriminant = e2 * e2 - 4.0 * e1 * e3;
        (-e2 - discriminant.sqrt()) / (2.0 * e1)
    };
    if !radius.is_finite() || radius < 0.0 {
        return Err(Error::DegenerateConfiguration { radius });
    }
    Ok(Circle::new((u + v * radius + p1).to_point(), radius))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(x: f64, y: f64, r: f64) -> PackedCircle<()> {
        PackedCircle::new((), Point::new(x, y), r)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn empty_set_gives_zero_circle() {
        let enclosing = smallest_enclosing_circle::<()>(&[]).unwrap();
        assert_eq!(enclosing.center, Point::ORIGIN);
        assert_close(enclosing.radius, 0.0);
    }

    #[test]
    fn single_circle_encloses_itself() {
        let enclosing = smallest_enclosing_circle(&[circle(3.0, -2.0, 1.5)]).unwrap();
        assert_eq!(enclosing.center, Point::new(3.0, -2.0));
        assert_close(enclosing.radius, 1.5);
    }

    #[test]
    fn seeded_pair_of_different_radii() {
        let circles = [
            PackedCircle::seeded((), 2.0, 0, 2),
            PackedCircle::seeded((), 0.1, 1, 2),
        ];
        let enclosing = smallest_enclosing_circle(&circles).unwrap();
        assert_close(enclosing.center.x, 1.9);
        assert_close(enclosing.center.y, 0.0);
        assert_close(enclosing.radius, 2.1);
    }

    #[test]
    fn nested_pair_is_enclosed_by_the_larger_circle() {
        let enclosing =
            smallest_enclosing_circle(&[circle(0.0, 0.0, 5.0), circle(1.0, 1.0, 1.0)]).unwrap();
        assert_eq!(enclosing.center, Point::ORIGIN);
        assert_close(enclosing.radius, 5.0);
    }

    #[test]
    fn four_circles_touching_two_extremes() {
        let circles = [
            circle(0.0, 10.0, 1.0),
            circle(0.0, -10.0, 1.0),
            circle(5.0, 0.0, 1.0),
            circle(-7.5, 0.0, 1.0),
        ];
        let enclosing = smallest_enclosing_circle(&circles).unwrap();
        assert_close(enclosing.center.x, 0.0);
        assert_close(enclosing.center.y, 0.0);
        assert_close(enclosing.radius, 11.0);
    }

    #[test]
    fn three_circles_on_an_equilateral_triangle() {
        let h = 3.0_f64.sqrt();
        let enclosing = smallest_enclosing_circle(&[
            circle(0.0, 2.0, 1.0),
            circle(h, -1.0, 1.0),
            circle(-h, -1.0, 1.0),
        ])
        .unwrap();
        assert_close(enclosing.center.x, 0.0);
        assert_close(enclosing.center.y, 0.0);
        assert_close(enclosing.radius, 3.0);
    }

    #[test]
    fn enclosing_circle_contains_every_input() {
        let circles = [
            circle(0.0, 0.0, 2.0),
            circle(4.0, 1.0, 1.0),
            circle(-3.0, 2.5, 1.5),
            circle(1.0, -4.0, 0.5),
            circle(-1.0, -2.0, 1.2),
            circle(2.5, 3.0, 0.8),
        ];
        let enclosing = smallest_enclosing_circle(&circles).unwrap();
        for c in &circles {
            let reach = enclosing.center.distance(c.center) + c.radius;
            assert!(reach <= enclosing.radius + 1e-6, "{c:?} sticks out");
        }
    }

    #[test]
    fn negative_tangent_radius_is_rejected() {
        // The third center sits just off the line through the first two.
        let a = Circle::new(Point::new(0.0, 0.0), 3.0);
        let b = Circle::new(Point::new(10.0, 0.0), 0.1);
        let c = Circle::new(Point::new(5.0, 0.01), 0.1);
        match tangent_circle(a, b, c) {
            Err(Error::DegenerateConfiguration { radius }) => assert!(radius < 0.0),
            other => panic!("expected a degenerate configuration, got {other:?}"),
        }
    }

    #[test]
    fn missing_real_root_is_rejected() {
        let a = Circle::new(Point::new(2.0, -1.0), 6.0);
        let b = Circle::new(Point::new(-2.0, 4.0), 1.0);
        let c = Circle::new(Point::new(0.0, -5.0), 1.0);
        match tangent_circle(a, b, c) {
            Err(Error::DegenerateConfiguration { radius }) => assert!(radius.is_nan()),
            other => panic!("expected a degenerate configuration, got {other:?}"),
        }
    }

    #[test]
    fn tangent_circle_touches_all_three() {
        let circles = [
            Circle::new(Point::new(0.0, 0.0), 1.0),
            Circle::new(Point::new(4.0, 0.0), 1.0),
            Circle::new(Point::new(0.0, 4.0), 1.0),
        ];
        let enclosing = tangent_circle(circles[0], circles[1], circles[2]).unwrap();
        assert!(enclosing.radius > 0.0);
        for c in circles {
            assert_close(enclosing.center.distance(c.center) + c.radius, enclosing.radius);
        }
    }

    #[test]
    fn collinear_centers_are_reported() {
        let a = Circle::new(Point::new(0.0, 0.0), 1.0);
        let b = Circle::new(Point::new(1.0, 0.0), 1.0);
        let c = Circle::new(Point::new(2.0, 0.0), 1.0);
        assert!(matches!(
            tangent_circle(a, b, c),
            Err(Error::CollinearCenters(_))
        ));
    }
}
