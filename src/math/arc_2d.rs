//! Circular-arc sampling used for round joins and round caps.
//!
//! Angles are in radians, measured counter-clockwise from +x. A positive
//! sweep runs counter-clockwise, a negative sweep clockwise.
use std::f64::consts::{FRAC_PI_6, PI};

use super::{Point2, Vector2};

/// Maximum angular step between two samples of a join arc (30°).
pub const JOIN_ARC_STEP: f64 = FRAC_PI_6;

/// Minimum number of sub-segments in a join arc.
pub const MIN_JOIN_ARC_SEGMENTS: u32 = 2;

/// Returns the polar angle of a vector.
#[must_use]
pub fn angle_of(v: &Vector2) -> f64 {
    v.y.atan2(v.x)
}

/// Brings an angle difference into `[-π, π]` so the sweep takes the short way.
///
/// Inputs are differences of two `atan2` results and therefore already lie
/// in `(-2π, 2π)`; a single correction step is enough.
#[must_use]
pub fn shortest_sweep(from: f64, to: f64) -> f64 {
    let da = to - from;
    if da > PI {
        da - 2.0 * PI
    } else if da < -PI {
        da + 2.0 * PI
    } else {
        da
    }
}

/// Number of sub-segments for a join arc: one per started 30° step, at
/// least [`MIN_JOIN_ARC_SEGMENTS`].
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn join_segment_count(sweep: f64) -> u32 {
    let steps = (sweep.abs() / JOIN_ARC_STEP) as u32 + 1;
    steps.max(MIN_JOIN_ARC_SEGMENTS)
}

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, start_angle: f64, sweep: f64, t: f64) -> Point2 {
    let angle = start_angle + sweep * t;
    Point2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Samples `segments + 1` points on an arc, both endpoints included.
pub fn arc_points(
    center: Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
    segments: u32,
) -> impl Iterator<Item = Point2> {
    (0..=segments).map(move |j| {
        let t = f64::from(j) / f64::from(segments);
        arc_point_at(&center, radius, start_angle, sweep, t)
    })
}

/// Samples the interior points of an arc (`segments - 1` points), leaving
/// out both endpoints.
pub fn arc_interior_points(
    center: Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
    segments: u32,
) -> impl Iterator<Item = Point2> {
    (1..segments).map(move |j| {
        let t = f64::from(j) / f64::from(segments);
        arc_point_at(&center, radius, start_angle, sweep, t)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    const TOL: f64 = 1e-10;

    #[test]
    fn shortest_sweep_wraps_across_pi() {
        // From 170° to -170° is a +20° sweep, not -340°.
        let from = 170f64.to_radians();
        let to = (-170f64).to_radians();
        assert_abs_diff_eq!(shortest_sweep(from, to), 20f64.to_radians(), epsilon = TOL);
        assert_abs_diff_eq!(shortest_sweep(to, from), -20f64.to_radians(), epsilon = TOL);
    }

    #[test]
    fn shortest_sweep_plain_difference() {
        assert_abs_diff_eq!(shortest_sweep(0.0, FRAC_PI_2), FRAC_PI_2, epsilon = TOL);
    }

    #[test]
    fn join_segment_count_has_minimum() {
        assert_eq!(join_segment_count(0.0), 2);
        assert_eq!(join_segment_count(20f64.to_radians()), 2);
        assert_eq!(join_segment_count(45f64.to_radians()), 2);
        assert_eq!(join_segment_count(-45f64.to_radians()), 2);
        assert_eq!(join_segment_count(100f64.to_radians()), 4);
        assert_eq!(join_segment_count(170f64.to_radians()), 6);
    }

    #[test]
    fn arc_points_include_endpoints() {
        let pts: Vec<Point2> = arc_points(Point2::origin(), 2.0, 0.0, FRAC_PI_2, 4).collect();
        assert_eq!(pts.len(), 5);
        assert_abs_diff_eq!(pts[0], Point2::new(2.0, 0.0), epsilon = TOL);
        assert_abs_diff_eq!(pts[4], Point2::new(0.0, 2.0), epsilon = TOL);
        for p in &pts {
            assert_abs_diff_eq!(p.coords.norm(), 2.0, epsilon = TOL);
        }
    }

    #[test]
    fn arc_interior_points_skip_endpoints() {
        let pts: Vec<Point2> =
            arc_interior_points(Point2::new(1.0, 1.0), 1.0, FRAC_PI_2, -PI, 6).collect();
        assert_eq!(pts.len(), 5);
        // Clockwise half-turn from +y: the middle sample points along +x.
        assert_abs_diff_eq!(pts[2], Point2::new(2.0, 1.0), epsilon = TOL);
    }
}
