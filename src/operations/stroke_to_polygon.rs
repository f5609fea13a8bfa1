use std::f64::consts::PI;

use tracing::trace;

use crate::geometry::{ClosedPolygon, OpenPolyline};
use crate::math::arc_2d::{
    angle_of, arc_interior_points, arc_points, join_segment_count, shortest_sweep,
};
use crate::math::{unit_normal, Point2, Vector2, TOLERANCE};
use crate::tessellation::{LineCap, LineJoin, StrokeStyle};

/// Joins whose normals have a dot product below this (turn angle above
/// ~18.2°) get a round fan when round joins are enabled.
pub const ROUND_JOIN_COS: f64 = 0.95;

/// Upper bound of the miter scale, as a multiple of the half-width.
pub const MITER_LIMIT: f64 = 2.0;

/// Default number of steps in a semicircular end cap.
pub const DEFAULT_CAP_SEGMENTS: u32 = 6;

/// How the offset boundary turns around an interior vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
enum JoinKind {
    /// A single point on each side along the (normalized) bisector.
    Miter { dir: Vector2, scale: f64 },
    /// A circular fan on each side, sampled with `segments + 1` points.
    Round {
        start_angle: f64,
        sweep: f64,
        segments: u32,
    },
}

/// Converts a stroked open polyline into a single closed fill polygon.
///
/// The polygon is assembled as: left offset path in point order, end cap,
/// right offset path reversed, start cap. Self-intersections produced by
/// sharp turns on thick strokes are left in place.
///
/// Inputs with fewer than 2 points are passed through unchanged.
#[derive(Debug)]
pub struct StrokeToPolygon {
    points: OpenPolyline,
    style: StrokeStyle,
    cap_segments: u32,
}

impl StrokeToPolygon {
    /// Creates a new stroke conversion with [`DEFAULT_CAP_SEGMENTS`] cap steps.
    #[must_use]
    pub fn new(points: OpenPolyline, style: StrokeStyle) -> Self {
        Self {
            points,
            style,
            cap_segments: DEFAULT_CAP_SEGMENTS,
        }
    }

    /// Sets the number of steps in each semicircular cap. Must be at least 1.
    #[must_use]
    pub fn with_cap_segments(mut self, cap_segments: u32) -> Self {
        self.cap_segments = cap_segments;
        self
    }

    /// Executes the conversion.
    #[must_use]
    pub fn execute(&self) -> ClosedPolygon {
        let pts = self.points.points();
        let n = pts.len();
        if n < 2 {
            return ClosedPolygon::new(pts.to_vec());
        }

        let half_w = self.style.half_width();
        let mut left = Vec::with_capacity(n);
        let mut right = Vec::with_capacity(n);

        for i in 0..n {
            let p = pts[i];

            if i == 0 || i == n - 1 {
                // Endpoint: perpendicular to the single adjacent segment.
                let nv = if i == 0 {
                    unit_normal(&pts[0], &pts[1])
                } else {
                    unit_normal(&pts[n - 2], &pts[n - 1])
                };
                left.push(p + nv * half_w);
                right.push(p - nv * half_w);
                continue;
            }

            let n1 = unit_normal(&pts[i - 1], &p);
            let n2 = unit_normal(&p, &pts[i + 1]);

            match self.classify_join(&n1, &n2) {
                JoinKind::Miter { dir, scale } => {
                    let off = dir * (half_w * scale);
                    left.push(p + off);
                    right.push(p - off);
                }
                JoinKind::Round {
                    start_angle,
                    sweep,
                    segments,
                } => {
                    left.extend(arc_points(p, half_w, start_angle, sweep, segments));
                    // Opposite side: same sweep, rotated half a turn.
                    right.extend(arc_points(p, half_w, start_angle + PI, sweep, segments));
                }
            }
        }

        let cap_points = match self.style.line_cap() {
            LineCap::Round => 2 * self.cap_segments.saturating_sub(1) as usize,
            LineCap::Butt => 0,
        };
        let mut polygon = Vec::with_capacity(left.len() + right.len() + cap_points);
        polygon.extend(left);

        if self.style.line_cap() == LineCap::Round {
            // End cap: clockwise half-turn from the left normal to the right
            // normal, passing through the forward tangent.
            let nv = unit_normal(&pts[n - 2], &pts[n - 1]);
            polygon.extend(arc_interior_points(
                pts[n - 1],
                half_w,
                angle_of(&nv),
                -PI,
                self.cap_segments,
            ));
        }

        polygon.extend(right.into_iter().rev());

        if self.style.line_cap() == LineCap::Round {
            // Start cap: clockwise half-turn from the right normal back to the
            // left normal, passing through the backward tangent.
            let nv = unit_normal(&pts[0], &pts[1]);
            polygon.extend(arc_interior_points(
                pts[0],
                half_w,
                angle_of(&-nv),
                -PI,
                self.cap_segments,
            ));
        }

        trace!(input = n, output = polygon.len(), "stroke converted to polygon");
        ClosedPolygon::new(polygon)
    }

    /// Chooses the join at an interior vertex from the normals of the
    /// incoming (`n1`) and outgoing (`n2`) segments.
    fn classify_join(&self, n1: &Vector2, n2: &Vector2) -> JoinKind {
        let dot = n1.dot(n2);

        if self.style.line_join() == LineJoin::Round && dot < ROUND_JOIN_COS {
            let start_angle = angle_of(n1);
            let sweep = shortest_sweep(start_angle, angle_of(n2));
            return JoinKind::Round {
                start_angle,
                sweep,
                segments: join_segment_count(sweep),
            };
        }

        let bisector = n1 + n2;
        let len = bisector.norm();
        if len > TOLERANCE {
            let miter = 1.0 / f64::max(0.5, (1.0 + dot) / 2.0);
            JoinKind::Miter {
                dir: bisector / len,
                scale: miter.min(MITER_LIMIT),
            }
        } else {
            // Exact reversal: the bisector vanishes, fall back to the
            // incoming normal.
            JoinKind::Miter {
                dir: *n1,
                scale: 1.0,
            }
        }
    }
}

/// Offsets `points` by `half_width` on both sides and returns the filled
/// outline, using [`DEFAULT_CAP_SEGMENTS`] steps per round cap.
///
/// `half_width` must be positive; it is not checked here.
#[must_use]
pub fn offset_polyline(
    points: &[Point2],
    half_width: f64,
    round_caps: bool,
    round_joins: bool,
) -> ClosedPolygon {
    let style = StrokeStyle::unchecked(half_width * 2.0)
        .with_line_cap(if round_caps { LineCap::Round } else { LineCap::Butt })
        .with_line_join(if round_joins { LineJoin::Round } else { LineJoin::Miter });
    StrokeToPolygon::new(OpenPolyline::new(points.to_vec()), style).execute()
}
