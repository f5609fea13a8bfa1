use crate::geometry::OpenPolyline;
use crate::math::Point2;

/// A quadratic Bézier curve given by its three control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadBezier {
    pub p0: Point2,
    pub p1: Point2,
    pub p2: Point2,
}

impl QuadBezier {
    /// Creates a new curve.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2) -> Self {
        Self { p0, p1, p2 }
    }

    /// Evaluates the curve at `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let mt = 1.0 - t;
        Point2::from(
            self.p0.coords * (mt * mt) + self.p1.coords * (2.0 * mt * t) + self.p2.coords * (t * t),
        )
    }

    /// Returns the curve with every control point mapped through `f`.
    #[must_use]
    pub fn map(&self, f: impl Fn(&Point2) -> Point2) -> Self {
        Self::new(f(&self.p0), f(&self.p1), f(&self.p2))
    }

    /// Flattens the curve into `segments` equal parameter steps
    /// (`segments + 1` points, both endpoints exact).
    ///
    /// `segments` must be at least 1.
    #[must_use]
    pub fn flatten(&self, segments: u32) -> Vec<Point2> {
        (0..=segments)
            .map(|i| self.point_at(f64::from(i) / f64::from(segments)))
            .collect()
    }
}

/// Flattens consecutive curves into one polyline. Each curve after the first
/// is assumed to start where the previous one ended, so its first point is
/// dropped.
#[must_use]
pub fn flatten_chain(curves: &[QuadBezier], segments: u32) -> OpenPolyline {
    let mut points = Vec::with_capacity(curves.len() * segments as usize + 1);
    for (i, curve) in curves.iter().enumerate() {
        let flat = curve.flatten(segments);
        let skip = usize::from(i > 0);
        points.extend(flat.into_iter().skip(skip));
    }
    OpenPolyline::new(points)
}
