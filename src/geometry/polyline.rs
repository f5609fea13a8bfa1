use crate::math::{distance, Point2};

/// An open polyline: an ordered point sequence with distinct start and end.
///
/// Segments run between consecutive points only; there is no implicit
/// closing segment. Use [`super::ClosedPolygon`] for loops.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenPolyline {
    points: Vec<Point2>,
}

impl OpenPolyline {
    /// Creates a polyline from its points.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Returns the points in order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Consumes the polyline, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polyline has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first point, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Point2> {
        self.points.first()
    }

    /// Returns the last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Point2> {
        self.points.last()
    }

    /// Iterates over the `len - 1` segments as `(start, end)` pairs.
    pub fn segments(&self) -> impl Iterator<Item = (&Point2, &Point2)> {
        self.points.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Total length of all segments.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| distance(a, b)).sum()
    }

    /// Appends another polyline, dropping its first point when it coincides
    /// with this polyline's last point.
    pub fn extend_joined(&mut self, other: &OpenPolyline) {
        let skip = match (self.points.last(), other.points.first()) {
            (Some(a), Some(b)) if a == b => 1,
            _ => 0,
        };
        self.points.extend(other.points.iter().skip(skip).copied());
    }
}
