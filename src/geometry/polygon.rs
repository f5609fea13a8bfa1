use crate::math::polygon_2d::signed_area_2d;
use crate::math::{point_in_polygon, point_to_segment_dist, Point2};

/// A boundary edge of a [`ClosedPolygon`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Point2,
    pub end: Point2,
}

impl Edge {
    /// Creates a new edge.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Minimum distance from `p` to this edge.
    #[must_use]
    pub fn distance_to(&self, p: &Point2) -> f64 {
        point_to_segment_dist(p, &self.start, &self.end)
    }
}

/// A closed vertex loop. The last vertex connects back to the first; the
/// closing vertex is never stored twice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClosedPolygon {
    vertices: Vec<Point2>,
}

impl ClosedPolygon {
    /// Creates a polygon from vertices that do not repeat the first vertex.
    #[must_use]
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Creates a polygon from vertices, dropping a trailing copy of the
    /// first vertex if present.
    #[must_use]
    pub fn from_points(mut vertices: Vec<Point2>) -> Self {
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Self { vertices }
    }

    /// Returns the vertices (without the closing repeat).
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over all `len` edges, including the closing edge from the
    /// last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Edge::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Even-odd containment test; see [`point_in_polygon`].
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        point_in_polygon(p, &self.vertices)
    }

    /// Signed area, positive for counter-clockwise loops.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }
}
