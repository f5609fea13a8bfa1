pub mod arc_2d;
pub mod distance_2d;
pub mod polygon_2d;

pub use distance_2d::{distance, lerp, point_to_segment_dist};
pub use polygon_2d::{point_in_polygon, unit_normal};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Segments shorter than this are degenerate when computing normals,
/// directions and projections.
pub const TOLERANCE: f64 = 1e-12;

/// Outline segments shorter than this are skipped entirely when sampling.
pub const MIN_SEGMENT_LENGTH: f64 = 1e-9;
