pub mod polygon;
pub mod polyline;

pub use polygon::{ClosedPolygon, Edge};
pub use polyline::OpenPolyline;
