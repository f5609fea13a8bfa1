mod split_outline;
mod stroke_to_polygon;

pub use split_outline::{SplitOutline, SplitParams};
pub use stroke_to_polygon::{
    offset_polyline, StrokeToPolygon, DEFAULT_CAP_SEGMENTS, MITER_LIMIT, ROUND_JOIN_COS,
};
