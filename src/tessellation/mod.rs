mod bezier;
mod stroke_style;

pub use bezier::{flatten_chain, QuadBezier};
pub use stroke_style::{LineCap, LineJoin, StrokeStyle};
