use crate::config::GeneratorConfig;
use crate::geometry::OpenPolyline;
use crate::math::{Point2, Vector2};
use crate::tessellation::flatten_chain;

use super::Artwork;

/// Logo paths in board millimeters, centered on the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoPaths {
    /// Mountain silhouette vertices (not closed).
    pub mountain: Vec<Point2>,
    /// Flattened trail centerline.
    pub trail: OpenPolyline,
    /// Lightning bolt centerline.
    pub lightning: OpenPolyline,
}

/// Moves the artwork onto the board: translate, scale to millimeters, then
/// shift everything so the joint bounding box is centered on the origin.
#[must_use]
pub fn layout_paths(artwork: &Artwork, config: &GeneratorConfig) -> LogoPaths {
    let offset = Vector2::new(config.translate.0, config.translate.1);
    let scale = config.scale();
    let to_mm = |p: &Point2| Point2::from((p.coords + offset) * scale);

    let mountain: Vec<Point2> = artwork.mountain.iter().map(to_mm).collect();
    let trail_curves: Vec<_> = artwork.trail.iter().map(|c| c.map(to_mm)).collect();
    let trail = flatten_chain(&trail_curves, config.bezier_segments).into_points();
    let lightning: Vec<Point2> = artwork.lightning.iter().map(to_mm).collect();

    let center = bounding_center(mountain.iter().chain(&trail).chain(&lightning));
    let recenter = |pts: Vec<Point2>| -> Vec<Point2> {
        pts.into_iter().map(|p| p - center.coords).collect()
    };

    LogoPaths {
        mountain: recenter(mountain),
        trail: OpenPolyline::new(recenter(trail)),
        lightning: OpenPolyline::new(recenter(lightning)),
    }
}

/// Center of the axis-aligned bounding box; the origin for an empty set.
fn bounding_center<'a>(points: impl Iterator<Item = &'a Point2>) -> Point2 {
    let (min, max) = points.fold(
        (
            Point2::new(f64::INFINITY, f64::INFINITY),
            Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        ),
        |(min, max), p| (min.inf(p), max.sup(p)),
    );
    if min.x > max.x {
        return Point2::origin();
    }
    nalgebra::center(&min, &max)
}
