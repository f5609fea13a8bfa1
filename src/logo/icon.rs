use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::geometry::{ClosedPolygon, OpenPolyline};
use crate::operations::{SplitOutline, StrokeToPolygon};
use crate::tessellation::StrokeStyle;

use super::{layout_paths, Artwork};

/// Board geometry of the icon footprint.
#[derive(Debug, Clone)]
pub struct IconElements {
    /// Visible runs of the mountain outline.
    pub mountain_segments: Vec<OpenPolyline>,
    /// Line width for the mountain runs.
    pub mountain_stroke_mm: f64,
    /// Filled outline of the trail stroke.
    pub trail_polygon: ClosedPolygon,
    /// Filled outline of the lightning stroke.
    pub lightning_polygon: ClosedPolygon,
}

/// Builds the icon: the trail and lightning strokes become filled polygons,
/// and the mountain outline is gapped wherever it runs into them.
///
/// # Errors
///
/// Returns a configuration error if `config` or `artwork` fails validation.
pub fn build_icon(artwork: &Artwork, config: &GeneratorConfig) -> Result<IconElements> {
    config.validate()?;
    artwork.validate()?;

    let paths = layout_paths(artwork, config);

    let trail_style = StrokeStyle::from_half_width(config.trail_half_width_mm())?;
    let trail_polygon = StrokeToPolygon::new(paths.trail, trail_style)
        .with_cap_segments(config.endcap_segments)
        .execute();

    let lightning_style = StrokeStyle::from_half_width(config.lightning_half_width_mm())?;
    let lightning_polygon = StrokeToPolygon::new(paths.lightning, lightning_style)
        .with_cap_segments(config.endcap_segments)
        .execute();

    let mountain = ClosedPolygon::from_points(paths.mountain);
    let mountain_segments = SplitOutline::new(
        mountain,
        vec![trail_polygon.clone(), lightning_polygon.clone()],
        config.split_params(),
    )
    .execute();

    debug!(
        mountain_segments = mountain_segments.len(),
        trail_vertices = trail_polygon.len(),
        lightning_vertices = lightning_polygon.len(),
        "icon geometry built"
    );

    Ok(IconElements {
        mountain_segments,
        mountain_stroke_mm: config.mountain_outline_stroke_mm,
        trail_polygon,
        lightning_polygon,
    })
}
