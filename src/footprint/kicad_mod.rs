//! `.kicad_mod` s-expression output.
//!
//! Only the handful of records the logo needs are produced: filled
//! `fp_poly`, stroked `fp_line`, `fp_text`, and the standard property block.
//! Coordinates are written with 4 decimals.

use std::fmt::Write;

use crate::config::GeneratorConfig;
use crate::geometry::ClosedPolygon;
use crate::logo::IconElements;
use crate::math::Point2;

use super::ids::UuidSource;

/// File format version written into the footprint header.
pub const FORMAT_VERSION: u32 = 20_240_108;

/// Generator name written into the footprint header: the binary's name.
pub const GENERATOR: &str = "generate_logo_footprints";

/// Generator version written into the footprint header.
pub const GENERATOR_VERSION: &str = "2.0";

/// Silkscreen layer all logo artwork is placed on.
pub const SILKSCREEN: &str = "F.SilkS";

const FABRICATION: &str = "F.Fab";

/// Footprint name of the icon.
pub const ICON_NAME: &str = "TrailCurrentLogo_Icon";

/// Footprint name of the wordmark.
pub const TEXT_NAME: &str = "TrailCurrentLogo_Text";

/// Formats a filled polygon record.
#[must_use]
pub fn fp_poly(polygon: &ClosedPolygon, layer: &str, ids: &mut impl UuidSource) -> String {
    let mut out = String::from("\t(fp_poly\n\t\t(pts\n");
    for p in polygon.vertices() {
        let _ = writeln!(out, "\t\t\t(xy {:.4} {:.4})", p.x, p.y);
    }
    let _ = write!(
        out,
        "\t\t)\n\
         \t\t(stroke\n\
         \t\t\t(width 0)\n\
         \t\t\t(type solid)\n\
         \t\t)\n\
         \t\t(fill solid)\n\
         \t\t(layer \"{layer}\")\n\
         \t\t(uuid \"{}\")\n\
         \t)",
        ids.next_uuid()
    );
    out
}

/// Formats a polyline as one `fp_line` record per segment.
#[must_use]
pub fn fp_lines(
    points: &[Point2],
    stroke_width: f64,
    layer: &str,
    ids: &mut impl UuidSource,
) -> Vec<String> {
    points
        .windows(2)
        .map(|w| {
            format!(
                "\t(fp_line\n\
                 \t\t(start {:.4} {:.4})\n\
                 \t\t(end {:.4} {:.4})\n\
                 \t\t(stroke\n\
                 \t\t\t(width {stroke_width:.4})\n\
                 \t\t\t(type solid)\n\
                 \t\t)\n\
                 \t\t(layer \"{layer}\")\n\
                 \t\t(uuid \"{}\")\n\
                 \t)",
                w[0].x,
                w[0].y,
                w[1].x,
                w[1].y,
                ids.next_uuid()
            )
        })
        .collect()
}

/// Formats a hidden footprint property.
fn property(
    out: &mut String,
    name: &str,
    value: &str,
    at_y: f64,
    layer: &str,
    thickness: f64,
    ids: &mut impl UuidSource,
) {
    let _ = write!(
        out,
        "\t(property \"{name}\" \"{value}\"\n\
         \t\t(at 0 {at_y} 0)\n\
         \t\t(unlocked yes)\n\
         \t\t(layer \"{layer}\")\n\
         \t\t(hide yes)\n\
         \t\t(uuid \"{}\")\n\
         \t\t(effects\n\
         \t\t\t(font\n\
         \t\t\t\t(size 1 1)\n\
         \t\t\t\t(thickness {thickness})\n\
         \t\t\t)\n\
         \t\t)\n\
         \t)\n",
        ids.next_uuid()
    );
}

/// Opens a footprint and writes the header, the five standard properties,
/// and the board-only attributes. The caller appends items and `)`.
fn header(
    name: &str,
    description: &str,
    label_offset: f64,
    ids: &mut impl UuidSource,
) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "(footprint \"{name}\"\n\
         \t(version {FORMAT_VERSION})\n\
         \t(generator \"{GENERATOR}\")\n\
         \t(generator_version \"{GENERATOR_VERSION}\")\n\
         \t(layer \"F.Cu\")\n"
    );
    property(&mut out, "Reference", "LOGO", -label_offset, SILKSCREEN, 0.1, ids);
    property(&mut out, "Value", name, label_offset, FABRICATION, 0.15, ids);
    property(&mut out, "Footprint", "", 0.0, FABRICATION, 0.15, ids);
    property(&mut out, "Datasheet", "", 0.0, FABRICATION, 0.15, ids);
    property(&mut out, "Description", description, 0.0, FABRICATION, 0.15, ids);
    out.push_str("\t(attr board_only exclude_from_pos_files exclude_from_bom)\n");
    out
}

/// Renders the icon footprint: gapped mountain lines, then the trail and
/// lightning fills.
#[must_use]
pub fn icon_footprint(icon: &IconElements, ids: &mut impl UuidSource) -> String {
    let mut out = header(
        ICON_NAME,
        "TrailCurrent logo icon - mountain, trail, and lightning bolt",
        4.5,
        ids,
    );

    let mut sections = Vec::new();
    for run in &icon.mountain_segments {
        sections.extend(fp_lines(run.points(), icon.mountain_stroke_mm, SILKSCREEN, ids));
    }
    sections.push(fp_poly(&icon.trail_polygon, SILKSCREEN, ids));
    sections.push(fp_poly(&icon.lightning_polygon, SILKSCREEN, ids));

    out.push_str(&sections.join("\n"));
    out.push_str("\n)\n");
    out
}

/// Renders the wordmark footprint.
#[must_use]
pub fn text_footprint(config: &GeneratorConfig, ids: &mut impl UuidSource) -> String {
    let mut out = header(TEXT_NAME, "TrailCurrent logo text", 3.0, ids);
    let size = config.text_size_mm;
    let thickness = config.text_thickness_mm;
    let _ = write!(
        out,
        "\t(fp_text user \"TrailCurrent\"\n\
         \t\t(at 0 0 0)\n\
         \t\t(unlocked yes)\n\
         \t\t(layer \"{SILKSCREEN}\")\n\
         \t\t(uuid \"{}\")\n\
         \t\t(effects\n\
         \t\t\t(font\n\
         \t\t\t\t(size {size} {size})\n\
         \t\t\t\t(thickness {thickness})\n\
         \t\t\t\t(bold yes)\n\
         \t\t\t)\n\
         \t\t)\n\
         \t)\n\
         )\n",
        ids.next_uuid()
    );
    out
}
