use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::operations::SplitParams;

/// Environment variable that overrides the footprint root directory.
pub const FOOTPRINT_DIR_ENV: &str = "TRAILCURRENT_FOOTPRINT_DIR";

/// Name of the KiCad footprint library directory inside the root.
pub const LIBRARY_DIR_NAME: &str = "TrailCurrentFootprints.pretty";

/// Geometry and tessellation settings for the logo footprints.
///
/// Lengths ending in `_mm` are board millimeters; `_svg` lengths are in the
/// artwork's own units and are converted with [`GeneratorConfig::scale`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Width of the finished icon on the board.
    pub icon_target_width_mm: f64,
    /// Width of the icon artwork (the mountain base).
    pub svg_icon_width: f64,
    /// Offset applied to all artwork points before scaling.
    pub translate: (f64, f64),
    /// Stroke width of the trail curve.
    pub trail_stroke_svg: f64,
    /// Stroke width of the lightning bolt.
    pub lightning_stroke_svg: f64,
    /// Line width used for the mountain outline segments.
    pub mountain_outline_stroke_mm: f64,
    /// Segments per flattened Bézier curve.
    pub bezier_segments: u32,
    /// Steps per semicircular stroke cap.
    pub endcap_segments: u32,
    /// Gap kept between the mountain outline and the filled shapes.
    pub clearance_mm: f64,
    /// Proximity samples per mountain outline segment.
    pub samples_per_segment: u32,
    /// Character height of the text footprint.
    pub text_size_mm: f64,
    /// Stroke thickness of the text footprint.
    pub text_thickness_mm: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            icon_target_width_mm: 6.0,
            svg_icon_width: 38.0,
            translate: (4.0, 8.0),
            trail_stroke_svg: 3.0,
            lightning_stroke_svg: 2.0,
            mountain_outline_stroke_mm: 0.15,
            bezier_segments: 16,
            endcap_segments: 6,
            clearance_mm: 0.12,
            samples_per_segment: 20,
            text_size_mm: 1.8,
            text_thickness_mm: 0.18,
        }
    }
}

impl GeneratorConfig {
    /// Millimeters per artwork unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.icon_target_width_mm / self.svg_icon_width
    }

    /// Half-width of the trail stroke on the board.
    #[must_use]
    pub fn trail_half_width_mm(&self) -> f64 {
        self.trail_stroke_svg * self.scale() / 2.0
    }

    /// Half-width of the lightning stroke on the board.
    #[must_use]
    pub fn lightning_half_width_mm(&self) -> f64 {
        self.lightning_stroke_svg * self.scale() / 2.0
    }

    /// Outline splitting parameters derived from this configuration.
    #[must_use]
    pub fn split_params(&self) -> SplitParams {
        SplitParams {
            clearance: self.clearance_mm,
            samples_per_segment: self.samples_per_segment,
            ..SplitParams::default()
        }
    }

    /// Checks every value the geometry code relies on as a precondition.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotPositive` for non-positive lengths and
    /// `ConfigError::TooFewSegments` for zero segment counts.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("icon target width", self.icon_target_width_mm),
            ("svg icon width", self.svg_icon_width),
            ("trail stroke width", self.trail_stroke_svg),
            ("lightning stroke width", self.lightning_stroke_svg),
            ("mountain outline stroke", self.mountain_outline_stroke_mm),
            ("clearance", self.clearance_mm),
            ("text size", self.text_size_mm),
            ("text thickness", self.text_thickness_mm),
        ];
        for (parameter, value) in lengths {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { parameter, value }.into());
            }
        }

        let counts = [
            ("bezier segments", self.bezier_segments),
            ("end cap segments", self.endcap_segments),
            ("samples per segment", self.samples_per_segment),
        ];
        for (parameter, value) in counts {
            if value < 1 {
                return Err(ConfigError::TooFewSegments {
                    parameter,
                    value,
                    min: 1,
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Where the generated footprint files go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    footprint_dir: PathBuf,
}

impl OutputConfig {
    /// Creates an output configuration rooted at `footprint_dir`.
    #[must_use]
    pub fn new(footprint_dir: impl Into<PathBuf>) -> Self {
        Self {
            footprint_dir: footprint_dir.into(),
        }
    }

    /// Reads [`FOOTPRINT_DIR_ENV`], falling back to [`Self::default_footprint_dir`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_override(std::env::var_os(FOOTPRINT_DIR_ENV).map(PathBuf::from))
    }

    /// Uses `dir` when given and non-empty, the default directory otherwise.
    #[must_use]
    pub fn from_override(dir: Option<PathBuf>) -> Self {
        match dir {
            Some(dir) if !dir.as_os_str().is_empty() => Self::new(dir),
            _ => Self::new(Self::default_footprint_dir()),
        }
    }

    /// The shared KiCad library checkout next to this repository.
    #[must_use]
    pub fn default_footprint_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("TrailCurrentKiCADLibraries")
            .join("footprints")
    }

    /// Root footprint directory.
    #[must_use]
    pub fn footprint_dir(&self) -> &Path {
        &self.footprint_dir
    }

    /// Library directory the `.kicad_mod` files are written into.
    #[must_use]
    pub fn library_dir(&self) -> PathBuf {
        self.footprint_dir.join(LIBRARY_DIR_NAME)
    }
}
