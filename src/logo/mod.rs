//! The TrailCurrent logo: artwork definition, board layout, and the icon
//! geometry built from them.

mod icon;
mod layout;

pub use icon::{build_icon, IconElements};
pub use layout::{layout_paths, LogoPaths};

use crate::error::{ConfigError, Result};
use crate::math::Point2;
use crate::tessellation::QuadBezier;

/// Logo path data in artwork units, before translation and scaling.
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    /// Mountain silhouette; drawn as a closed outline.
    pub mountain: Vec<Point2>,
    /// Trail centerline as a chain of quadratic curves.
    pub trail: Vec<QuadBezier>,
    /// Lightning bolt centerline.
    pub lightning: Vec<Point2>,
}

impl Default for Artwork {
    fn default() -> Self {
        let p = Point2::new;
        Self {
            mountain: vec![p(0.0, 28.0), p(12.0, 8.0), p(18.0, 16.0), p(28.0, 4.0), p(38.0, 28.0)],
            trail: vec![
                QuadBezier::new(p(4.0, 26.0), p(10.0, 22.0), p(14.0, 24.0)),
                QuadBezier::new(p(14.0, 24.0), p(20.0, 27.0), p(24.0, 22.0)),
                QuadBezier::new(p(24.0, 22.0), p(28.0, 17.0), p(34.0, 20.0)),
            ],
            lightning: vec![p(30.0, 10.0), p(33.0, 16.0), p(29.0, 16.0), p(32.0, 24.0)],
        }
    }
}

impl Artwork {
    /// Checks that every path can be stroked or outlined.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::PathTooShort` if the mountain or lightning path
    /// has fewer than 2 points, or the trail has no curves.
    pub fn validate(&self) -> Result<()> {
        if self.mountain.len() < 2 {
            return Err(ConfigError::PathTooShort("mountain").into());
        }
        if self.trail.is_empty() {
            return Err(ConfigError::PathTooShort("trail").into());
        }
        if self.lightning.len() < 2 {
            return Err(ConfigError::PathTooShort("lightning").into());
        }
        Ok(())
    }
}
