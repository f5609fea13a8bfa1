use crate::error::{ConfigError, Result};

/// Shape drawn at the two ends of an open stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// The outline closes straight across the endpoint.
    Butt,
    /// A semicircle centered on the endpoint.
    #[default]
    Round,
}

/// Shape used where two stroke segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    /// Always a (clamped) miter point.
    Miter,
    /// A circular fan for noticeable turns, a miter for nearly straight ones.
    #[default]
    Round,
}

/// Style parameters for converting a stroke into a filled polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    width: f64,
    line_cap: LineCap,
    line_join: LineJoin,
}

impl StrokeStyle {
    /// Creates a new stroke style with round caps and round joins.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive.
    pub fn new(width: f64) -> Result<Self> {
        if width.is_nan() || width <= 0.0 {
            return Err(ConfigError::NotPositive {
                parameter: "stroke width",
                value: width,
            }
            .into());
        }
        Ok(Self {
            width,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
        })
    }

    /// Creates a style without validating `width`.
    pub(crate) fn unchecked(width: f64) -> Self {
        Self {
            width,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
        }
    }

    /// Creates a style from the half-width, i.e. the offset distance on each
    /// side of the centerline.
    ///
    /// # Errors
    ///
    /// Returns an error if `half_width` is not positive.
    pub fn from_half_width(half_width: f64) -> Result<Self> {
        Self::new(half_width * 2.0)
    }

    /// Sets the cap style.
    #[must_use]
    pub fn with_line_cap(mut self, line_cap: LineCap) -> Self {
        self.line_cap = line_cap;
        self
    }

    /// Sets the join style.
    #[must_use]
    pub fn with_line_join(mut self, line_join: LineJoin) -> Self {
        self.line_join = line_join;
        self
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns half the stroke width.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width * 0.5
    }

    /// Returns the cap style.
    #[must_use]
    pub fn line_cap(&self) -> LineCap {
        self.line_cap
    }

    /// Returns the join style.
    #[must_use]
    pub fn line_join(&self) -> LineJoin {
        self.line_join
    }
}
