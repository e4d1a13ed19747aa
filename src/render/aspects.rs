//! Style aspects consumed by datum presentations.
//!
//! Aspects are plain values. Presentations hold them through `Arc` handles so
//! several datums can share one style instance.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{DatumError, DatumResult};

use super::primitives::{Color, LineStrokeStyle, TextHAlign, ensure_positive};

/// Stroke attributes for one wireframe part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineAspect {
    pub color: Color,
    pub stroke_style: LineStrokeStyle,
    pub width: f64,
}

impl LineAspect {
    #[must_use]
    pub const fn new(color: Color, stroke_style: LineStrokeStyle, width: f64) -> Self {
        Self {
            color,
            stroke_style,
            width,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn validate(&self) -> DatumResult<()> {
        ensure_positive(self.width, "line width")?;
        self.color.validate()
    }
}

impl Default for LineAspect {
    fn default() -> Self {
        Self::new(Color::default(), LineStrokeStyle::Solid, 1.0)
    }
}

/// Surface attributes for one shaded part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadingAspect {
    pub color: Color,
    /// 0 is opaque, 1 fully transparent.
    pub transparency: f64,
}

impl ShadingAspect {
    #[must_use]
    pub const fn new(color: Color, transparency: f64) -> Self {
        Self {
            color,
            transparency,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn validate(&self) -> DatumResult<()> {
        if !self.transparency.is_finite() || !(0.0..=1.0).contains(&self.transparency) {
            return Err(DatumError::InvalidData(
                "shading transparency must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.color.validate()
    }
}

impl Default for ShadingAspect {
    fn default() -> Self {
        Self::new(Color::default(), 0.0)
    }
}

/// Font attributes shared by every axis label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAspect {
    pub color: Color,
    pub font: String,
    pub height_px: f64,
    pub h_align: TextHAlign,
}

impl TextAspect {
    pub const DEFAULT_FONT: &'static str = "Courier";
    pub const DEFAULT_HEIGHT_PX: f64 = 16.0;

    #[must_use]
    pub fn new(color: Color, font: impl Into<String>, height_px: f64) -> Self {
        Self {
            color,
            font: font.into(),
            height_px,
            h_align: TextHAlign::Left,
        }
    }

    #[must_use]
    pub fn with_h_align(mut self, h_align: TextHAlign) -> Self {
        self.h_align = h_align;
        self
    }

    pub fn validate(&self) -> DatumResult<()> {
        if self.font.trim().is_empty() {
            return Err(DatumError::InvalidData(
                "text font must not be empty".to_owned(),
            ));
        }
        ensure_positive(self.height_px, "text height")?;
        self.color.validate()
    }
}

impl Default for TextAspect {
    fn default() -> Self {
        Self::new(Color::default(), Self::DEFAULT_FONT, Self::DEFAULT_HEIGHT_PX)
    }
}

/// Marker glyph drawn at a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkerKind {
    /// Nothing is drawn; the point still occupies its slot.
    #[default]
    Empty,
    Point,
    Plus,
    Star,
    Cross,
    Circle,
    Ring,
}

/// Marker attributes for the datum origin in wireframe mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointAspect {
    pub marker: MarkerKind,
    pub color: Color,
    pub scale: f64,
}

impl PointAspect {
    #[must_use]
    pub const fn new(marker: MarkerKind, color: Color, scale: f64) -> Self {
        Self {
            marker,
            color,
            scale,
        }
    }

    pub fn validate(&self) -> DatumResult<()> {
        ensure_positive(self.scale, "point scale")?;
        self.color.validate()
    }
}

impl Default for PointAspect {
    fn default() -> Self {
        Self::new(MarkerKind::Empty, Color::default(), 1.0)
    }
}

/// Arrow head geometry shared by every axis tip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowAspect {
    /// Full opening angle in radians.
    pub angle: f64,
    pub length: f64,
    /// Overrides the owning axis line color when set.
    #[serde(default)]
    pub color: Option<Color>,
}

impl ArrowAspect {
    pub const DEFAULT_ANGLE: f64 = PI / 12.0;
    pub const DEFAULT_LENGTH: f64 = 10.0;

    #[must_use]
    pub const fn new(angle: f64, length: f64) -> Self {
        Self {
            angle,
            length,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn validate(&self) -> DatumResult<()> {
        if !self.angle.is_finite() || self.angle <= 0.0 || self.angle >= PI {
            return Err(DatumError::InvalidData(
                "arrow angle must be finite and in (0, pi)".to_owned(),
            ));
        }
        ensure_positive(self.length, "arrow length")?;
        match self.color {
            Some(color) => color.validate(),
            None => Ok(()),
        }
    }
}

impl Default for ArrowAspect {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ANGLE, Self::DEFAULT_LENGTH)
    }
}
