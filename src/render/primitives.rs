use serde::{Deserialize, Serialize};

use crate::error::{DatumError, DatumResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    /// Light steel blue 4, the stock datum color.
    pub const LIGHT_STEEL_BLUE_4: Self = Self::rgb(0.431, 0.482, 0.545);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> DatumResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(DatumError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::LIGHT_STEEL_BLUE_4
    }
}

/// Dash pattern used to stroke a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    DotDash,
}

/// Horizontal text alignment relative to the label anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextHAlign {
    #[default]
    Left,
    Center,
    Right,
}

pub(crate) fn ensure_positive(value: f64, what: &str) -> DatumResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DatumError::InvalidData(format!(
            "{what} must be finite and > 0"
        )));
    }
    Ok(())
}
