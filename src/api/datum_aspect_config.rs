use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DatumAxes, DatumMode};
use crate::error::{DatumError, DatumResult};
use crate::render::{Color, TextAspect, ensure_positive};

use super::DatumAspect;

/// Serializable bootstrap configuration for a datum aspect.
///
/// Every field has a serde default, so an empty JSON object yields the
/// stock datum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatumAspectConfig {
    #[serde(default)]
    pub axes: DatumAxes,
    #[serde(default = "default_axis_lengths")]
    pub axis_lengths: [f64; 3],
    #[serde(default = "default_true")]
    pub draw_labels: bool,
    #[serde(default = "default_true")]
    pub draw_arrows: bool,
    #[serde(default)]
    pub mode: DatumMode,
    #[serde(default)]
    pub color: Color,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default = "default_text_height_px")]
    pub text_height_px: f64,
}

fn default_axis_lengths() -> [f64; 3] {
    [DatumAspect::DEFAULT_AXIS_LENGTH; 3]
}

fn default_true() -> bool {
    true
}

fn default_line_width() -> f64 {
    DatumAspect::DEFAULT_LINE_WIDTH
}

fn default_text_height_px() -> f64 {
    TextAspect::DEFAULT_HEIGHT_PX
}

impl Default for DatumAspectConfig {
    fn default() -> Self {
        Self {
            axes: DatumAxes::default(),
            axis_lengths: default_axis_lengths(),
            draw_labels: true,
            draw_arrows: true,
            mode: DatumMode::default(),
            color: Color::default(),
            line_width: default_line_width(),
            text_height_px: default_text_height_px(),
        }
    }
}

impl DatumAspectConfig {
    #[must_use]
    pub fn with_axes(mut self, axes: DatumAxes) -> Self {
        self.axes = axes;
        self
    }

    #[must_use]
    pub fn with_axis_lengths(mut self, x_length: f64, y_length: f64, z_length: f64) -> Self {
        self.axis_lengths = [x_length, y_length, z_length];
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: DatumMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn validate(&self) -> DatumResult<()> {
        for (axis, length) in ["x", "y", "z"].into_iter().zip(self.axis_lengths) {
            if !length.is_finite() || length <= 0.0 {
                return Err(DatumError::InvalidData(format!(
                    "{axis} axis length must be finite and > 0"
                )));
            }
        }
        ensure_positive(self.line_width, "line width")?;
        ensure_positive(self.text_height_px, "text height")?;
        self.color.validate()
    }

    pub fn to_json_pretty(&self) -> DatumResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(input: &str) -> DatumResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            DatumError::InvalidData(format!("failed to parse datum aspect config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl DatumAspect {
    /// Builds a datum aspect whose stock styles use the configured color,
    /// line width and label height.
    pub fn from_config(config: &DatumAspectConfig) -> DatumResult<Self> {
        config.validate()?;
        let mut aspect = Self::with_style(config.color, config.line_width, config.text_height_px);
        let [x_length, y_length, z_length] = config.axis_lengths;
        aspect.set_axis_length(x_length, y_length, z_length);
        aspect.set_draw_datum_axes(config.axes);
        aspect.set_draw_labels(config.draw_labels);
        aspect.set_draw_arrows(config.draw_arrows);
        aspect.set_datum_mode(config.mode);
        debug!(
            axes = config.axes.bits(),
            mode = ?config.mode,
            "datum aspect built from config"
        );
        Ok(aspect)
    }
}

#[cfg(test)]
mod tests {
    use super::DatumAspectConfig;
    use crate::api::DatumAspect;

    #[test]
    fn empty_json_yields_stock_datum() {
        let config = DatumAspectConfig::from_json_str("{}").expect("empty config is valid");
        assert_eq!(config, DatumAspectConfig::default());
        let aspect = DatumAspect::from_config(&config).expect("stock config builds");
        assert_eq!(aspect, DatumAspect::new());
    }

    #[test]
    fn non_positive_length_is_rejected() {
        let config = DatumAspectConfig::default().with_axis_lengths(1.0, 0.0, 1.0);
        let err = config.validate().expect_err("zero length");
        assert!(err.to_string().contains("y axis length"));
    }
}
