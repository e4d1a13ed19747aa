use serde::{Deserialize, Serialize};

use crate::core::{AttributeTable, DatumAxes, DatumMode, PartTable};
use crate::error::{DatumError, DatumResult};
use crate::render::{ArrowAspect, Color, LineAspect, PointAspect, ShadingAspect, TextAspect};

use super::DatumAspect;

/// Serializable by-value copy of a datum aspect, used by regression tests
/// and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatumAspectSnapshot {
    pub shading_aspects: PartTable<ShadingAspect>,
    pub line_aspects: PartTable<LineAspect>,
    pub text_aspect: TextAspect,
    pub point_aspect: PointAspect,
    pub arrow_aspect: ArrowAspect,
    pub attributes: AttributeTable,
    pub axes: DatumAxes,
    #[serde(default)]
    pub mode: DatumMode,
    pub draw_labels: bool,
    pub draw_arrows: bool,
}

impl DatumAspectSnapshot {
    /// Checks every aspect the snapshot carries against the aspect rules.
    ///
    /// Restoring does not run this: a datum may hold any aspect its setters
    /// accepted. Callers loading styles from outside can opt in.
    pub fn validate(&self) -> DatumResult<()> {
        for (_, aspect) in self.shading_aspects.iter() {
            aspect.validate()?;
        }
        for (_, aspect) in self.line_aspects.iter() {
            aspect.validate()?;
        }
        self.text_aspect.validate()?;
        self.point_aspect.validate()?;
        self.arrow_aspect.validate()
    }

    /// Rejects values JSON cannot carry: serde_json writes NaN and
    /// infinities as `null`, which does not parse back as `f64`.
    pub fn ensure_finite(&self) -> DatumResult<()> {
        for (attribute, value) in self.attributes.iter() {
            check_finite(value, attribute.name())?;
        }
        for (part, shading) in self.shading_aspects.iter() {
            check_color_finite(shading.color, part.name())?;
            check_finite(shading.transparency, part.name())?;
        }
        for (part, line) in self.line_aspects.iter() {
            check_color_finite(line.color, part.name())?;
            check_finite(line.width, part.name())?;
        }
        check_color_finite(self.text_aspect.color, "text_aspect")?;
        check_finite(self.text_aspect.height_px, "text_aspect")?;
        check_color_finite(self.point_aspect.color, "point_aspect")?;
        check_finite(self.point_aspect.scale, "point_aspect")?;
        check_finite(self.arrow_aspect.angle, "arrow_aspect")?;
        check_finite(self.arrow_aspect.length, "arrow_aspect")?;
        match self.arrow_aspect.color {
            Some(color) => check_color_finite(color, "arrow_aspect"),
            None => Ok(()),
        }
    }
}

fn check_finite(value: f64, field: &str) -> DatumResult<()> {
    if value.is_finite() {
        return Ok(());
    }
    Err(DatumError::InvalidData(format!(
        "`{field}` holds non-finite value {value}, which json cannot represent"
    )))
}

fn check_color_finite(color: Color, field: &str) -> DatumResult<()> {
    for channel in [color.red, color.green, color.blue, color.alpha] {
        check_finite(channel, field)?;
    }
    Ok(())
}

impl DatumAspect {
    #[must_use]
    pub fn snapshot(&self) -> DatumAspectSnapshot {
        DatumAspectSnapshot {
            shading_aspects: self.shading_aspects().map(|_, aspect| aspect.as_ref().clone()),
            line_aspects: self.line_aspects().map(|_, aspect| aspect.as_ref().clone()),
            text_aspect: self.text_aspect().as_ref().clone(),
            point_aspect: self.point_aspect().as_ref().clone(),
            arrow_aspect: self.arrow_aspect().as_ref().clone(),
            attributes: *self.attributes(),
            axes: self.datum_axes(),
            mode: self.datum_mode(),
            draw_labels: self.to_draw_labels(),
            draw_arrows: self.to_draw_arrows(),
        }
    }

    /// Rebuilds a datum aspect with one fresh handle per slot.
    #[must_use]
    pub fn from_snapshot(snapshot: &DatumAspectSnapshot) -> Self {
        Self::restore(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::api::DatumAspect;
    use crate::core::{DatumAttribute, DatumAxes, DatumMode, DatumPart};
    use crate::render::LineAspect;

    #[test]
    fn snapshot_restores_equal_aspect() {
        let mut aspect = DatumAspect::new();
        aspect.set_axis_length(5.0, 6.0, 7.0);
        aspect.set_draw_datum_axes(DatumAxes::YZ);
        aspect.set_datum_mode(DatumMode::Shading);
        aspect.set_draw_labels(false);
        aspect.line_aspect_mut(DatumPart::YArrow).width = 2.5;

        let restored = DatumAspect::from_snapshot(&aspect.snapshot());
        assert_eq!(restored, aspect);
        assert_eq!(restored.datum_mode(), DatumMode::Shading);
        assert!(!restored.to_draw_labels());
        assert!(restored.to_draw_arrows());
    }

    #[test]
    fn restore_keeps_aspects_that_fail_validation() {
        let mut aspect = DatumAspect::new();
        aspect.set_line_aspect(
            DatumPart::Origin,
            Arc::new(LineAspect::default().with_width(0.0)),
        );
        let snapshot = aspect.snapshot();
        assert!(snapshot.validate().is_err());

        let restored = DatumAspect::from_snapshot(&snapshot);
        assert_eq!(restored, aspect);
        assert_eq!(restored.line_aspect(DatumPart::Origin).width, 0.0);
    }

    #[test]
    fn non_finite_values_are_reported_by_field() {
        let mut aspect = DatumAspect::new();
        aspect.set_attribute(DatumAttribute::ShadingConeLengthPercent, f64::INFINITY);
        let err = aspect.snapshot().ensure_finite().expect_err("infinite attribute");
        assert!(err.to_string().contains("shading_cone_length_percent"));

        let mut aspect = DatumAspect::new();
        aspect.shading_aspect_mut(DatumPart::XOZAxis).color.alpha = f64::NAN;
        let err = aspect.snapshot().ensure_finite().expect_err("nan color channel");
        assert!(err.to_string().contains("xoz_axis"));

        assert!(DatumAspect::new().snapshot().ensure_finite().is_ok());
    }
}
