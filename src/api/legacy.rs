//! Forwarding accessors kept for callers written against the three-axis API.

use std::sync::Arc;

use crate::core::{DatumAttribute, DatumAxes, DatumPart};
use crate::render::LineAspect;

use super::DatumAspect;

impl DatumAspect {
    #[deprecated(note = "use `line_aspect(DatumPart::XAxis)` instead")]
    #[must_use]
    pub fn first_axis_aspect(&self) -> &Arc<LineAspect> {
        self.line_aspect(DatumPart::XAxis)
    }

    #[deprecated(note = "use `line_aspect(DatumPart::YAxis)` instead")]
    #[must_use]
    pub fn second_axis_aspect(&self) -> &Arc<LineAspect> {
        self.line_aspect(DatumPart::YAxis)
    }

    #[deprecated(note = "use `line_aspect(DatumPart::ZAxis)` instead")]
    #[must_use]
    pub fn third_axis_aspect(&self) -> &Arc<LineAspect> {
        self.line_aspect(DatumPart::ZAxis)
    }

    #[deprecated(note = "use `set_draw_datum_axes` instead")]
    pub fn set_draw_first_and_second_axis(&mut self, to_draw: bool) {
        let axes = self.datum_axes();
        self.set_draw_datum_axes(if to_draw {
            axes | DatumAxes::XY
        } else {
            axes - DatumAxes::XY
        });
    }

    #[deprecated(note = "use `datum_axes` instead")]
    #[must_use]
    pub fn draw_first_and_second_axis(&self) -> bool {
        self.datum_axes().contains(DatumAxes::XY)
    }

    #[deprecated(note = "use `set_draw_datum_axes` instead")]
    pub fn set_draw_third_axis(&mut self, to_draw: bool) {
        let axes = self.datum_axes();
        self.set_draw_datum_axes(if to_draw {
            axes | DatumAxes::Z
        } else {
            axes - DatumAxes::Z
        });
    }

    #[deprecated(note = "use `datum_axes` instead")]
    #[must_use]
    pub fn draw_third_axis(&self) -> bool {
        self.datum_axes().contains(DatumAxes::Z)
    }

    #[deprecated(note = "use `axis_length(DatumPart::XAxis)` instead")]
    #[must_use]
    pub fn first_axis_length(&self) -> f64 {
        self.attribute(DatumAttribute::XAxisLength)
    }

    #[deprecated(note = "use `axis_length(DatumPart::YAxis)` instead")]
    #[must_use]
    pub fn second_axis_length(&self) -> f64 {
        self.attribute(DatumAttribute::YAxisLength)
    }

    #[deprecated(note = "use `axis_length(DatumPart::ZAxis)` instead")]
    #[must_use]
    pub fn third_axis_length(&self) -> f64 {
        self.attribute(DatumAttribute::ZAxisLength)
    }
}
