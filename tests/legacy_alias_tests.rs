#![allow(deprecated)]

use datum_aspect::api::DatumAspect;
use datum_aspect::core::{DatumAxes, DatumPart};
use std::sync::Arc;

#[test]
fn axis_aspect_aliases_forward_to_line_aspects() {
    let aspect = DatumAspect::new();
    assert!(Arc::ptr_eq(aspect.first_axis_aspect(), aspect.line_aspect(DatumPart::XAxis)));
    assert!(Arc::ptr_eq(aspect.second_axis_aspect(), aspect.line_aspect(DatumPart::YAxis)));
    assert!(Arc::ptr_eq(aspect.third_axis_aspect(), aspect.line_aspect(DatumPart::ZAxis)));
}

#[test]
fn axis_length_aliases_match_axis_length() {
    let mut aspect = DatumAspect::new();
    aspect.set_axis_length(4.0, 5.0, 6.0);
    assert_eq!(aspect.first_axis_length(), aspect.axis_length(DatumPart::XAxis));
    assert_eq!(aspect.second_axis_length(), aspect.axis_length(DatumPart::YAxis));
    assert_eq!(aspect.third_axis_length(), aspect.axis_length(DatumPart::ZAxis));
}

#[test]
fn first_and_second_axis_toggle_edits_xy_flags_only() {
    let mut aspect = DatumAspect::new();
    assert!(aspect.draw_first_and_second_axis());

    aspect.set_draw_first_and_second_axis(false);
    assert_eq!(aspect.datum_axes(), DatumAxes::Z);
    assert!(!aspect.draw_first_and_second_axis());
    assert!(aspect.draw_third_axis());

    aspect.set_draw_first_and_second_axis(true);
    assert_eq!(aspect.datum_axes(), DatumAxes::XYZ);
}

#[test]
fn third_axis_toggle_edits_z_flag_only() {
    let mut aspect = DatumAspect::new();
    aspect.set_draw_third_axis(false);
    assert_eq!(aspect.datum_axes(), DatumAxes::XY);
    assert!(!aspect.draw_third_axis());
    assert!(aspect.draw_first_and_second_axis());

    aspect.set_draw_third_axis(true);
    assert_eq!(aspect.datum_axes(), DatumAxes::XYZ);
}

#[test]
fn aliases_agree_with_modern_queries_for_partial_axes() {
    let mut aspect = DatumAspect::new();
    aspect.set_draw_datum_axes(DatumAxes::X | DatumAxes::Z);
    assert_eq!(
        aspect.draw_first_and_second_axis(),
        aspect.draw_datum_part(DatumPart::XAxis) && aspect.draw_datum_part(DatumPart::YAxis)
    );
    assert_eq!(aspect.draw_third_axis(), aspect.draw_datum_part(DatumPart::ZAxis));
}
