use approx::assert_relative_eq;
use datum_aspect::api::DatumAspect;
use datum_aspect::core::{DatumAttribute, DatumPart};

#[test]
fn set_axis_length_writes_all_three_attributes() {
    let mut aspect = DatumAspect::new();
    aspect.set_axis_length(1.0, 2.0, 3.0);

    assert_relative_eq!(aspect.attribute(DatumAttribute::XAxisLength), 1.0);
    assert_relative_eq!(aspect.attribute(DatumAttribute::YAxisLength), 2.0);
    assert_relative_eq!(aspect.attribute(DatumAttribute::ZAxisLength), 3.0);

    assert_relative_eq!(aspect.axis_length(DatumPart::XAxis), 1.0);
    assert_relative_eq!(aspect.axis_length(DatumPart::YAxis), 2.0);
    assert_relative_eq!(aspect.axis_length(DatumPart::ZAxis), 3.0);
}

#[test]
fn arrow_parts_report_their_axis_length() {
    let mut aspect = DatumAspect::new();
    aspect.set_axis_length(10.0, 20.0, 30.0);
    assert_relative_eq!(aspect.axis_length(DatumPart::XArrow), 10.0);
    assert_relative_eq!(aspect.axis_length(DatumPart::YArrow), 20.0);
    assert_relative_eq!(aspect.axis_length(DatumPart::ZArrow), 30.0);
}

#[test]
fn non_axis_parts_have_zero_length() {
    let aspect = DatumAspect::new();
    for part in [
        DatumPart::Origin,
        DatumPart::XOYAxis,
        DatumPart::YOZAxis,
        DatumPart::XOZAxis,
    ] {
        assert_eq!(aspect.axis_length(part), 0.0, "part {part:?}");
    }
}

#[test]
fn set_attribute_updates_axis_length() {
    let mut aspect = DatumAspect::new();
    aspect.set_attribute(DatumAttribute::YAxisLength, 42.5);
    assert_relative_eq!(aspect.axis_length(DatumPart::YAxis), 42.5);

    aspect.set_attribute(DatumAttribute::ShadingConeLengthPercent, 0.3);
    assert_relative_eq!(aspect.attribute(DatumAttribute::ShadingConeLengthPercent), 0.3);
    assert_relative_eq!(aspect.axis_length(DatumPart::YAxis), 42.5);
}

#[test]
fn arrow_part_for_axis_uses_fixed_table() {
    let aspect = DatumAspect::new();
    assert_eq!(aspect.arrow_part_for_axis(DatumPart::XAxis), Some(DatumPart::XArrow));
    assert_eq!(aspect.arrow_part_for_axis(DatumPart::YAxis), Some(DatumPart::YArrow));
    assert_eq!(aspect.arrow_part_for_axis(DatumPart::ZAxis), Some(DatumPart::ZArrow));
    assert_eq!(aspect.arrow_part_for_axis(DatumPart::ZArrow), Some(DatumPart::ZArrow));
    assert_eq!(aspect.arrow_part_for_axis(DatumPart::Origin), None);
    assert_eq!(aspect.arrow_part_for_axis(DatumPart::XOYAxis), None);
}

#[test]
fn arrow_part_for_axis_is_pure() {
    let aspect = DatumAspect::new();
    let before = aspect.clone();
    let first = aspect.arrow_part_for_axis(DatumPart::XAxis);
    let second = aspect.arrow_part_for_axis(DatumPart::XAxis);
    assert_eq!(first, second);
    assert_eq!(aspect, before);
}
