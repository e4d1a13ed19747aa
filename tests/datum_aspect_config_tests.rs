use datum_aspect::DatumError;
use datum_aspect::api::{DatumAspect, DatumAspectConfig};
use datum_aspect::core::{DatumAxes, DatumMode, DatumPart};
use datum_aspect::render::Color;

#[test]
fn datum_aspect_config_json_roundtrip() {
    let config = DatumAspectConfig::default()
        .with_axes(DatumAxes::YZ)
        .with_axis_lengths(5.0, 6.0, 7.0)
        .with_color(Color::rgb(0.2, 0.3, 0.4))
        .with_mode(DatumMode::Shading);

    let json = config.to_json_pretty().expect("config should serialize");
    let restored = DatumAspectConfig::from_json_str(&json).expect("config should deserialize");
    assert_eq!(restored, config);
}

#[test]
fn partial_json_fills_defaults() {
    let config = DatumAspectConfig::from_json_str(r#"{"axes": 3, "draw_arrows": false}"#)
        .expect("partial config parses");
    assert_eq!(config.axes, DatumAxes::XY);
    assert!(!config.draw_arrows);
    assert!(config.draw_labels);
    assert_eq!(config.axis_lengths, [DatumAspect::DEFAULT_AXIS_LENGTH; 3]);
}

#[test]
fn config_styles_every_default_aspect() {
    let color = Color::rgb(0.1, 0.6, 0.2);
    let mut config = DatumAspectConfig::default().with_color(color);
    config.line_width = 2.0;
    config.text_height_px = 11.0;

    let aspect = DatumAspect::from_config(&config).expect("config builds");
    for part in DatumPart::ALL {
        assert_eq!(aspect.line_aspect(part).color, color);
        assert_eq!(aspect.line_aspect(part).width, 2.0);
        assert_eq!(aspect.shading_aspect(part).color, color);
    }
    assert_eq!(aspect.text_aspect().color, color);
    assert_eq!(aspect.text_aspect().height_px, 11.0);
    assert_eq!(aspect.point_aspect().color, color);
}

#[test]
fn config_applies_axes_lengths_and_toggles() {
    let mut config = DatumAspectConfig::default()
        .with_axes(DatumAxes::Z)
        .with_axis_lengths(1.0, 2.0, 3.0);
    config.draw_labels = false;

    let aspect = DatumAspect::from_config(&config).expect("config builds");
    assert_eq!(aspect.datum_axes(), DatumAxes::Z);
    assert_eq!(aspect.axis_length(DatumPart::ZAxis), 3.0);
    assert!(!aspect.to_draw_labels());
    assert!(aspect.to_draw_arrows());
}

#[test]
fn invalid_config_is_rejected() {
    let err = DatumAspectConfig::from_json_str(r#"{"line_width": -2.0}"#)
        .expect_err("negative width");
    assert!(matches!(err, DatumError::InvalidData(_)));

    let err = DatumAspectConfig::from_json_str(r#"{"axes": 64}"#).expect_err("unknown bits");
    assert!(matches!(err, DatumError::InvalidData(_)));

    let config = DatumAspectConfig::default().with_color(Color::rgb(-0.1, 0.0, 0.0));
    assert!(DatumAspect::from_config(&config).is_err());
}
