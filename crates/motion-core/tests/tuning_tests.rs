// Host-side tests for variant presets, overrides and attribute parsing.

use motion_core::constants::*;
use motion_core::*;

#[test]
fn variant_parsing_defaults_to_button() {
    assert_eq!(Variant::from_attr(Some("card")), Variant::Card);
    assert_eq!(Variant::from_attr(Some(" card")), Variant::Button);
    assert_eq!(Variant::from_attr(Some(" card ")), Variant::Button);
    assert_eq!(Variant::from_attr(Some("button")), Variant::Button);
    assert_eq!(Variant::from_attr(Some("Card")), Variant::Button);
    assert_eq!(Variant::from_attr(Some("")), Variant::Button);
    assert_eq!(Variant::from_attr(None), Variant::Button);
}

#[test]
fn card_preset_is_gentler_than_button() {
    let b = Variant::Button.defaults();
    let c = Variant::Card.defaults();
    assert!(c.magnetic < b.magnetic);
    assert!(c.zoom < b.zoom);
    assert!(c.max_tilt < b.max_tilt);
    assert!(c.proximity_radius < b.proximity_radius);
    assert!(c.glow_size > b.glow_size);
}

#[test]
fn overrides_replace_only_what_they_name() {
    let overrides = TuningOverrides {
        magnetic: Some(0.09),
        zoom: Some(0.055),
        proximity_radius: Some(1.45),
        ..Default::default()
    };
    let t = Tuning::resolve(Variant::Button, &overrides);
    assert_eq!(t.magnetic, 0.09);
    assert_eq!(t.zoom, 0.055);
    assert_eq!(t.proximity_radius, 1.45);
    assert_eq!(t.max_tilt, BUTTON_MAX_TILT_DEG);
    assert_eq!(t.glow_size, BUTTON_GLOW_SIZE_PX);
}

#[test]
fn out_of_range_overrides_are_clamped() {
    let overrides = TuningOverrides {
        magnetic: Some(-1.0),
        zoom: Some(-0.5),
        max_tilt: Some(-10.0),
        proximity_radius: Some(-2.0),
        glow_size: Some(-100.0),
    };
    let t = Tuning::resolve(Variant::Card, &overrides);
    assert_eq!(t.magnetic, 0.0);
    assert_eq!(t.zoom, 0.0);
    assert_eq!(t.max_tilt, 0.0);
    assert_eq!(t.proximity_radius, MIN_PROXIMITY_RADIUS);
    assert_eq!(t.glow_size, 0.0);
}

#[test]
fn non_finite_overrides_fall_back_to_defaults() {
    let overrides = TuningOverrides {
        magnetic: Some(f32::NAN),
        max_tilt: Some(f32::INFINITY),
        ..Default::default()
    };
    let t = Tuning::resolve(Variant::Card, &overrides);
    assert_eq!(t, Variant::Card.defaults());
}

#[test]
fn element_config_resolves_through_variant() {
    let mut config = ElementConfig::new(Variant::Card);
    config.overrides.magnetic = Some(0.08);
    let t = config.tuning();
    assert_eq!(t.magnetic, 0.08);
    assert_eq!(t.glow_size, CARD_GLOW_SIZE_PX);
    assert!(ElementConfig::default().transform_enabled);
}

#[test]
fn parse_override_accepts_numeric_prefixes() {
    assert_eq!(parse_override(Some("0.09")), Ok(Some(0.09)));
    assert_eq!(parse_override(Some("  1.45")), Ok(Some(1.45)));
    assert_eq!(parse_override(Some("0.09x")), Ok(Some(0.09)));
    assert_eq!(parse_override(Some("290px")), Ok(Some(290.0)));
    assert_eq!(parse_override(Some("-3")), Ok(Some(-3.0)));
    assert_eq!(parse_override(Some(".5")), Ok(Some(0.5)));
    assert_eq!(parse_override(Some("1e2")), Ok(Some(100.0)));
    assert_eq!(parse_override(Some("2e")), Ok(Some(2.0)));
}

#[test]
fn parse_override_saturates_beyond_f32_range() {
    assert_eq!(parse_override(Some("1e39")), Ok(Some(f32::MAX)));
    assert_eq!(parse_override(Some("-1e39")), Ok(Some(f32::MIN)));
    assert_eq!(parse_override(Some("1e-50")), Ok(Some(0.0)));
}

#[test]
fn parse_override_treats_blank_as_absent() {
    assert_eq!(parse_override(None), Ok(None));
    assert_eq!(parse_override(Some("")), Ok(None));
    assert_eq!(parse_override(Some("   ")), Ok(None));
}

#[test]
fn parse_override_rejects_garbage() {
    assert!(matches!(
        parse_override(Some("strong")),
        Err(TuningError::NotANumber { .. })
    ));
    assert!(matches!(
        parse_override(Some(".")),
        Err(TuningError::NotANumber { .. })
    ));
    assert!(matches!(
        parse_override(Some("-Infinity")),
        Err(TuningError::NotFinite { .. })
    ));
    assert!(matches!(
        parse_override(Some("1e999")),
        Err(TuningError::NotFinite { .. })
    ));
}

#[test]
fn override_or_default_swallows_errors() {
    assert_eq!(override_or_default("strength", Some("abc")), None);
    assert_eq!(override_or_default("strength", Some("0.1")), Some(0.1));
}

#[test]
fn channel_formatting_matches_css_units() {
    assert_eq!(Channel::TranslateX.format(1.25), "1.250px");
    assert_eq!(Channel::RotateY.format(-2.0), "-2.000deg");
    assert_eq!(Channel::GlowX.format(100.0), "100.00%");
    assert_eq!(Channel::Scale.format(1.0), "1.0000");
    assert_eq!(Channel::Hover.format(1.0), "1");
    assert_eq!(Channel::Press.format(0.0), "0.00");
    assert_eq!(Channel::GlowSize.format(190.0), "190.0px");
    assert_eq!(Channel::TextX.format(-0.0), "0.000px");
    assert_eq!(Channel::GlowX.css_name(), "--pm-x");
}
