#![cfg(feature = "serde")]

//! Contexts loaded from configuration files.
//!
//!   cargo test -p shade-style --features serde --test serde_config

use std::sync::Arc;

use shade_style::palette::system_colors;
use shade_style::{Brightness, ColorValue, ElevationLevel, ResolutionContext, StaticContext};

#[test]
fn full_context_from_json() {
    let ctx: StaticContext = serde_json::from_str(
        r#"{"name":"sheet","brightness":"dark","high_contrast":true,"elevation":"elevated"}"#,
    )
    .unwrap();
    assert_eq!(ctx.debug_name(), "sheet");
    assert_eq!(ctx.brightness(), Some(Brightness::Dark));
    assert_eq!(ctx.high_contrast_enabled(), Some(true));
    assert_eq!(ctx.elevation_level(), Some(ElevationLevel::Elevated));
}

#[test]
fn missing_fields_stay_unavailable() {
    let ctx: StaticContext = serde_json::from_str(r#"{"brightness":"light"}"#).unwrap();
    assert_eq!(ctx.brightness(), Some(Brightness::Light));
    assert_eq!(ctx.high_contrast_enabled(), None);
    assert_eq!(ctx.elevation_level(), None);
    assert_eq!(ctx.name, None);
}

#[test]
fn empty_object_is_default() {
    let ctx: StaticContext = serde_json::from_str("{}").unwrap();
    assert_eq!(ctx, StaticContext::default());
}

#[test]
fn unknown_axis_value_is_rejected() {
    let err = serde_json::from_str::<StaticContext>(r#"{"brightness":"dim"}"#);
    assert!(err.is_err());
}

#[test]
fn axis_values_serialize_lowercase() {
    assert_eq!(serde_json::to_string(&Brightness::Dark).unwrap(), r#""dark""#);
    assert_eq!(
        serde_json::to_string(&ElevationLevel::Elevated).unwrap(),
        r#""elevated""#
    );
}

#[test]
fn context_round_trips_through_json() {
    let ctx = StaticContext::new()
        .named("popover")
        .with_brightness(Brightness::Dark)
        .with_elevation(ElevationLevel::Elevated);
    let json = serde_json::to_string(&ctx).unwrap();
    let back: StaticContext = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ctx);
}

#[test]
fn loaded_context_drives_resolution() {
    let ctx: StaticContext = serde_json::from_str(
        r#"{"brightness":"dark","high_contrast":false,"elevation":"elevated"}"#,
    )
    .unwrap();
    let resolved = system_colors::system_background()
        .resolve(&Arc::new(ctx), false)
        .unwrap();
    assert_eq!(resolved.effective(), ColorValue::from_argb(255, 28, 28, 30));
}
