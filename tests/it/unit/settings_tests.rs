//! Unit tests for interaction settings persistence.

use std::time::Duration;
use tempfile::TempDir;
use whitecanvas::{CanvasError, Color, InteractionSettings, LineStyle, SlotOptions};

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("interaction.json");

    let mut settings = InteractionSettings::default();
    settings.throttle_ms = 16;
    settings.leading = false;
    settings.gesture_timeout_ms = Some(250);
    settings.overlay.color = Color::RED;
    settings.overlay.line_style = LineStyle::Dashed;

    settings.save_to(&path).unwrap();
    assert!(path.exists());

    let loaded = InteractionSettings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_derived_options() {
    let settings = InteractionSettings {
        throttle_ms: 20,
        leading: false,
        gesture_timeout_ms: Some(500),
        ..Default::default()
    };
    assert_eq!(settings.slot_options(), SlotOptions::throttled(20).with_leading(false));
    assert_eq!(settings.gesture_timeout(), Some(Duration::from_millis(500)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = InteractionSettings::load_from(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(CanvasError::Io(_))));
}

#[test]
fn test_malformed_file_is_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("interaction.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        InteractionSettings::load_from(&path),
        Err(CanvasError::Json(_))
    ));
}

#[test]
fn test_invalid_color_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("interaction.json");
    std::fs::write(&path, r#"{ "overlay": { "color": "chartreuse-ish" } }"#).unwrap();
    assert!(InteractionSettings::load_from(&path).is_err());
}

#[test]
fn test_overlay_defaults_fill_partial_style() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("interaction.json");
    std::fs::write(&path, r#"{ "overlay": { "width": 3.0 } }"#).unwrap();

    let loaded = InteractionSettings::load_from(&path).unwrap();
    assert_eq!(loaded.overlay.width, 3.0);
    assert_eq!(loaded.overlay.color, Color::GRAY);
    assert_eq!(loaded.throttle_ms, 0);
}
