// SPDX-License-Identifier: MPL-2.0
use photo_lens::config::{self, Config};
use photo_lens::replay::{self, GestureScript};
use photo_lens::ui::state::GestureTuning;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_gesture_settings_flow_into_replay() {
    let dir = tempdir().expect("Failed to create temporary directory");

    // Slower snap-back and a stronger double-tap zoom.
    let mut settings = Config::default();
    settings.gestures.snap_back_ms = Some(400);
    settings.gestures.double_tap_zoom = Some(2.5);
    config::save_with_override(&settings, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    let tuning = GestureTuning::from_config(&loaded);
    assert_eq!(tuning.snap_back, Duration::from_millis(400));

    let script = GestureScript::parse(
        r#"
[[events]]
kind = "double-tap"

[[events]]
kind = "tick"
ms = 1000
"#,
    )
    .expect("script should parse");
    let report = replay::run(&script, tuning);
    assert_eq!(report.frames[1].snapshot.scale, 2.5);
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[gestures\nbroken").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
}

#[test]
fn test_out_of_range_setting_uses_default() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[gestures]\npan_min_opacity = 3.0\n",
    )
    .expect("write");

    let (loaded, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded.gestures.pan_min_opacity, Some(3.0));
    assert_eq!(GestureTuning::from_config(&loaded).pan_min_opacity, 0.5);
}

#[test]
fn test_script_file_replays_to_dismiss() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("pinch.toml");
    fs::write(
        &path,
        r#"
[screen]
width = 400
height = 800

[asset]
id = "beach"
width = 4000
height = 3000

[[events]]
kind = "double-tap"

[[events]]
kind = "tick"
ms = 200

[[events]]
kind = "pinch-start"

[[events]]
kind = "pinch-move"
scale = 0.6

[[events]]
kind = "pinch-end"
scale = 0.6

[[events]]
kind = "pinch-finish"
scale = 0.6

[[events]]
kind = "double-tap"
"#,
    )
    .expect("write");

    let script = GestureScript::load(&path).expect("script should load");
    assert_eq!(script.asset().id, "beach");

    let report = replay::run(&script, script.tuning(GestureTuning::default()));
    assert_eq!(report.dismissed_at, Some(5));
    assert_eq!(report.frames.len(), 6);
}

#[test]
fn test_missing_script_is_io_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let err = GestureScript::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, photo_lens::error::Error::Io(_)));
}
