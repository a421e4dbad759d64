// SPDX-License-Identifier: MPL-2.0
//! Resolved gesture tuning.
//!
//! Turns the optional values of [`Config`](crate::config::Config) into the
//! concrete numbers the gesture engine works with. Out-of-range values fall
//! back to their defaults with a warning.

use crate::config::{
    Config, DEFAULT_DOUBLE_TAP_MS, DEFAULT_DOUBLE_TAP_ZOOM, DEFAULT_PAN_FADE_DISTANCE,
    DEFAULT_PAN_MIN_OPACITY, DEFAULT_PINCH_DISMISS_SCALE, DEFAULT_PINCH_SNAP_BACK_SCALE,
    DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, DEFAULT_SNAP_BACK_MS, MAX_DOUBLE_TAP_ZOOM,
    MAX_SNAP_BACK_MS, MIN_SCREEN_DIMENSION,
};
use iced_core::Size;
use std::time::Duration;

/// Concrete gesture parameters for one viewer session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureTuning {
    /// Logical screen size. The height is the off-screen pan snap point.
    pub screen: Size,
    pub pan_fade_distance: f32,
    pub pan_min_opacity: f32,
    pub snap_back: Duration,
    pub pinch_snap_back_scale: f32,
    pub pinch_dismiss_scale: f32,
    pub double_tap_zoom: f32,
    pub double_tap: Duration,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            screen: Size::new(DEFAULT_SCREEN_WIDTH, DEFAULT_SCREEN_HEIGHT),
            pan_fade_distance: DEFAULT_PAN_FADE_DISTANCE,
            pan_min_opacity: DEFAULT_PAN_MIN_OPACITY,
            snap_back: Duration::from_millis(DEFAULT_SNAP_BACK_MS),
            pinch_snap_back_scale: DEFAULT_PINCH_SNAP_BACK_SCALE,
            pinch_dismiss_scale: DEFAULT_PINCH_DISMISS_SCALE,
            double_tap_zoom: DEFAULT_DOUBLE_TAP_ZOOM,
            double_tap: Duration::from_millis(DEFAULT_DOUBLE_TAP_MS),
        }
    }
}

impl GestureTuning {
    /// Resolves tuning from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let display = &config.display;
        let gestures = &config.gestures;

        let screen = Size::new(
            checked(
                "screen_width",
                display.screen_width,
                DEFAULT_SCREEN_WIDTH,
                |v| v >= MIN_SCREEN_DIMENSION,
            ),
            checked(
                "screen_height",
                display.screen_height,
                DEFAULT_SCREEN_HEIGHT,
                |v| v >= MIN_SCREEN_DIMENSION,
            ),
        );

        Self {
            screen,
            pan_fade_distance: checked(
                "pan_fade_distance",
                gestures.pan_fade_distance,
                DEFAULT_PAN_FADE_DISTANCE,
                |v| v > 0.0,
            ),
            pan_min_opacity: checked(
                "pan_min_opacity",
                gestures.pan_min_opacity,
                DEFAULT_PAN_MIN_OPACITY,
                |v| (0.0..=1.0).contains(&v),
            ),
            snap_back: Duration::from_millis(checked(
                "snap_back_ms",
                gestures.snap_back_ms,
                DEFAULT_SNAP_BACK_MS,
                |v| v <= MAX_SNAP_BACK_MS,
            )),
            pinch_snap_back_scale: checked(
                "pinch_snap_back_scale",
                gestures.pinch_snap_back_scale,
                DEFAULT_PINCH_SNAP_BACK_SCALE,
                |v| v > 0.0 && v < 1.0,
            ),
            pinch_dismiss_scale: checked(
                "pinch_dismiss_scale",
                gestures.pinch_dismiss_scale,
                DEFAULT_PINCH_DISMISS_SCALE,
                |v| v > 0.0 && v < 1.0,
            ),
            double_tap_zoom: checked(
                "double_tap_zoom",
                gestures.double_tap_zoom,
                DEFAULT_DOUBLE_TAP_ZOOM,
                |v| v > 1.0 && v <= MAX_DOUBLE_TAP_ZOOM,
            ),
            double_tap: Duration::from_millis(checked(
                "double_tap_ms",
                gestures.double_tap_ms,
                DEFAULT_DOUBLE_TAP_MS,
                |v| v <= MAX_SNAP_BACK_MS,
            )),
        }
    }

    /// Returns a copy with a different screen size.
    #[must_use]
    pub fn with_screen(mut self, screen: Size) -> Self {
        self.screen = screen;
        self
    }
}

fn checked<T>(name: &str, value: Option<T>, default: T, valid: impl Fn(T) -> bool) -> T
where
    T: Copy + std::fmt::Debug,
{
    match value {
        Some(v) if valid(v) => v,
        Some(v) => {
            log::warn!("Ignoring out-of-range {name} = {v:?}, using {default:?}");
            default
        }
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_resolves_to_default_tuning() {
        assert_eq!(
            GestureTuning::from_config(&Config::default()),
            GestureTuning::default()
        );
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let mut config = Config::default();
        config.display.screen_height = Some(-10.0);
        config.gestures.pan_min_opacity = Some(3.0);
        config.gestures.double_tap_zoom = Some(0.5);
        config.gestures.snap_back_ms = Some(60_000);

        let tuning = GestureTuning::from_config(&config);
        assert_eq!(tuning.screen.height, DEFAULT_SCREEN_HEIGHT);
        assert_eq!(tuning.pan_min_opacity, DEFAULT_PAN_MIN_OPACITY);
        assert_eq!(tuning.double_tap_zoom, DEFAULT_DOUBLE_TAP_ZOOM);
        assert_eq!(tuning.snap_back, Duration::from_millis(DEFAULT_SNAP_BACK_MS));
    }

    #[test]
    fn missing_values_use_defaults_and_valid_ones_are_kept() {
        let mut config = Config::default();
        config.display.screen_width = None;
        config.gestures.double_tap_zoom = Some(2.5);

        let tuning = GestureTuning::from_config(&config);
        assert_eq!(tuning.screen.width, DEFAULT_SCREEN_WIDTH);
        assert_eq!(tuning.double_tap_zoom, 2.5);
    }

    #[test]
    fn with_screen_replaces_size_only() {
        let tuning = GestureTuning::default().with_screen(Size::new(100.0, 800.0));
        assert_eq!(tuning.screen.height, 800.0);
        assert_eq!(tuning.pan_fade_distance, DEFAULT_PAN_FADE_DISTANCE);
    }
}
