// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Display**: Logical screen size used for layout and snap points
//! - **Pan**: Drag-to-dismiss fade and snap-back settings
//! - **Pinch**: Zoom snap-back and dismiss thresholds
//! - **Double Tap**: Zoom toggle target and duration

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default logical screen width in pixels.
pub const DEFAULT_SCREEN_WIDTH: f32 = 390.0;

/// Default logical screen height in pixels.
pub const DEFAULT_SCREEN_HEIGHT: f32 = 844.0;

/// Smallest screen dimension accepted from configuration.
pub const MIN_SCREEN_DIMENSION: f32 = 1.0;

// ==========================================================================
// Pan Defaults
// ==========================================================================

/// Vertical drag distance over which the viewer fades to its minimum opacity.
pub const DEFAULT_PAN_FADE_DISTANCE: f32 = 400.0;

/// Opacity reached once the drag covers the full fade distance.
pub const DEFAULT_PAN_MIN_OPACITY: f32 = 0.5;

/// Display scale of the image container once dragged a full screen height.
pub const PAN_CONTAINER_MIN_SCALE: f32 = 0.5;

/// Duration of the snap-back animation (translation and pinch scale).
pub const DEFAULT_SNAP_BACK_MS: u64 = 100;

/// Maximum snap-back duration accepted from configuration.
pub const MAX_SNAP_BACK_MS: u64 = 2_000;

// ==========================================================================
// Pinch Defaults
// ==========================================================================

/// Scale at which a pinched-out image becomes fully transparent.
pub const PINCH_FADE_SCALE: f32 = 0.5;

/// Released pinch scales above this value snap back to natural size.
pub const DEFAULT_PINCH_SNAP_BACK_SCALE: f32 = 0.6;

/// Finished pinch scales below this value dismiss the viewer.
pub const DEFAULT_PINCH_DISMISS_SCALE: f32 = 0.7;

// ==========================================================================
// Double Tap Defaults
// ==========================================================================

/// Zoom factor reached by double-tapping an image at natural size.
pub const DEFAULT_DOUBLE_TAP_ZOOM: f32 = 1.5;

/// Maximum double-tap zoom accepted from configuration.
pub const MAX_DOUBLE_TAP_ZOOM: f32 = 8.0;

/// Duration of the double-tap zoom animation.
pub const DEFAULT_DOUBLE_TAP_MS: u64 = 150;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SCREEN_WIDTH >= MIN_SCREEN_DIMENSION);
    assert!(DEFAULT_SCREEN_HEIGHT >= MIN_SCREEN_DIMENSION);

    assert!(DEFAULT_PAN_FADE_DISTANCE > 0.0);
    assert!(DEFAULT_PAN_MIN_OPACITY >= 0.0);
    assert!(DEFAULT_PAN_MIN_OPACITY <= 1.0);
    assert!(PAN_CONTAINER_MIN_SCALE > 0.0);
    assert!(DEFAULT_SNAP_BACK_MS <= MAX_SNAP_BACK_MS);

    assert!(PINCH_FADE_SCALE > 0.0);
    assert!(PINCH_FADE_SCALE < 1.0);
    assert!(DEFAULT_PINCH_SNAP_BACK_SCALE > 0.0);
    assert!(DEFAULT_PINCH_SNAP_BACK_SCALE < 1.0);
    assert!(DEFAULT_PINCH_DISMISS_SCALE > 0.0);
    assert!(DEFAULT_PINCH_DISMISS_SCALE < 1.0);

    assert!(DEFAULT_DOUBLE_TAP_ZOOM > 1.0);
    assert!(DEFAULT_DOUBLE_TAP_ZOOM <= MAX_DOUBLE_TAP_ZOOM);
};
