// SPDX-License-Identifier: MPL-2.0
//! Gesture newtypes.
//!
//! Type-safe wrappers for the values a gesture produces, ensuring they are
//! always within valid ranges.

// =============================================================================
// Scale Bounds
// =============================================================================

/// Gesture scale bounds.
pub mod scale_bounds {
    /// Smallest scale a transform ever holds.
    pub const MIN: f32 = 0.01;
    /// Natural size.
    pub const NATURAL: f32 = 1.0;
}

// =============================================================================
// GestureScale
// =============================================================================

/// Zoom factor reported by a pinch recognizer, guaranteed to be positive.
///
/// # Example
///
/// ```
/// use photo_lens::domain::gesture::GestureScale;
///
/// assert_eq!(GestureScale::new(1.25).value(), 1.25);
///
/// // A collapsed pinch never reaches zero.
/// assert!(GestureScale::new(0.0).value() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureScale(f32);

impl GestureScale {
    /// Creates a new scale, raising non-positive and NaN values to the minimum.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_nan() {
            return Self(scale_bounds::MIN);
        }
        Self(scale.max(scale_bounds::MIN))
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the image is exactly at natural size.
    #[must_use]
    pub fn is_natural(self) -> bool {
        self.0 == scale_bounds::NATURAL
    }
}

impl Default for GestureScale {
    fn default() -> Self {
        Self(scale_bounds::NATURAL)
    }
}

// =============================================================================
// Opacity
// =============================================================================

/// Opacity in the range `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacity(f32);

impl Opacity {
    /// Fully opaque.
    pub const OPAQUE: Self = Self(1.0);

    /// Creates a new opacity, clamping the value to `[0, 1]`.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::OPAQUE;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw opacity value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::OPAQUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_always_positive() {
        assert_eq!(GestureScale::new(-2.0).value(), scale_bounds::MIN);
        assert_eq!(GestureScale::new(f32::NAN).value(), scale_bounds::MIN);
        assert_eq!(GestureScale::new(3.0).value(), 3.0);
    }

    #[test]
    fn default_scale_is_natural() {
        assert!(GestureScale::default().is_natural());
        assert!(!GestureScale::new(1.0001).is_natural());
    }

    #[test]
    fn opacity_clamps_to_unit_range() {
        assert_eq!(Opacity::new(1.5).value(), 1.0);
        assert_eq!(Opacity::new(-0.2).value(), 0.0);
        assert_eq!(Opacity::new(0.4).value(), 0.4);
        assert_eq!(Opacity::default(), Opacity::OPAQUE);
    }
}
