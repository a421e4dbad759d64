// SPDX-License-Identifier: MPL-2.0
//! Viewer transform state.
//!
//! The visual transform of the photo (translation, scale, opacity) plus the
//! gesture flags that arbitrate between pan and pinch. The gesture engine is
//! the only writer; renderers read it through accessors or a
//! [`TransformSnapshot`].

use super::animated::AnimatedValue;
use crate::config::PAN_CONTAINER_MIN_SCALE;
use crate::domain::gesture::{interpolate_clamped, GestureScale, Opacity};
use iced_core::Vector;
use std::time::Duration;

/// Mutable transform state of one viewing session.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerTransformState {
    translation_x: AnimatedValue,
    translation_y: AnimatedValue,
    scale: AnimatedValue,
    opacity: AnimatedValue,
    pan_active: bool,
    pinch_active: bool,
    dismiss_requested: bool,
}

impl Default for ViewerTransformState {
    fn default() -> Self {
        Self {
            translation_x: AnimatedValue::new(0.0),
            translation_y: AnimatedValue::new(0.0),
            scale: AnimatedValue::new(GestureScale::default().value()),
            opacity: AnimatedValue::new(Opacity::OPAQUE.value()),
            pan_active: false,
            pinch_active: false,
            dismiss_requested: false,
        }
    }
}

impl ViewerTransformState {
    /// Current pan offset from the rest position.
    #[must_use]
    pub fn translation(&self) -> Vector {
        Vector::new(self.translation_x.value(), self.translation_y.value())
    }

    /// Current pinch zoom factor.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    /// Current fade level.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    #[must_use]
    pub fn is_pan_active(&self) -> bool {
        self.pan_active
    }

    #[must_use]
    pub fn is_pinch_active(&self) -> bool {
        self.pinch_active
    }

    #[must_use]
    pub fn dismiss_requested(&self) -> bool {
        self.dismiss_requested
    }

    /// Whether any field is still animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.translation_x.is_animating()
            || self.translation_y.is_animating()
            || self.scale.is_animating()
            || self.opacity.is_animating()
    }

    /// Display scale of the image container while dragging: shrinks from 1 to
    /// [`PAN_CONTAINER_MIN_SCALE`] as the photo is dragged down one screen height.
    #[must_use]
    pub fn container_scale(&self, screen_height: f32) -> f32 {
        interpolate_clamped(
            self.translation_y.value(),
            [0.0, screen_height],
            [1.0, PAN_CONTAINER_MIN_SCALE],
        )
    }

    /// Copies the renderable values.
    #[must_use]
    pub fn snapshot(&self, screen_height: f32) -> TransformSnapshot {
        TransformSnapshot {
            translation: self.translation(),
            scale: self.scale(),
            opacity: self.opacity(),
            container_scale: self.container_scale(screen_height),
            pan_active: self.pan_active,
            pinch_active: self.pinch_active,
            dismiss_requested: self.dismiss_requested,
        }
    }

    // Writers used by the gesture engine.

    pub(crate) fn set_translation(&mut self, translation: Vector) {
        self.translation_x.set(translation.x);
        self.translation_y.set(translation.y);
    }

    pub(crate) fn animate_translation_home(&mut self, duration: Duration) {
        self.translation_x.animate_to(0.0, duration);
        self.translation_y.animate_to(0.0, duration);
    }

    pub(crate) fn set_scale(&mut self, scale: GestureScale) {
        self.scale.set(scale.value());
    }

    pub(crate) fn animate_scale(&mut self, target: GestureScale, duration: Duration) {
        self.scale.animate_to(target.value(), duration);
    }

    pub(crate) fn set_opacity(&mut self, opacity: Opacity) {
        self.opacity.set(opacity.value());
    }

    pub(crate) fn animate_opacity(&mut self, target: Opacity, duration: Duration) {
        self.opacity.animate_to(target.value(), duration);
    }

    pub(crate) fn set_pan_active(&mut self, active: bool) {
        self.pan_active = active;
    }

    pub(crate) fn set_pinch_active(&mut self, active: bool) {
        self.pinch_active = active;
    }

    pub(crate) fn request_dismiss(&mut self) {
        self.dismiss_requested = true;
    }

    /// Advances every running animation. Returns whether anything moved.
    pub(crate) fn advance(&mut self, dt: Duration) -> bool {
        // Non-short-circuiting so every field advances.
        self.translation_x.advance(dt)
            | self.translation_y.advance(dt)
            | self.scale.advance(dt)
            | self.opacity.advance(dt)
    }
}

/// Plain copy of the renderable transform values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSnapshot {
    pub translation: Vector,
    pub scale: f32,
    pub opacity: f32,
    /// Drag-driven display scale of the image container.
    pub container_scale: f32,
    pub pan_active: bool,
    pub pinch_active: bool,
    pub dismiss_requested: bool,
}
