// SPDX-License-Identifier: MPL-2.0
//! Double-tap zoom toggle.
//!
//! Stateless: the photo's current scale alone decides the target.

use crate::domain::gesture::GestureScale;
use crate::ui::state::GestureTuning;
use std::time::Duration;

/// Effects produced by a double tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Animate the photo scale toward `target`.
    AnimateScale {
        target: GestureScale,
        duration: Duration,
    },
}

/// Handle a double tap on a photo currently at `current_scale`.
#[must_use]
pub fn handle(current_scale: f32, tuning: &GestureTuning) -> Effect {
    let target = if GestureScale::new(current_scale).is_natural() {
        GestureScale::new(tuning.double_tap_zoom)
    } else {
        GestureScale::default()
    };
    Effect::AnimateScale {
        target,
        duration: tuning.double_tap,
    }
}
