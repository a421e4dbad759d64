// SPDX-License-Identifier: MPL-2.0
//! Pinch-to-zoom sub-component.
//!
//! Follows the live pinch scale, fades the photo as it is pinched below
//! natural size and decides on release whether to keep the zoom, snap back
//! to natural size or dismiss the viewer.

use crate::config::PINCH_FADE_SCALE;
use crate::domain::gesture::{interpolate_clamped, GestureScale, Opacity};
use crate::ui::state::GestureTuning;
use std::time::Duration;

/// Lifecycle of the pinch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Active,
    /// Released at or below natural size and animating back to it.
    SnapToOne,
    /// Released above natural size; the zoom is kept.
    SnapAbove,
    Dismissing,
}

/// Pinch sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    phase: Phase,
}

/// Messages for the pinch sub-component. Scales are the recognizer's live value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Start,
    Move(GestureScale),
    End(GestureScale),
    /// Last event of the gesture, delivered after `End`.
    Finish(GestureScale),
}

/// Effects produced by pinch messages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// The photo was already at natural size; the pinch does not take over.
    None,
    /// Pinch took over opacity and the dismiss decision.
    Activated,
    /// Follow the fingers.
    Track { scale: GestureScale, opacity: Opacity },
    /// Keep a zoom above natural size.
    Commit { scale: GestureScale },
    /// Start the snap-back animations, then write `scale` over the scale animation.
    SnapBack {
        scale: GestureScale,
        duration: Duration,
    },
    /// Keep the released scale and let `Finish` decide.
    Hold { scale: GestureScale },
    /// Gesture finished without dismissing.
    Released,
    /// Close the viewer.
    Dismiss,
}

impl State {
    /// Handle a pinch message.
    ///
    /// `current_scale` is the photo's scale when the message arrives.
    pub fn handle(&mut self, msg: Message, current_scale: f32, tuning: &GestureTuning) -> Effect {
        match msg {
            Message::Start => {
                // Exact comparison: only a photo sitting at rest is ignored.
                if GestureScale::new(current_scale).is_natural() {
                    return Effect::None;
                }
                self.phase = Phase::Active;
                Effect::Activated
            }
            Message::Move(scale) => Effect::Track {
                scale,
                opacity: fade_for_scale(scale),
            },
            Message::End(scale) => {
                if scale.value() > 1.0 {
                    self.phase = Phase::SnapAbove;
                    Effect::Commit { scale }
                } else if scale.value() > tuning.pinch_snap_back_scale {
                    self.phase = Phase::SnapToOne;
                    Effect::SnapBack {
                        scale,
                        duration: tuning.snap_back,
                    }
                } else {
                    Effect::Hold { scale }
                }
            }
            Message::Finish(scale) => {
                if scale.value() < tuning.pinch_dismiss_scale {
                    self.phase = Phase::Dismissing;
                    Effect::Dismiss
                } else {
                    self.phase = Phase::Idle;
                    Effect::Released
                }
            }
        }
    }

    /// Current phase of the gesture.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

/// Fade level for a pinch scale: opaque at natural size, transparent at
/// [`PINCH_FADE_SCALE`].
#[must_use]
pub fn fade_for_scale(scale: GestureScale) -> Opacity {
    Opacity::new(interpolate_clamped(
        scale.value(),
        [1.0, PINCH_FADE_SCALE],
        [1.0, 0.0],
    ))
}
