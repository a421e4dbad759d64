// SPDX-License-Identifier: MPL-2.0
//! Drag-to-dismiss sub-component.
//!
//! Tracks a single-finger drag, fades the viewer as it moves down and, on
//! release, either snaps the photo back or dismisses the viewer depending on
//! where the fling would come to rest.

use crate::domain::gesture::{interpolate_clamped, snap_point, Opacity};
use crate::ui::state::GestureTuning;
use iced_core::Vector;
use std::time::Duration;

/// Lifecycle of the pan gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Active,
    SnappedBack,
    Dismissing,
}

/// Pan sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    phase: Phase,
}

/// Messages for the pan sub-component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Start,
    /// Cumulative translation since the gesture started.
    Move { translation: Vector },
    /// Finger lifted with the given vertical velocity (px/s).
    End { velocity_y: f32 },
}

/// What the orchestrator knows that the pan decision depends on.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// A pinch currently owns opacity and the dismiss decision.
    pub pinch_active: bool,
    /// Vertical offset of the photo at the time of the message.
    pub translation_y: f32,
    pub tuning: &'a GestureTuning,
}

/// Effects produced by pan messages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Gesture began.
    Activated,
    /// Follow the finger. `opacity` is `None` while a pinch suppresses the fade.
    Track {
        translation: Vector,
        opacity: Option<Opacity>,
    },
    /// Gesture ended while a pinch was active; only the pan flag is cleared.
    Released,
    /// Animate the photo home and restore opacity.
    SnapBack {
        duration: Duration,
        opacity: Opacity,
    },
    /// Close the viewer.
    Dismiss,
}

impl State {
    /// Handle a pan message.
    pub fn handle(&mut self, msg: Message, ctx: Context<'_>) -> Effect {
        match msg {
            Message::Start => {
                self.phase = Phase::Active;
                Effect::Activated
            }
            Message::Move { translation } => {
                let opacity =
                    (!ctx.pinch_active).then(|| fade_for_offset(translation.y, ctx.tuning));
                Effect::Track {
                    translation,
                    opacity,
                }
            }
            Message::End { velocity_y } => {
                if ctx.pinch_active {
                    self.phase = Phase::Idle;
                    return Effect::Released;
                }

                let screen_height = ctx.tuning.screen.height;
                let target = snap_point(ctx.translation_y, velocity_y, &[0.0, screen_height]);

                if target == screen_height {
                    self.phase = Phase::Dismissing;
                    Effect::Dismiss
                } else {
                    self.phase = Phase::SnappedBack;
                    Effect::SnapBack {
                        duration: ctx.tuning.snap_back,
                        opacity: release_opacity(velocity_y, ctx.tuning),
                    }
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

/// Fade level for a vertical drag offset.
#[must_use]
pub fn fade_for_offset(offset_y: f32, tuning: &GestureTuning) -> Opacity {
    Opacity::new(interpolate_clamped(
        offset_y,
        [0.0, tuning.pan_fade_distance],
        [1.0, tuning.pan_min_opacity],
    ))
}

/// Opacity restored when a drag snaps back.
///
/// The input range starts at the release velocity itself, so the result sits
/// on the opaque edge for every velocity.
#[must_use]
pub fn release_opacity(velocity_y: f32, tuning: &GestureTuning) -> Opacity {
    Opacity::new(interpolate_clamped(
        velocity_y,
        [velocity_y, 0.0],
        [1.0, tuning.pan_min_opacity],
    ))
}
