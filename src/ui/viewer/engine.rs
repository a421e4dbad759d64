// SPDX-License-Identifier: MPL-2.0
//! Gesture transform engine.
//!
//! Orchestrates the pan, pinch and double-tap sub-components and applies
//! their effects to the [`ViewerTransformState`]. The engine is the only
//! writer of that state.
//!
//! Arbitration between the two continuous gestures:
//! - while a pinch is active, dragging moves the photo but does not fade it;
//! - while a pinch is active, releasing a drag never dismisses;
//! - the first dismiss decision is final and every later event is ignored.
//!
//! # Example
//!
//! ```
//! use photo_lens::ui::state::GestureTuning;
//! use photo_lens::ui::viewer::{GestureEngine, GestureEvent, Outcome};
//!
//! let mut engine = GestureEngine::new(GestureTuning::default());
//! engine.handle(GestureEvent::PanStart);
//! engine.handle(GestureEvent::PanMove { dx: 0.0, dy: 200.0 });
//! assert_eq!(engine.state().opacity(), 0.75);
//!
//! // A hard downward fling closes the viewer.
//! let outcome = engine.handle(GestureEvent::PanEnd { velocity_y: 4000.0 });
//! assert_eq!(outcome, Outcome::Dismissed);
//! ```

use super::subcomponents::{double_tap, pan, pinch};
use crate::domain::gesture::{GestureScale, Opacity};
use crate::ui::state::{GestureTuning, TransformSnapshot, ViewerTransformState};
use iced_core::Vector;
use std::time::Duration;

/// Raw event from a gesture recognizer.
///
/// Events of one gesture arrive as `start → move* → end → finish?`; pan and
/// pinch events may interleave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    PanStart,
    /// Cumulative drag translation since `PanStart`.
    PanMove { dx: f32, dy: f32 },
    PanEnd { velocity_y: f32 },
    PinchStart,
    PinchMove { scale: f32 },
    PinchEnd { scale: f32 },
    PinchFinish { scale: f32 },
    DoubleTap,
}

/// Result of handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed.
    Ignored,
    /// The transform or a gesture flag changed.
    Updated,
    /// This event closed the viewer.
    Dismissed,
}

/// Turns gesture events into transform updates and a dismiss decision.
#[derive(Debug, Clone)]
pub struct GestureEngine {
    transform: ViewerTransformState,
    tuning: GestureTuning,
    pan: pan::State,
    pinch: pinch::State,
}

impl GestureEngine {
    /// Creates an engine with the photo at rest.
    #[must_use]
    pub fn new(tuning: GestureTuning) -> Self {
        Self {
            transform: ViewerTransformState::default(),
            tuning,
            pan: pan::State::default(),
            pinch: pinch::State::default(),
        }
    }

    /// Read access to the transform.
    #[must_use]
    pub fn state(&self) -> &ViewerTransformState {
        &self.transform
    }

    #[must_use]
    pub fn tuning(&self) -> &GestureTuning {
        &self.tuning
    }

    #[must_use]
    pub fn pan_phase(&self) -> pan::Phase {
        self.pan.phase()
    }

    #[must_use]
    pub fn pinch_phase(&self) -> pinch::Phase {
        self.pinch.phase()
    }

    /// Renderable copy of the transform.
    #[must_use]
    pub fn snapshot(&self) -> TransformSnapshot {
        self.transform.snapshot(self.tuning.screen.height)
    }

    /// Whether the viewer should close.
    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        self.transform.dismiss_requested()
    }

    /// Handles one recognizer event.
    pub fn handle(&mut self, event: GestureEvent) -> Outcome {
        if self.is_dismissed() {
            return Outcome::Ignored;
        }
        log::trace!("gesture event {event:?}");

        match event {
            GestureEvent::PanStart => self.update_pan(pan::Message::Start),
            GestureEvent::PanMove { dx, dy } => self.update_pan(pan::Message::Move {
                translation: Vector::new(dx, dy),
            }),
            GestureEvent::PanEnd { velocity_y } => {
                self.update_pan(pan::Message::End { velocity_y })
            }
            GestureEvent::PinchStart => self.update_pinch(pinch::Message::Start),
            GestureEvent::PinchMove { scale } => {
                self.update_pinch(pinch::Message::Move(GestureScale::new(scale)))
            }
            GestureEvent::PinchEnd { scale } => {
                self.update_pinch(pinch::Message::End(GestureScale::new(scale)))
            }
            GestureEvent::PinchFinish { scale } => {
                self.update_pinch(pinch::Message::Finish(GestureScale::new(scale)))
            }
            GestureEvent::DoubleTap => self.double_tap(),
        }
    }

    pub fn on_pan_start(&mut self) -> Outcome {
        self.handle(GestureEvent::PanStart)
    }

    pub fn on_pan_move(&mut self, dx: f32, dy: f32) -> Outcome {
        self.handle(GestureEvent::PanMove { dx, dy })
    }

    pub fn on_pan_end(&mut self, velocity_y: f32) -> Outcome {
        self.handle(GestureEvent::PanEnd { velocity_y })
    }

    pub fn on_pinch_start(&mut self) -> Outcome {
        self.handle(GestureEvent::PinchStart)
    }

    pub fn on_pinch_move(&mut self, scale: f32) -> Outcome {
        self.handle(GestureEvent::PinchMove { scale })
    }

    pub fn on_pinch_end(&mut self, scale: f32) -> Outcome {
        self.handle(GestureEvent::PinchEnd { scale })
    }

    pub fn on_pinch_finish(&mut self, scale: f32) -> Outcome {
        self.handle(GestureEvent::PinchFinish { scale })
    }

    pub fn on_double_tap(&mut self) -> Outcome {
        self.handle(GestureEvent::DoubleTap)
    }

    /// Advances running animations by `dt`. Returns whether anything moved.
    ///
    /// Frozen once the viewer is dismissed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.is_dismissed() {
            return false;
        }
        self.transform.advance(dt)
    }

    fn update_pan(&mut self, msg: pan::Message) -> Outcome {
        let ctx = pan::Context {
            pinch_active: self.transform.is_pinch_active(),
            translation_y: self.transform.translation().y,
            tuning: &self.tuning,
        };

        match self.pan.handle(msg, ctx) {
            pan::Effect::Activated => {
                self.transform.set_pan_active(true);
            }
            pan::Effect::Track {
                translation,
                opacity,
            } => {
                self.transform.set_translation(translation);
                if let Some(opacity) = opacity {
                    self.transform.set_opacity(opacity);
                }
            }
            pan::Effect::Released => {
                self.transform.set_pan_active(false);
            }
            pan::Effect::SnapBack { duration, opacity } => {
                log::debug!(
                    "pan released at y={:.1}, snapping back",
                    self.transform.translation().y
                );
                self.transform.animate_translation_home(duration);
                self.transform.set_opacity(opacity);
                self.transform.set_pan_active(false);
            }
            pan::Effect::Dismiss => {
                log::debug!(
                    "pan released at y={:.1}, dismissing",
                    self.transform.translation().y
                );
                self.transform.set_pan_active(false);
                self.transform.request_dismiss();
                return Outcome::Dismissed;
            }
        }
        Outcome::Updated
    }

    fn update_pinch(&mut self, msg: pinch::Message) -> Outcome {
        // Arbitration ends when the fingers lift; `Finish` may never arrive.
        if matches!(msg, pinch::Message::End(_)) {
            self.transform.set_pinch_active(false);
        }

        match self.pinch.handle(msg, self.transform.scale(), &self.tuning) {
            pinch::Effect::None => return Outcome::Ignored,
            pinch::Effect::Activated => {
                self.transform.set_pinch_active(true);
            }
            pinch::Effect::Track { scale, opacity } => {
                self.transform.set_scale(scale);
                self.transform.set_opacity(opacity);
            }
            pinch::Effect::Commit { scale } => {
                log::debug!("pinch committed zoom {:.2}", scale.value());
                self.transform.set_scale(scale);
            }
            pinch::Effect::SnapBack { scale, duration } => {
                log::debug!("pinch released at {:.2}, snapping back", scale.value());
                self.transform
                    .animate_scale(GestureScale::default(), duration);
                self.transform.animate_opacity(Opacity::OPAQUE, duration);
                // Overwrites the scale animation just started; opacity keeps animating.
                self.transform.set_scale(scale);
            }
            pinch::Effect::Hold { scale } => {
                self.transform.set_scale(scale);
            }
            pinch::Effect::Released => {
                self.transform.set_pinch_active(false);
            }
            pinch::Effect::Dismiss => {
                log::debug!("pinch finished below dismiss threshold");
                self.transform.set_pinch_active(false);
                self.transform.request_dismiss();
                return Outcome::Dismissed;
            }
        }
        Outcome::Updated
    }

    fn double_tap(&mut self) -> Outcome {
        let double_tap::Effect::AnimateScale { target, duration } =
            double_tap::handle(self.transform.scale(), &self.tuning);
        self.transform.animate_scale(target, duration);
        Outcome::Updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced_core::Size;

    const FRAME: Duration = Duration::from_millis(16);

    fn engine() -> GestureEngine {
        GestureEngine::new(GestureTuning::default().with_screen(Size::new(400.0, 800.0)))
    }

    /// Advances until every animation settled.
    fn settle(engine: &mut GestureEngine) {
        for _ in 0..100 {
            engine.tick(FRAME);
        }
    }

    /// Puts the photo at `scale` without an active pinch.
    fn zoom_to(engine: &mut GestureEngine, scale: f32) {
        engine.on_pinch_move(scale);
        assert!(!engine.state().is_pinch_active());
    }

    #[test]
    fn pan_move_tracks_and_fades() {
        let mut engine = engine();
        assert_eq!(engine.on_pan_start(), Outcome::Updated);
        assert!(engine.state().is_pan_active());
        assert_eq!(engine.pan_phase(), pan::Phase::Active);

        engine.on_pan_move(12.0, 400.0);
        assert_eq!(engine.state().translation(), Vector::new(12.0, 400.0));
        assert_eq!(engine.state().opacity(), 0.5);
        assert_abs_diff_eq!(engine.snapshot().container_scale, 0.75);
    }

    #[test]
    fn slow_pan_release_snaps_home() {
        let mut engine = engine();
        engine.on_pan_start();
        engine.on_pan_move(0.0, 300.0);

        assert_eq!(engine.on_pan_end(50.0), Outcome::Updated);
        assert!(!engine.is_dismissed());
        assert!(!engine.state().is_pan_active());
        assert_eq!(engine.state().opacity(), 1.0);
        assert_eq!(engine.pan_phase(), pan::Phase::SnappedBack);

        // Snap-back animation takes 100ms.
        engine.tick(Duration::from_millis(50));
        assert!(engine.state().translation().y > 0.0);
        engine.tick(Duration::from_millis(50));
        assert_eq!(engine.state().translation(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn fast_pan_release_dismisses() {
        let mut engine = engine();
        engine.on_pan_start();
        engine.on_pan_move(0.0, 300.0);

        assert_eq!(engine.on_pan_end(3000.0), Outcome::Dismissed);
        assert!(engine.is_dismissed());
        assert!(!engine.state().is_pan_active());
    }

    #[test]
    fn pinch_suppresses_pan_fade() {
        let mut engine = engine();
        zoom_to(&mut engine, 1.2);
        engine.on_pinch_start();
        assert!(engine.state().is_pinch_active());
        let opacity = engine.state().opacity();

        engine.on_pan_start();
        engine.on_pan_move(0.0, 350.0);
        assert_eq!(engine.state().translation().y, 350.0);
        assert_eq!(engine.state().opacity(), opacity);
    }

    #[test]
    fn pan_release_during_pinch_never_dismisses() {
        let mut engine = engine();
        zoom_to(&mut engine, 1.2);
        engine.on_pinch_start();
        engine.on_pan_start();
        engine.on_pan_move(0.0, 700.0);

        assert_eq!(engine.on_pan_end(5000.0), Outcome::Updated);
        assert!(!engine.is_dismissed());
        assert!(!engine.state().is_pan_active());
        // Not snapped back either: the photo stays where the drag left it.
        assert_eq!(engine.state().translation().y, 700.0);
    }

    #[test]
    fn pinch_start_at_rest_is_not_captured() {
        let mut engine = engine();
        assert_eq!(engine.on_pinch_start(), Outcome::Ignored);
        assert!(!engine.state().is_pinch_active());

        // Moves still drive scale and opacity.
        engine.on_pinch_move(0.75);
        assert_eq!(engine.state().scale(), 0.75);
        assert_abs_diff_eq!(engine.state().opacity(), 0.5);
    }

    #[test]
    fn pinch_end_above_natural_size_keeps_zoom() {
        let mut engine = engine();
        zoom_to(&mut engine, 1.1);
        engine.on_pinch_start();
        engine.on_pinch_move(2.0);
        engine.on_pinch_end(2.0);
        assert_eq!(engine.on_pinch_finish(2.0), Outcome::Updated);

        settle(&mut engine);
        assert_eq!(engine.state().scale(), 2.0);
        assert!(!engine.state().is_pinch_active());
        assert_eq!(engine.pinch_phase(), pinch::Phase::Idle);
    }

    #[test]
    fn pinch_snap_back_overwrites_scale_but_restores_opacity() {
        let mut engine = engine();
        zoom_to(&mut engine, 1.1);
        engine.on_pinch_start();
        engine.on_pinch_move(0.8);
        assert_abs_diff_eq!(engine.state().opacity(), 0.6, epsilon = 1e-5);

        engine.on_pinch_end(0.8);
        assert_eq!(engine.pinch_phase(), pinch::Phase::SnapToOne);
        assert_eq!(engine.state().scale(), 0.8);

        settle(&mut engine);
        assert_eq!(engine.state().scale(), 0.8);
        assert_eq!(engine.state().opacity(), 1.0);
    }

    #[test]
    fn pinch_finish_below_threshold_dismisses_after_any_end_branch() {
        for end_scale in [1.3, 0.8, 0.5] {
            let mut engine = engine();
            zoom_to(&mut engine, 1.1);
            engine.on_pinch_start();
            engine.on_pinch_move(end_scale);
            engine.on_pinch_end(end_scale);

            assert_eq!(engine.on_pinch_finish(0.65), Outcome::Dismissed);
            assert!(engine.is_dismissed());
        }
    }

    #[test]
    fn pinch_end_without_finish_releases_pan() {
        let mut engine = engine();
        zoom_to(&mut engine, 1.2);
        engine.on_pinch_start();
        engine.on_pinch_move(1.8);
        engine.on_pinch_end(1.8);
        assert!(!engine.state().is_pinch_active());

        engine.on_pan_start();
        engine.on_pan_move(0.0, 400.0);
        assert_eq!(engine.state().opacity(), 0.5);
        assert_eq!(engine.on_pan_end(4000.0), Outcome::Dismissed);
    }

    #[test]
    fn double_tap_toggles_between_natural_and_zoomed() {
        let mut engine = engine();
        engine.on_double_tap();
        settle(&mut engine);
        assert_eq!(engine.state().scale(), 1.5);

        engine.on_double_tap();
        settle(&mut engine);
        assert_eq!(engine.state().scale(), 1.0);
    }

    #[test]
    fn dismissed_engine_ignores_everything() {
        let mut engine = engine();
        engine.on_pan_start();
        engine.on_pan_move(0.0, 600.0);
        assert_eq!(engine.on_pan_end(0.0), Outcome::Dismissed);
        let frozen = engine.snapshot();

        let events = [
            GestureEvent::PanStart,
            GestureEvent::PanMove { dx: 1.0, dy: 2.0 },
            GestureEvent::PanEnd { velocity_y: -100.0 },
            GestureEvent::PinchStart,
            GestureEvent::PinchMove { scale: 3.0 },
            GestureEvent::PinchEnd { scale: 3.0 },
            GestureEvent::PinchFinish { scale: 0.1 },
            GestureEvent::DoubleTap,
        ];
        for event in events {
            assert_eq!(engine.handle(event), Outcome::Ignored);
        }
        assert!(!engine.tick(FRAME));
        assert_eq!(engine.snapshot(), frozen);
        assert!(engine.is_dismissed());
    }
}
