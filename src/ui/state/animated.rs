// SPDX-License-Identifier: MPL-2.0
//! Animated scalar values.
//!
//! An [`AnimatedValue`] holds a current value and at most one timed animation
//! toward a target. Animations are advanced explicitly with [`AnimatedValue::advance`],
//! so the owner decides the clock (frame ticks in the viewer, fixed steps in tests).
//!
//! Writes follow last-write-wins: [`AnimatedValue::set`] drops any animation in
//! flight and [`AnimatedValue::animate_to`] replaces it.

use std::time::Duration;

/// Easing curves for timed animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Quadratic ease-in-out, the default curve for timed transitions.
    #[default]
    EaseInOutQuad,
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    #[must_use]
    pub fn transform(self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let rest = 1.0 - t;
                    1.0 - 2.0 * rest * rest
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Timing {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Timing {
    fn sample(&self) -> f32 {
        let fraction = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.transform(fraction)
    }
}

/// A scalar that is either at rest or moving toward a target over time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    value: f32,
    timing: Option<Timing>,
}

impl AnimatedValue {
    /// Creates a value at rest.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            value,
            timing: None,
        }
    }

    /// Current value, including animation progress.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Where the value will settle: the animation target, or the current value at rest.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.timing.map_or(self.value, |timing| timing.to)
    }

    /// Whether an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.timing.is_some()
    }

    /// Writes the value directly, dropping any animation in flight.
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.timing = None;
    }

    /// Starts an eased animation from the current value toward `target`.
    pub fn animate_to(&mut self, target: f32, duration: Duration) {
        self.animate_with(target, duration, Easing::default());
    }

    /// Starts an animation with an explicit easing curve.
    ///
    /// A zero duration lands on the target immediately.
    pub fn animate_with(&mut self, target: f32, duration: Duration, easing: Easing) {
        if duration.is_zero() {
            self.set(target);
            return;
        }
        self.timing = Some(Timing {
            from: self.value,
            to: target,
            duration,
            elapsed: Duration::ZERO,
            easing,
        });
    }

    /// Advances the animation by `dt`. Returns whether the value changed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(mut timing) = self.timing else {
            return false;
        };

        let previous = self.value;
        timing.elapsed = timing.elapsed.saturating_add(dt);

        if timing.elapsed >= timing.duration {
            self.value = timing.to;
            self.timing = None;
        } else {
            self.value = timing.sample();
            self.timing = Some(timing);
        }

        self.value != previous
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}
