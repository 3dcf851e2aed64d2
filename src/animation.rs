//! Property transitions driven by the host's animation clock.
//!
//! There is no animation thread. Each animatable property (track width, thumb
//! width, thumb color, popup alpha) owns at most one [`Transition`]; starting
//! a new one replaces, and thereby cancels, the previous one. The controller
//! advances transitions only inside its `tick`, so ticks never overlap.

use web_time::{Duration, Instant};

use crate::renderer::Color;

/// Linear interpolation between two values of the same type.
pub trait Lerp: Copy {
    fn lerp(self, other: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Color {
    fn lerp(self, other: Self, t: f32) -> Self {
        Color::lerp(self, other, t)
    }
}

/// A single in-flight animation from one value to another.
#[derive(Debug, Clone, Copy)]
pub struct Transition<T: Lerp> {
    from: T,
    to: T,
    duration: Duration,
    started_at: Instant,
}

impl<T: Lerp> Transition<T> {
    pub fn new(from: T, to: T, duration: Duration, now: Instant) -> Self {
        Self {
            from,
            to,
            duration,
            started_at: now,
        }
    }

    /// Progress through the transition at `now`, clamped to `0.0..=1.0`.
    /// A zero-duration transition is complete immediately.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// The interpolated value at `now`.
    pub fn value_at(&self, now: Instant) -> T {
        self.from.lerp(self.to, self.progress(now))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}
