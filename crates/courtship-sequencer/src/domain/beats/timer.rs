//! Elapsed-time bookkeeping shared by the timed beats.

use crate::domain::descriptors::sanitize_duration;

/// Accumulates frame deltas against a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Timer {
    elapsed: f32,
    duration: f32,
}

impl Timer {
    /// A timer for `duration` seconds (clamped to be non-negative and finite).
    pub(crate) fn new(duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration: sanitize_duration(duration),
        }
    }

    /// Adds `dt` seconds. Negative deltas are ignored.
    pub(crate) fn advance(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
    }

    /// Seconds accumulated so far.
    pub(crate) fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Seconds left before the duration is reached (never negative).
    pub(crate) fn remaining(&self) -> f32 {
        (self.duration - self.elapsed).max(0.0)
    }

    /// Elapsed over duration, clamped to `[0, 1]`. A zero duration reads as 1.
    pub(crate) fn fraction(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    /// Whether the duration has been reached.
    pub(crate) fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}
