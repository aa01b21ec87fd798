//! `wait`: a pure timer.

use courtship_core::context::Context;

use super::timer::Timer;
use super::{Beat, BeatStatus};

/// Completes once `duration` seconds have elapsed.
#[derive(Debug)]
pub struct WaitBeat {
    timer: Timer,
}

impl WaitBeat {
    /// Creates a wait of `duration` seconds.
    #[must_use]
    pub fn new(duration: f32) -> Self {
        Self {
            timer: Timer::new(duration),
        }
    }
}

impl Beat for WaitBeat {
    fn start(&mut self, _ctx: &mut Context<'_>) {}

    fn update(&mut self, dt: f32, _ctx: &mut Context<'_>) -> BeatStatus {
        self.timer.advance(dt);
        BeatStatus::from_done(self.timer.is_done())
    }

    fn finish(&mut self, _ctx: &mut Context<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtship_test_support::Harness;

    #[test]
    fn test_wait_completes_when_elapsed_reaches_duration() {
        // Arrange
        let mut harness = Harness::new();
        let mut beat = WaitBeat::new(1.0);
        beat.start(&mut harness.ctx());

        // Act / Assert
        assert_eq!(beat.update(0.4, &mut harness.ctx()), BeatStatus::Running);
        assert_eq!(beat.update(0.4, &mut harness.ctx()), BeatStatus::Running);
        assert_eq!(beat.update(0.4, &mut harness.ctx()), BeatStatus::Done);
    }

    #[test]
    fn test_zero_wait_completes_on_first_update() {
        let mut harness = Harness::new();
        let mut beat = WaitBeat::new(0.0);
        beat.start(&mut harness.ctx());

        assert_eq!(beat.update(0.0, &mut harness.ctx()), BeatStatus::Done);
    }
}
