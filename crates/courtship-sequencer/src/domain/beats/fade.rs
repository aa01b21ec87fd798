//! `fade`: drive the full-screen overlay's opacity.

use courtship_core::context::Context;

use super::timer::Timer;
use super::{Beat, BeatStatus};
use crate::domain::descriptors::{FadeDirection, FadeSpec};

/// Fades the presenter's overlay in (0 → 1) or out (1 → 0).
///
/// A fade-in leaves the overlay covering the screen; a fade-out hides it
/// when finished, including when the run is stopped partway.
#[derive(Debug)]
pub struct FadeBeat {
    direction: FadeDirection,
    color: Option<String>,
    timer: Timer,
}

impl FadeBeat {
    /// Creates the beat from its descriptor fields.
    #[must_use]
    pub fn new(spec: &FadeSpec) -> Self {
        Self {
            direction: spec.direction,
            color: spec.color.clone(),
            timer: Timer::new(spec.duration),
        }
    }

    fn opacity(&self) -> f32 {
        let t = self.timer.fraction();
        match self.direction {
            FadeDirection::In => t,
            FadeDirection::Out => 1.0 - t,
        }
    }
}

impl Beat for FadeBeat {
    fn start(&mut self, ctx: &mut Context<'_>) {
        ctx.presenter.show_fade(self.color.as_deref());
        let initial = match self.direction {
            FadeDirection::In => 0.0,
            FadeDirection::Out => 1.0,
        };
        ctx.presenter.set_fade_opacity(initial);
    }

    fn update(&mut self, dt: f32, ctx: &mut Context<'_>) -> BeatStatus {
        self.timer.advance(dt);
        ctx.presenter.set_fade_opacity(self.opacity());
        BeatStatus::from_done(self.timer.fraction() >= 1.0)
    }

    fn finish(&mut self, ctx: &mut Context<'_>) {
        if self.direction == FadeDirection::Out {
            ctx.presenter.set_fade_opacity(0.0);
            ctx.presenter.hide_fade();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtship_test_support::Harness;

    #[test]
    fn test_fade_in_covers_screen_and_stays_visible() {
        // Arrange
        let mut harness = Harness::new();
        let mut beat = FadeBeat::new(&FadeSpec {
            direction: FadeDirection::In,
            duration: 1.0,
            color: Some("#ffffff".to_owned()),
        });

        // Act
        beat.start(&mut harness.ctx());
        let first = beat.update(0.25, &mut harness.ctx());
        let quarter = harness.presenter.fade().opacity;
        let second = beat.update(0.75, &mut harness.ctx());
        beat.finish(&mut harness.ctx());

        // Assert
        assert_eq!(first, BeatStatus::Running);
        assert!((quarter - 0.25).abs() < 1e-5);
        assert_eq!(second, BeatStatus::Done);
        let fade = harness.presenter.fade();
        assert!(fade.visible);
        assert!((fade.opacity - 1.0).abs() < 1e-5);
        assert_eq!(fade.color.as_deref(), Some("#ffffff"));
    }

    #[test]
    fn test_fade_out_hides_overlay_when_done() {
        let mut harness = Harness::new();
        let mut beat = FadeBeat::new(&FadeSpec {
            direction: FadeDirection::Out,
            duration: 0.5,
            color: None,
        });

        beat.start(&mut harness.ctx());
        assert!((harness.presenter.fade().opacity - 1.0).abs() < 1e-5);

        assert_eq!(beat.update(0.5, &mut harness.ctx()), BeatStatus::Done);
        beat.finish(&mut harness.ctx());

        assert!(harness.presenter.fade().opacity.abs() < 1e-5);
        assert!(!harness.presenter.fade().visible);
    }

    #[test]
    fn test_fade_out_finished_early_still_hides_overlay() {
        // Arrange
        let mut harness = Harness::new();
        let mut beat = FadeBeat::new(&FadeSpec {
            direction: FadeDirection::Out,
            duration: 2.0,
            color: None,
        });
        beat.start(&mut harness.ctx());
        assert_eq!(beat.update(0.5, &mut harness.ctx()), BeatStatus::Running);

        // Act
        beat.finish(&mut harness.ctx());

        // Assert
        let fade = harness.presenter.fade();
        assert!(!fade.visible);
        assert!(fade.opacity.abs() < 1e-5);
    }
}
