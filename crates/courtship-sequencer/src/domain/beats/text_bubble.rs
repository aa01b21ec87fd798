//! `text_bubble`: a dialogue label anchored above the player's head.

use courtship_core::context::Context;
use courtship_core::presenter::{LabelId, LabelSpec};
use glam::Vec3;
use tracing::warn;

use super::timer::Timer;
use super::{Beat, BeatStatus};
use crate::domain::descriptors::TextBubbleSpec;

/// Seconds over which the bubble fades out at the end of its duration.
const FADE_OUT_SECONDS: f32 = 0.5;

/// Shows a label, keeps it over the player every frame, fades it out over
/// the last half second, and removes it on finish.
#[derive(Debug)]
pub struct TextBubbleBeat {
    spec: LabelSpec,
    offset_y: f32,
    timer: Timer,
    label: Option<LabelId>,
}

impl TextBubbleBeat {
    /// Creates the beat from its descriptor fields.
    #[must_use]
    pub fn new(spec: &TextBubbleSpec) -> Self {
        Self {
            spec: LabelSpec {
                text: spec.text.clone(),
                style: spec.style,
                enter: spec.enter_animation,
            },
            offset_y: spec.offset_y,
            timer: Timer::new(spec.duration),
            label: None,
        }
    }

    /// The label this beat currently owns.
    #[must_use]
    pub fn label(&self) -> Option<LabelId> {
        self.label
    }

    fn opacity(&self) -> f32 {
        (self.timer.remaining() / FADE_OUT_SECONDS).min(1.0)
    }

    fn reposition(&self, label: LabelId, ctx: &mut Context<'_>) {
        let Some(player) = ctx.stage.player_position() else {
            return;
        };
        let head = player + Vec3::Y * self.offset_y;
        if let Some(screen) = ctx.stage.project(ctx.binding.camera, head) {
            ctx.presenter.place_label(label, screen);
        }
    }
}

impl Beat for TextBubbleBeat {
    fn start(&mut self, ctx: &mut Context<'_>) {
        self.label = ctx.presenter.create_label(&self.spec);
        match self.label {
            Some(label) => self.reposition(label, ctx),
            None => warn!(text = %self.spec.text, "no label container, skipping text bubble"),
        }
    }

    fn update(&mut self, dt: f32, ctx: &mut Context<'_>) -> BeatStatus {
        self.timer.advance(dt);
        if let Some(label) = self.label {
            self.reposition(label, ctx);
            ctx.presenter.set_label_opacity(label, self.opacity());
        }
        BeatStatus::from_done(self.timer.is_done())
    }

    fn finish(&mut self, ctx: &mut Context<'_>) {
        if let Some(label) = self.label.take() {
            ctx.presenter.remove_label(label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtship_core::presenter::{EnterAnimation, LabelStyle};
    use courtship_test_support::Harness;
    use glam::Vec2;

    fn bubble(duration: f32) -> TextBubbleSpec {
        TextBubbleSpec {
            text: "Do you come here often?".to_owned(),
            style: LabelStyle::Speech,
            duration,
            offset_y: 2.0,
            enter_animation: EnterAnimation::Pop,
        }
    }

    #[test]
    fn test_label_follows_player_head() {
        // Arrange
        let mut harness = Harness::new();
        harness.stage.set_player(Some(Vec3::new(1.0, 0.0, 0.0)));
        let mut beat = TextBubbleBeat::new(&bubble(3.0));

        // Act
        beat.start(&mut harness.ctx());
        let label = beat.label().unwrap();
        let placed_at_start = harness.presenter.label(label).unwrap().position;
        harness.stage.set_player(Some(Vec3::new(2.0, 0.0, 0.0)));
        beat.update(0.1, &mut harness.ctx());

        // Assert
        assert_eq!(placed_at_start, Some(Vec2::new(500.0, 100.0)));
        let record = harness.presenter.label(label).unwrap();
        assert_eq!(record.position, Some(Vec2::new(600.0, 100.0)));
        assert_eq!(record.spec.text, "Do you come here often?");
    }

    #[test]
    fn test_opacity_fades_over_last_half_second() {
        let mut harness = Harness::new();
        let mut beat = TextBubbleBeat::new(&bubble(2.0));
        beat.start(&mut harness.ctx());
        let label = beat.label().unwrap();

        beat.update(1.0, &mut harness.ctx());
        let full = harness.presenter.label(label).unwrap().opacity;
        beat.update(0.75, &mut harness.ctx());
        let half = harness.presenter.label(label).unwrap().opacity;

        assert!((full - 1.0).abs() < 1e-5);
        assert!((half - 0.5).abs() < 1e-4, "opacity = {half}");
    }

    #[test]
    fn test_finish_removes_label() {
        let mut harness = Harness::new();
        let mut beat = TextBubbleBeat::new(&bubble(1.0));
        beat.start(&mut harness.ctx());
        assert_eq!(harness.presenter.labels().len(), 1);

        assert_eq!(beat.update(1.0, &mut harness.ctx()), BeatStatus::Done);
        beat.finish(&mut harness.ctx());

        assert!(harness.presenter.labels().is_empty());
        assert_eq!(beat.label(), None);
    }

    #[test]
    fn test_missing_container_still_completes() {
        let mut harness = Harness::new();
        harness.presenter.without_container();
        let mut beat = TextBubbleBeat::new(&bubble(0.5));

        beat.start(&mut harness.ctx());
        let status = beat.update(0.5, &mut harness.ctx());
        beat.finish(&mut harness.ctx());

        assert_eq!(status, BeatStatus::Done);
        assert!(harness.presenter.labels().is_empty());
    }
}
