//! `overlay`: show or hide a level overlay.

use courtship_core::context::Context;
use courtship_core::level::OverlayAction;

use super::{Beat, BeatStatus};
use crate::domain::descriptors::OverlaySpec;

/// Forwards to the level's overlay hook on start; completes on the first update.
#[derive(Debug)]
pub struct OverlayBeat {
    overlay_id: String,
    action: OverlayAction,
}

impl OverlayBeat {
    /// Creates the beat from its descriptor fields.
    #[must_use]
    pub fn new(spec: &OverlaySpec) -> Self {
        Self {
            overlay_id: spec.overlay_id.clone(),
            action: spec.action,
        }
    }
}

impl Beat for OverlayBeat {
    fn start(&mut self, ctx: &mut Context<'_>) {
        ctx.level.control_overlay(&self.overlay_id, self.action);
    }

    fn update(&mut self, _dt: f32, _ctx: &mut Context<'_>) -> BeatStatus {
        BeatStatus::Done
    }

    fn finish(&mut self, _ctx: &mut Context<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtship_test_support::Harness;

    #[test]
    fn test_overlay_forwards_id_and_action() {
        let mut harness = Harness::new();
        let mut beat = OverlayBeat::new(&OverlaySpec {
            overlay_id: "polaroid".to_owned(),
            action: OverlayAction::Hide,
        });

        beat.start(&mut harness.ctx());

        assert_eq!(beat.update(0.0, &mut harness.ctx()), BeatStatus::Done);
        assert_eq!(
            harness.level.overlays(),
            &[("polaroid".to_owned(), OverlayAction::Hide)]
        );
    }
}
