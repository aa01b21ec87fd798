//! `scene_swap`: switch the level to another phase.

use courtship_core::context::Context;
use tracing::{debug, warn};

use super::{Beat, BeatStatus};
use crate::domain::descriptors::SceneSwapSpec;

/// Calls the level's phase switch and rebinds the context to the new phase's
/// scene and camera. Completes on the first update.
#[derive(Debug)]
pub struct SceneSwapBeat {
    target_phase: String,
}

impl SceneSwapBeat {
    /// Creates the beat from its descriptor fields.
    #[must_use]
    pub fn new(spec: &SceneSwapSpec) -> Self {
        Self {
            target_phase: spec.target_phase.clone(),
        }
    }
}

impl Beat for SceneSwapBeat {
    fn start(&mut self, ctx: &mut Context<'_>) {
        match ctx.level.set_phase(&self.target_phase) {
            Some(binding) => {
                debug!(phase = %self.target_phase, ?binding, "rebinding to new phase");
                *ctx.binding = binding;
            }
            None => warn!(phase = %self.target_phase, "level has no such phase, keeping current binding"),
        }
    }

    fn update(&mut self, _dt: f32, _ctx: &mut Context<'_>) -> BeatStatus {
        BeatStatus::Done
    }

    fn finish(&mut self, _ctx: &mut Context<'_>) {}
}
