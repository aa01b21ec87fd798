//! `interaction`: hand control to the player until they use a trigger.

use courtship_core::completion::CompletionToken;
use courtship_core::context::Context;
use courtship_core::host::GameState;
use courtship_core::signal::Signal;
use tracing::debug;

use super::{Beat, BeatStatus};
use crate::domain::descriptors::InteractionSpec;

/// Arms a level interaction trigger and suspends until it fires.
///
/// The trigger fires either through the [`CompletionToken`] handed to the
/// level or through an `interaction` signal whose id matches the target (an
/// anonymous signal, or an empty target, matches anything).
#[derive(Debug)]
pub struct InteractionBeat {
    target: String,
    prompt: String,
    token: CompletionToken,
}

impl InteractionBeat {
    /// Creates the beat from its descriptor fields.
    #[must_use]
    pub fn new(spec: &InteractionSpec) -> Self {
        Self {
            target: spec.target_id.clone(),
            prompt: spec.prompt_text.clone(),
            token: CompletionToken::new(),
        }
    }

    fn matches(&self, id: Option<&str>) -> bool {
        self.target.is_empty() || id.is_none_or(|id| id == self.target)
    }
}

impl Beat for InteractionBeat {
    fn start(&mut self, ctx: &mut Context<'_>) {
        ctx.host.set_game_state(GameState::FreeRoam);
        ctx.level
            .enable_interaction(&self.target, &self.prompt, self.token.clone());
    }

    fn update(&mut self, _dt: f32, _ctx: &mut Context<'_>) -> BeatStatus {
        BeatStatus::from_done(self.token.is_complete())
    }

    fn finish(&mut self, ctx: &mut Context<'_>) {
        ctx.host.set_game_state(GameState::Cutscene);
        ctx.level.disable_interaction(&self.target);
    }

    fn on_signal(&mut self, signal: &Signal) -> bool {
        match signal {
            Signal::Interaction { id } if !self.token.is_complete() => {
                if self.matches(id.as_deref()) {
                    self.token.complete();
                    true
                } else {
                    debug!(target_id = %self.target, ?id, "interaction for another target");
                    false
                }
            }
            _ => false,
        }
    }

    fn awaiting(&self) -> Option<Signal> {
        (!self.token.is_complete()).then(|| Signal::Interaction {
            id: (!self.target.is_empty()).then(|| self.target.clone()),
        })
    }
}
