//! `free_roam`: let the player walk until they arrive somewhere or interact.

use courtship_core::context::Context;
use courtship_core::host::GameState;
use courtship_core::signal::Signal;
use glam::Vec3;
use tracing::warn;

use super::{Beat, BeatStatus};
use crate::domain::descriptors::{FreeRoamSpec, TriggerType};

/// Enables the player controller and suspends until the configured trigger.
#[derive(Debug)]
pub struct FreeRoamBeat {
    trigger: TriggerType,
    target_id: Option<String>,
    target_position: Vec3,
    radius: f32,
    interacted: bool,
}

impl FreeRoamBeat {
    /// Creates the beat from its descriptor fields.
    #[must_use]
    pub fn new(spec: &FreeRoamSpec) -> Self {
        Self {
            trigger: spec.trigger_type,
            target_id: spec.target_id.clone(),
            target_position: spec.target_position,
            radius: spec.radius.max(0.0),
            interacted: false,
        }
    }

    fn arrived(&self, ctx: &Context<'_>) -> bool {
        match ctx.stage.player_position() {
            Some(player) => player.distance(self.target_position) <= self.radius,
            None => {
                warn!("no player in phase, ending free roam");
                true
            }
        }
    }
}

impl Beat for FreeRoamBeat {
    fn start(&mut self, ctx: &mut Context<'_>) {
        ctx.host.set_game_state(GameState::FreeRoam);
        ctx.level.enable_free_roam();
    }

    fn update(&mut self, _dt: f32, ctx: &mut Context<'_>) -> BeatStatus {
        let done = match self.trigger {
            TriggerType::Proximity => self.arrived(ctx),
            TriggerType::Interact => self.interacted || ctx.host.input().interact_pressed,
        };
        BeatStatus::from_done(done)
    }

    fn finish(&mut self, ctx: &mut Context<'_>) {
        ctx.host.set_game_state(GameState::Cutscene);
        ctx.level.disable_free_roam();
    }

    fn on_signal(&mut self, signal: &Signal) -> bool {
        if self.trigger != TriggerType::Interact || self.interacted {
            return false;
        }
        match (signal, &self.target_id) {
            (Signal::Interaction { id: Some(id) }, Some(target)) if id != target => false,
            (Signal::Interaction { .. }, _) => {
                self.interacted = true;
                true
            }
            _ => false,
        }
    }

    fn awaiting(&self) -> Option<Signal> {
        match self.trigger {
            TriggerType::Interact if !self.interacted => Some(Signal::Interaction {
                id: self.target_id.clone(),
            }),
            _ => None,
        }
    }
}
