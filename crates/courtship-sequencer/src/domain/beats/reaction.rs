//! `reaction`: an emote sprite that bounces in above the player.

use courtship_core::context::Context;
use courtship_core::stage::SpriteId;
use glam::Vec3;
use tracing::debug;

use super::timer::Timer;
use super::{Beat, BeatStatus};
use crate::domain::descriptors::ReactionSpec;

/// Height of the sprite above the player's feet.
const HEAD_CLEARANCE: f32 = 2.2;
/// Peak scale reached at the end of the grow phase.
const OVERSHOOT_SCALE: f32 = 1.3;
const GROW_END: f32 = 0.15;
const SETTLE_END: f32 = 0.30;
const SHRINK_START: f32 = 0.80;
const BOB_AMPLITUDE: f32 = 0.05;
/// Radians per second.
const BOB_SPEED: f32 = 6.0;

/// Scale of the sprite at time fraction `t`.
///
/// Grows to 1.3× over the first 15%, settles to 1.0× by 30%, holds, then
/// shrinks to nothing over the final 20%.
#[must_use]
pub(crate) fn scale_at(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < GROW_END {
        OVERSHOOT_SCALE * (t / GROW_END)
    } else if t < SETTLE_END {
        let k = (t - GROW_END) / (SETTLE_END - GROW_END);
        OVERSHOOT_SCALE - (OVERSHOOT_SCALE - 1.0) * k
    } else if t < SHRINK_START {
        1.0
    } else {
        1.0 - (t - SHRINK_START) / (1.0 - SHRINK_START)
    }
}

/// Spawns a sprite on start, animates it every frame, removes it on finish.
#[derive(Debug)]
pub struct ReactionBeat {
    kind: String,
    timer: Timer,
    sprite: Option<SpriteId>,
    anchor: Vec3,
}

impl ReactionBeat {
    /// Creates the beat from its descriptor fields.
    #[must_use]
    pub fn new(spec: &ReactionSpec) -> Self {
        Self {
            kind: spec.kind.clone(),
            timer: Timer::new(spec.duration),
            sprite: None,
            anchor: Vec3::ZERO,
        }
    }

    fn bob(&self) -> f32 {
        let t = self.timer.fraction();
        if (SETTLE_END..SHRINK_START).contains(&t) {
            (self.timer.elapsed() * BOB_SPEED).sin() * BOB_AMPLITUDE
        } else {
            0.0
        }
    }
}

impl Beat for ReactionBeat {
    fn start(&mut self, ctx: &mut Context<'_>) {
        let Some(player) = ctx.stage.player_position() else {
            debug!(kind = %self.kind, "no player in phase, reaction shown without sprite");
            return;
        };
        self.anchor = player + Vec3::Y * HEAD_CLEARANCE;
        self.sprite = ctx
            .stage
            .spawn_sprite(ctx.binding.scene, &self.kind, self.anchor);
        if let Some(sprite) = self.sprite {
            ctx.stage.set_sprite_transform(sprite, self.anchor, 0.0);
        } else {
            debug!(kind = %self.kind, "reaction sprite unavailable");
        }
    }

    fn update(&mut self, dt: f32, ctx: &mut Context<'_>) -> BeatStatus {
        self.timer.advance(dt);
        if let Some(sprite) = self.sprite {
            if let Some(player) = ctx.stage.player_position() {
                self.anchor = player + Vec3::Y * HEAD_CLEARANCE;
            }
            let position = self.anchor + Vec3::Y * self.bob();
            ctx.stage
                .set_sprite_transform(sprite, position, scale_at(self.timer.fraction()));
        }
        BeatStatus::from_done(self.timer.is_done())
    }

    fn finish(&mut self, ctx: &mut Context<'_>) {
        if let Some(sprite) = self.sprite.take() {
            ctx.stage.remove_sprite(sprite);
        }
    }
}
