//! `custom_callback`: invoke a named level hook.

use courtship_core::context::Context;
use tracing::warn;

use super::timer::Timer;
use super::{Beat, BeatStatus};
use crate::domain::descriptors::CustomCallbackSpec;

/// Looks up and calls a level callback on start, then holds for `duration`.
///
/// A missing callback is logged and skipped; the hold still applies.
#[derive(Debug)]
pub struct CustomCallbackBeat {
    name: String,
    timer: Timer,
}

impl CustomCallbackBeat {
    /// Creates the beat from its descriptor fields.
    #[must_use]
    pub fn new(spec: &CustomCallbackSpec) -> Self {
        Self {
            name: spec.callback_name.clone(),
            timer: Timer::new(spec.duration),
        }
    }
}

impl Beat for CustomCallbackBeat {
    fn start(&mut self, ctx: &mut Context<'_>) {
        let callback = ctx.level.callback(&self.name);
        match callback {
            Some(callback) => callback(ctx),
            None => warn!(callback = %self.name, "level has no such callback"),
        }
    }

    fn update(&mut self, dt: f32, _ctx: &mut Context<'_>) -> BeatStatus {
        self.timer.advance(dt);
        BeatStatus::from_done(self.timer.is_done())
    }

    fn finish(&mut self, _ctx: &mut Context<'_>) {}
}
