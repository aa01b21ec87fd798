//! Runtime beats.
//!
//! A beat is created from its descriptor when its turn comes, started once,
//! updated once per frame until it reports [`BeatStatus::Done`], and finished
//! exactly once, either after completing or when the run is stopped. It is
//! never reused.
//!
//! `update` must not block: waiting is expressed by returning
//! [`BeatStatus::Running`] on successive frames.

mod camera_move;
mod custom_callback;
mod fade;
mod free_roam;
mod interaction;
mod key_prompt;
mod overlay;
mod panel;
mod reaction;
mod scene_swap;
mod text_bubble;
mod timer;
mod wait;

pub use camera_move::CameraMoveBeat;
pub use custom_callback::CustomCallbackBeat;
pub use fade::FadeBeat;
pub use free_roam::FreeRoamBeat;
pub use interaction::InteractionBeat;
pub use key_prompt::KeyPromptBeat;
pub use overlay::OverlayBeat;
pub use panel::{Panel, PanelBeat};
pub use reaction::ReactionBeat;
pub use scene_swap::SceneSwapBeat;
pub use text_bubble::TextBubbleBeat;
pub use wait::WaitBeat;

use courtship_core::context::Context;
use courtship_core::signal::Signal;

use super::descriptors::{BeatDescriptor, BeatKind};

/// Result of one `update` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeatStatus {
    /// Call `update` again next frame.
    Running,
    /// The beat is complete; finish it and move on.
    Done,
}

impl BeatStatus {
    /// `Done` when `done` is true.
    #[must_use]
    pub fn from_done(done: bool) -> Self {
        if done { Self::Done } else { Self::Running }
    }
}

/// Lifecycle shared by every beat variant.
pub trait Beat {
    /// One-time setup and immediate side effects.
    fn start(&mut self, ctx: &mut Context<'_>);

    /// Advances by `dt` seconds.
    fn update(&mut self, dt: f32, ctx: &mut Context<'_>) -> BeatStatus;

    /// Releases whatever the beat itself created.
    fn finish(&mut self, ctx: &mut Context<'_>);

    /// Receives an external event. Returns `true` if the beat consumed it.
    ///
    /// The effect is observed on the next `update`, never retroactively.
    fn on_signal(&mut self, _signal: &Signal) -> bool {
        false
    }

    /// The signal this beat is suspended on, if any.
    fn awaiting(&self) -> Option<Signal> {
        None
    }
}

/// The single live beat of a run. One variant per descriptor kind.
#[derive(Debug)]
pub enum ActiveBeat {
    CameraMove(CameraMoveBeat),
    Wait(WaitBeat),
    TextBubble(TextBubbleBeat),
    Reaction(ReactionBeat),
    Panel(PanelBeat),
    Fade(FadeBeat),
    FreeRoam(FreeRoamBeat),
    SceneSwap(SceneSwapBeat),
    Interaction(InteractionBeat),
    Overlay(OverlayBeat),
    CustomCallback(CustomCallbackBeat),
    KeyPrompt(KeyPromptBeat),
}

impl ActiveBeat {
    /// Builds the runtime beat for a descriptor.
    #[must_use]
    pub fn from_descriptor(descriptor: &BeatDescriptor) -> Self {
        match descriptor {
            BeatDescriptor::CameraMove(spec) => Self::CameraMove(CameraMoveBeat::new(spec)),
            BeatDescriptor::Wait(spec) => Self::Wait(WaitBeat::new(spec.duration)),
            BeatDescriptor::TextBubble(spec) => Self::TextBubble(TextBubbleBeat::new(spec)),
            BeatDescriptor::Reaction(spec) => Self::Reaction(ReactionBeat::new(spec)),
            BeatDescriptor::ShowChoice => Self::Panel(PanelBeat::new(Panel::Choice)),
            BeatDescriptor::ShowStory => Self::Panel(PanelBeat::new(Panel::Story)),
            BeatDescriptor::Fade(spec) => Self::Fade(FadeBeat::new(spec)),
            BeatDescriptor::FreeRoam(spec) => Self::FreeRoam(FreeRoamBeat::new(spec)),
            BeatDescriptor::SceneSwap(spec) => Self::SceneSwap(SceneSwapBeat::new(spec)),
            BeatDescriptor::Interaction(spec) => Self::Interaction(InteractionBeat::new(spec)),
            BeatDescriptor::Overlay(spec) => Self::Overlay(OverlayBeat::new(spec)),
            BeatDescriptor::CustomCallback(spec) => {
                Self::CustomCallback(CustomCallbackBeat::new(spec))
            }
            BeatDescriptor::KeyPrompt(spec) => Self::KeyPrompt(KeyPromptBeat::new(spec)),
        }
    }

    /// The kind of beat.
    #[must_use]
    pub fn kind(&self) -> BeatKind {
        match self {
            Self::CameraMove(_) => BeatKind::CameraMove,
            Self::Wait(_) => BeatKind::Wait,
            Self::TextBubble(_) => BeatKind::TextBubble,
            Self::Reaction(_) => BeatKind::Reaction,
            Self::Panel(beat) => match beat.panel() {
                Panel::Choice => BeatKind::ShowChoice,
                Panel::Story => BeatKind::ShowStory,
            },
            Self::Fade(_) => BeatKind::Fade,
            Self::FreeRoam(_) => BeatKind::FreeRoam,
            Self::SceneSwap(_) => BeatKind::SceneSwap,
            Self::Interaction(_) => BeatKind::Interaction,
            Self::Overlay(_) => BeatKind::Overlay,
            Self::CustomCallback(_) => BeatKind::CustomCallback,
            Self::KeyPrompt(_) => BeatKind::KeyPrompt,
        }
    }

    fn as_beat(&mut self) -> &mut dyn Beat {
        match self {
            Self::CameraMove(beat) => beat,
            Self::Wait(beat) => beat,
            Self::TextBubble(beat) => beat,
            Self::Reaction(beat) => beat,
            Self::Panel(beat) => beat,
            Self::Fade(beat) => beat,
            Self::FreeRoam(beat) => beat,
            Self::SceneSwap(beat) => beat,
            Self::Interaction(beat) => beat,
            Self::Overlay(beat) => beat,
            Self::CustomCallback(beat) => beat,
            Self::KeyPrompt(beat) => beat,
        }
    }

    fn as_beat_ref(&self) -> &dyn Beat {
        match self {
            Self::CameraMove(beat) => beat,
            Self::Wait(beat) => beat,
            Self::TextBubble(beat) => beat,
            Self::Reaction(beat) => beat,
            Self::Panel(beat) => beat,
            Self::Fade(beat) => beat,
            Self::FreeRoam(beat) => beat,
            Self::SceneSwap(beat) => beat,
            Self::Interaction(beat) => beat,
            Self::Overlay(beat) => beat,
            Self::CustomCallback(beat) => beat,
            Self::KeyPrompt(beat) => beat,
        }
    }
}

impl Beat for ActiveBeat {
    fn start(&mut self, ctx: &mut Context<'_>) {
        self.as_beat().start(ctx);
    }

    fn update(&mut self, dt: f32, ctx: &mut Context<'_>) -> BeatStatus {
        self.as_beat().update(dt, ctx)
    }

    fn finish(&mut self, ctx: &mut Context<'_>) {
        self.as_beat().finish(ctx);
    }

    fn on_signal(&mut self, signal: &Signal) -> bool {
        self.as_beat().on_signal(signal)
    }

    fn awaiting(&self) -> Option<Signal> {
        self.as_beat_ref().awaiting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::descriptors::{
        CameraMoveSpec, CustomCallbackSpec, FadeSpec, FreeRoamSpec, InteractionSpec,
        KeyPromptSpec, OverlaySpec, ReactionSpec, SceneSwapSpec, TextBubbleSpec, WaitSpec,
    };

    #[test]
    fn test_factory_preserves_kind_for_every_descriptor() {
        let descriptors = [
            BeatDescriptor::CameraMove(CameraMoveSpec::default()),
            BeatDescriptor::Wait(WaitSpec::default()),
            BeatDescriptor::TextBubble(TextBubbleSpec::default()),
            BeatDescriptor::Reaction(ReactionSpec::default()),
            BeatDescriptor::ShowChoice,
            BeatDescriptor::ShowStory,
            BeatDescriptor::Fade(FadeSpec::default()),
            BeatDescriptor::FreeRoam(FreeRoamSpec::default()),
            BeatDescriptor::SceneSwap(SceneSwapSpec::default()),
            BeatDescriptor::Interaction(InteractionSpec::default()),
            BeatDescriptor::Overlay(OverlaySpec::default()),
            BeatDescriptor::CustomCallback(CustomCallbackSpec::default()),
            BeatDescriptor::KeyPrompt(KeyPromptSpec::default()),
        ];

        for descriptor in &descriptors {
            let beat = ActiveBeat::from_descriptor(descriptor);
            assert_eq!(beat.kind(), descriptor.kind());
        }
    }

    #[test]
    fn test_status_from_done() {
        assert_eq!(BeatStatus::from_done(true), BeatStatus::Done);
        assert_eq!(BeatStatus::from_done(false), BeatStatus::Running);
    }
}
