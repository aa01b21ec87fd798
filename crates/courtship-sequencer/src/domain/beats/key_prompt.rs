//! `key_prompt`: show a key prompt and wait for that key.

use courtship_core::context::Context;
use courtship_core::presenter::{EnterAnimation, LabelId, LabelSpec, LabelStyle};
use courtship_core::signal::Signal;
use tracing::warn;

use super::{Beat, BeatStatus};
use crate::domain::descriptors::KeyPromptSpec;

/// Displays a prompt label and suspends until `key_<key>` is signalled.
#[derive(Debug)]
pub struct KeyPromptBeat {
    key: String,
    prompt: String,
    label: Option<LabelId>,
    pressed: bool,
}

impl KeyPromptBeat {
    /// Creates the beat from its descriptor fields.
    #[must_use]
    pub fn new(spec: &KeyPromptSpec) -> Self {
        let prompt = if spec.prompt_text.is_empty() {
            format!("Press {}", spec.key.to_uppercase())
        } else {
            spec.prompt_text.clone()
        };
        Self {
            key: spec.key.clone(),
            prompt,
            label: None,
            pressed: false,
        }
    }
}

impl Beat for KeyPromptBeat {
    fn start(&mut self, ctx: &mut Context<'_>) {
        self.label = ctx.presenter.create_label(&LabelSpec {
            text: self.prompt.clone(),
            style: LabelStyle::Prompt,
            enter: EnterAnimation::Fade,
        });
        if self.label.is_none() {
            warn!(key = %self.key, "no label container, prompting without text");
        }
    }

    fn update(&mut self, _dt: f32, _ctx: &mut Context<'_>) -> BeatStatus {
        BeatStatus::from_done(self.pressed)
    }

    fn finish(&mut self, ctx: &mut Context<'_>) {
        if let Some(label) = self.label.take() {
            ctx.presenter.remove_label(label);
        }
    }

    fn on_signal(&mut self, signal: &Signal) -> bool {
        match signal {
            Signal::Key(key) if !self.pressed && *key == self.key => {
                self.pressed = true;
                true
            }
            _ => false,
        }
    }

    fn awaiting(&self) -> Option<Signal> {
        (!self.pressed).then(|| Signal::Key(self.key.clone()))
    }
}
