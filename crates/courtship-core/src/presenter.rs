//! Screen-space presentation surface (fade overlay and anchored labels).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Identifies a label created through [`Presenter::create_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LabelId(pub u32);

/// Visual treatment of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// Spoken dialogue.
    #[default]
    Speech,
    /// Inner thought.
    Thought,
    /// Quiet aside.
    Whisper,
    /// Narrator text, not tied to a speaker.
    Narration,
    /// Input prompt ("Press A").
    Prompt,
}

/// How a label appears when created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnterAnimation {
    /// Scale up from nothing with a slight overshoot.
    #[default]
    Pop,
    /// Fade in.
    Fade,
    /// Appear immediately.
    None,
}

/// Everything needed to create a label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSpec {
    /// Displayed text.
    pub text: String,
    /// Visual treatment.
    pub style: LabelStyle,
    /// Entry animation.
    pub enter: EnterAnimation,
}

/// The host's 2D overlay layer.
///
/// Implementations that have no container for labels return `None` from
/// [`Presenter::create_label`]; beats then skip their visuals and still
/// complete on their own timers.
pub trait Presenter {
    /// Shows the full-screen fade overlay, optionally recolored.
    fn show_fade(&mut self, color: Option<&str>);

    /// Sets the fade overlay's opacity in `[0, 1]`.
    fn set_fade_opacity(&mut self, opacity: f32);

    /// Hides the fade overlay.
    fn hide_fade(&mut self);

    /// Creates a label and returns its handle.
    fn create_label(&mut self, spec: &LabelSpec) -> Option<LabelId>;

    /// Moves a label so its anchor sits at `screen` (pixels).
    fn place_label(&mut self, label: LabelId, screen: Vec2);

    /// Sets a label's opacity in `[0, 1]`.
    fn set_label_opacity(&mut self, label: LabelId, opacity: f32);

    /// Removes a label. Unknown ids are ignored.
    fn remove_label(&mut self, label: LabelId);

    /// Removes every label still on screen.
    fn clear_labels(&mut self);
}
