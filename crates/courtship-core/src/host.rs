//! The enclosing game, as seen from a running sequence.

use serde::{Deserialize, Serialize};

/// Top-level game states a sequence may switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    /// A scripted sequence owns the camera and the player.
    Cutscene,
    /// The player moves freely.
    FreeRoam,
}

/// Input sampled by the host once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    /// The interact button went down this frame.
    pub interact_pressed: bool,
}

/// Game-level callbacks supplied by whoever started the sequence.
pub trait Host {
    /// Switches the enclosing game state.
    fn set_game_state(&mut self, state: GameState);

    /// Input for the current frame.
    fn input(&self) -> InputSnapshot;

    /// Opens the choice panel.
    fn on_show_choice(&mut self);

    /// Opens the story panel.
    fn on_show_story(&mut self);
}
