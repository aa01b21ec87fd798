//! Test host: records game-state switches and panel requests.

use courtship_core::host::{GameState, Host, InputSnapshot};

/// A host that records everything and serves scripted input.
#[derive(Debug, Default)]
pub struct RecordingHost {
    states: Vec<GameState>,
    choice_panels: usize,
    story_panels: usize,
    input: InputSnapshot,
}

impl RecordingHost {
    /// Creates a host with no recorded calls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Game states set so far, in order.
    #[must_use]
    pub fn states(&self) -> &[GameState] {
        &self.states
    }

    /// The most recently set game state.
    #[must_use]
    pub fn current_state(&self) -> Option<GameState> {
        self.states.last().copied()
    }

    /// Number of times the choice panel was opened.
    #[must_use]
    pub fn choice_panels(&self) -> usize {
        self.choice_panels
    }

    /// Number of times the story panel was opened.
    #[must_use]
    pub fn story_panels(&self) -> usize {
        self.story_panels
    }

    /// Sets the input returned from `input` until changed again.
    pub fn set_input(&mut self, input: InputSnapshot) {
        self.input = input;
    }
}

impl Host for RecordingHost {
    fn set_game_state(&mut self, state: GameState) {
        self.states.push(state);
    }

    fn input(&self) -> InputSnapshot {
        self.input
    }

    fn on_show_choice(&mut self) {
        self.choice_panels += 1;
    }

    fn on_show_story(&mut self) {
        self.story_panels += 1;
    }
}
