//! Test level: records hook calls and exposes armed interactions.

use std::collections::HashMap;

use courtship_core::completion::CompletionToken;
use courtship_core::level::{CallbackTable, Level, LevelCallback, OverlayAction};
use courtship_core::stage::PhaseBinding;

/// An interaction trigger the level currently has armed.
#[derive(Debug, Clone)]
pub struct ArmedInteraction {
    /// Trigger identifier.
    pub target: String,
    /// Prompt shown near the trigger.
    pub prompt: String,
    /// Token to complete when the player uses the trigger.
    pub token: CompletionToken,
}

/// A level whose hooks only record what they were asked to do.
#[derive(Debug, Default)]
pub struct RecordingLevel {
    free_roam: bool,
    free_roam_toggles: usize,
    armed: Vec<ArmedInteraction>,
    disarmed: Vec<String>,
    overlays: Vec<(String, OverlayAction)>,
    phases: HashMap<String, PhaseBinding>,
    phase_history: Vec<String>,
    callbacks: CallbackTable,
}

impl RecordingLevel {
    /// Creates a level with no phases and no callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a phase `set_phase` can switch to.
    pub fn add_phase(&mut self, name: impl Into<String>, binding: PhaseBinding) {
        self.phases.insert(name.into(), binding);
    }

    /// The callback table consulted by `callback`.
    pub fn callbacks_mut(&mut self) -> &mut CallbackTable {
        &mut self.callbacks
    }

    /// Whether free-roam is currently enabled.
    #[must_use]
    pub fn free_roam_enabled(&self) -> bool {
        self.free_roam
    }

    /// Number of enable/disable calls, combined.
    #[must_use]
    pub fn free_roam_toggles(&self) -> usize {
        self.free_roam_toggles
    }

    /// Interactions armed and not yet disarmed.
    #[must_use]
    pub fn armed(&self) -> &[ArmedInteraction] {
        &self.armed
    }

    /// Simulates the player using trigger `target`. Returns `false` if it is not armed.
    pub fn trigger(&self, target: &str) -> bool {
        match self.armed.iter().find(|armed| armed.target == target) {
            Some(armed) => {
                armed.token.complete();
                true
            }
            None => false,
        }
    }

    /// Targets disarmed so far, in order.
    #[must_use]
    pub fn disarmed(&self) -> &[String] {
        &self.disarmed
    }

    /// Overlay calls so far, in order.
    #[must_use]
    pub fn overlays(&self) -> &[(String, OverlayAction)] {
        &self.overlays
    }

    /// Phases switched to so far, in order (including unknown ones).
    #[must_use]
    pub fn phase_history(&self) -> &[String] {
        &self.phase_history
    }
}

impl Level for RecordingLevel {
    fn enable_free_roam(&mut self) {
        self.free_roam = true;
        self.free_roam_toggles += 1;
    }

    fn disable_free_roam(&mut self) {
        self.free_roam = false;
        self.free_roam_toggles += 1;
    }

    fn enable_interaction(&mut self, target: &str, prompt: &str, token: CompletionToken) {
        self.armed.push(ArmedInteraction {
            target: target.to_owned(),
            prompt: prompt.to_owned(),
            token,
        });
    }

    fn disable_interaction(&mut self, target: &str) {
        self.armed.retain(|armed| armed.target != target);
        self.disarmed.push(target.to_owned());
    }

    fn control_overlay(&mut self, overlay: &str, action: OverlayAction) {
        self.overlays.push((overlay.to_owned(), action));
    }

    fn set_phase(&mut self, phase: &str) -> Option<PhaseBinding> {
        self.phase_history.push(phase.to_owned());
        self.phases.get(phase).copied()
    }

    fn callback(&self, name: &str) -> Option<LevelCallback> {
        self.callbacks.get(name)
    }
}
