//! Per-level hooks a sequence can call into.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::completion::CompletionToken;
use crate::context::Context;
use crate::stage::PhaseBinding;

/// Whether an overlay should be shown or hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayAction {
    /// Make the overlay visible.
    #[default]
    Show,
    /// Hide the overlay.
    Hide,
}

/// A named level hook invoked by custom-callback beats.
pub type LevelCallback = Rc<dyn Fn(&mut Context<'_>)>;

/// Named level hooks, keyed by callback name.
#[derive(Default, Clone)]
pub struct CallbackTable {
    entries: HashMap<String, LevelCallback>,
}

impl CallbackTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: Fn(&mut Context<'_>) + 'static,
    {
        self.entries.insert(name.into(), Rc::new(callback));
    }

    /// Looks up a callback by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<LevelCallback> {
        self.entries.get(name).cloned()
    }

    /// Returns `true` if no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for CallbackTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("CallbackTable").field("names", &names).finish()
    }
}

/// Hooks exposed by the level (chapter) currently hosting a sequence.
pub trait Level {
    /// Hands movement to the player controller.
    fn enable_free_roam(&mut self);

    /// Takes movement back from the player controller.
    fn disable_free_roam(&mut self);

    /// Arms the interaction trigger `target` with a prompt.
    ///
    /// The level completes `token` when the player uses the trigger.
    fn enable_interaction(&mut self, target: &str, prompt: &str, token: CompletionToken);

    /// Disarms the interaction trigger `target`.
    fn disable_interaction(&mut self, target: &str);

    /// Shows or hides a level-owned overlay.
    fn control_overlay(&mut self, overlay: &str, action: OverlayAction);

    /// Switches to the named phase and returns the scene/camera it renders with.
    ///
    /// Returns `None` when the level has no such phase.
    fn set_phase(&mut self, phase: &str) -> Option<PhaseBinding>;

    /// Looks up a named callback.
    fn callback(&self, name: &str) -> Option<LevelCallback>;
}
