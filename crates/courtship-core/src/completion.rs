//! Completion tokens handed to external systems.

use std::cell::Cell;
use std::rc::Rc;

/// A one-shot flag shared between a suspended beat and the system it waits on.
///
/// The beat keeps one clone and hands another to the collaborator (for
/// example an interaction trigger). Completing any clone is visible to all of
/// them. Single-threaded by construction: signals are delivered from the
/// host's main thread only.
#[derive(Debug, Clone, Default)]
pub struct CompletionToken(Rc<Cell<bool>>);

impl CompletionToken {
    /// Creates a token in the pending state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the token complete. Repeated calls are harmless.
    pub fn complete(&self) {
        self.0.set(true);
    }

    /// Returns `true` once any clone has been completed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.get()
    }
}
