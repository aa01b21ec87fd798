//! The bag of borrowed collaborators threaded through every beat call.

use crate::host::Host;
use crate::level::Level;
use crate::presenter::Presenter;
use crate::stage::{PhaseBinding, Stage};

/// Borrowed references to everything a beat may touch.
///
/// The host builds one per call into the runner; the runner never stores it.
pub struct Context<'a> {
    /// Scene and camera currently driven. Scene swaps rebind this.
    pub binding: &'a mut PhaseBinding,
    /// Cameras, the player, and sprites.
    pub stage: &'a mut dyn Stage,
    /// Fade overlay and labels.
    pub presenter: &'a mut dyn Presenter,
    /// Hooks of the level hosting the sequence.
    pub level: &'a mut dyn Level,
    /// Game-state switching, input, and panels.
    pub host: &'a mut dyn Host,
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("binding", &self.binding)
            .finish_non_exhaustive()
    }
}
