//! Courtship: narrative beat sequencer.
//!
//! Plays scripted cutscenes as an ordered list of timed beats (camera moves,
//! fades, dialogue bubbles, reactions, panels, free-roam handoffs, scene
//! swaps) driven one frame at a time by the host's render loop.

pub mod application;
pub mod domain;
