//! Courtship Core: shared collaborator contracts.
//!
//! This crate defines the traits and value types that the sequencer and its
//! hosts agree on: the world-facing collaborators a beat may touch, the
//! signals a host may inject, and the journal a run reports into. It contains
//! no sequencing logic.

pub mod completion;
pub mod context;
pub mod error;
pub mod host;
pub mod journal;
pub mod level;
pub mod presenter;
pub mod signal;
pub mod stage;
