//! Shared test fakes and utilities for the Courtship cutscene sequencer.

mod harness;
mod host;
mod journal;
mod level;
mod presenter;
mod stage;

pub use harness::Harness;
pub use host::RecordingHost;
pub use journal::RecordingJournal;
pub use level::{ArmedInteraction, RecordingLevel};
pub use presenter::{FadeState, LabelRecord, RecordingPresenter};
pub use stage::{FakeStage, SpriteRecord};
