//! Run journal abstraction.
//!
//! A journal observes what a sequence run did: which beats started and
//! finished, which signals were consumed. It never influences control flow.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata attached to every journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryMetadata {
    /// Unique entry identifier.
    pub entry_id: Uuid,
    /// Type name, e.g. `sequence.beat_started`.
    pub event_type: String,
    /// The run this entry belongs to. A fresh id is assigned on every start.
    pub run_id: Uuid,
    /// Monotonically increasing position within the run, starting at 1.
    pub sequence_number: u64,
    /// Simulated seconds since the run started (sum of frame deltas).
    pub elapsed: f32,
}

/// A recorded lifecycle event with its serialized payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Entry metadata.
    pub metadata: EntryMetadata,
    /// Serialized event payload.
    pub payload: serde_json::Value,
}

/// Sink for journal entries.
pub trait Journal {
    /// Records one entry. Must not fail; implementations drop what they cannot keep.
    fn append(&self, entry: JournalEntry);
}

/// A journal that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullJournal;

impl Journal for NullJournal {
    fn append(&self, _entry: JournalEntry) {}
}
