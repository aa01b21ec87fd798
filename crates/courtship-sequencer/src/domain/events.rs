//! Lifecycle events emitted by a sequence run.

use courtship_core::journal::{EntryMetadata, JournalEntry};
use serde::{Deserialize, Serialize};

use super::descriptors::BeatKind;

/// Emitted when a run starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceStarted {
    /// Number of descriptors in the run.
    pub beat_count: usize,
}

/// Emitted after a beat's `start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeatStarted {
    /// Position in the descriptor list.
    pub index: usize,
    /// Beat kind.
    pub kind: BeatKind,
}

/// Emitted after a beat's `finish`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeatFinished {
    /// Position in the descriptor list.
    pub index: usize,
    /// Beat kind.
    pub kind: BeatKind,
    /// `true` when the run was stopped before the beat completed.
    pub forced: bool,
}

/// Emitted when a signal reaches a beat, consumed or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalRouted {
    /// Wire name of the signal.
    pub signal: String,
    /// Index of the beat it was offered to.
    pub index: usize,
}

/// Emitted when the last beat finishes naturally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceCompleted {
    /// Number of beats played.
    pub beat_count: usize,
}

/// Emitted when a run is stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceStopped {
    /// Index the run was at.
    pub index: usize,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceEventKind {
    /// A run started.
    SequenceStarted(SequenceStarted),
    /// A beat started.
    BeatStarted(BeatStarted),
    /// A beat finished.
    BeatFinished(BeatFinished),
    /// A beat consumed a signal.
    SignalDelivered(SignalRouted),
    /// A signal was offered but nothing consumed it.
    SignalDropped(SignalRouted),
    /// The run completed.
    SequenceCompleted(SequenceCompleted),
    /// The run was stopped.
    SequenceStopped(SequenceStopped),
}

impl SequenceEventKind {
    /// Type name used in journal entries.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::SequenceStarted(_) => "sequence.started",
            Self::BeatStarted(_) => "sequence.beat_started",
            Self::BeatFinished(_) => "sequence.beat_finished",
            Self::SignalDelivered(_) => "sequence.signal_delivered",
            Self::SignalDropped(_) => "sequence.signal_dropped",
            Self::SequenceCompleted(_) => "sequence.completed",
            Self::SequenceStopped(_) => "sequence.stopped",
        }
    }

    /// Wraps the event in a journal entry.
    #[must_use]
    pub fn into_entry(self, metadata: EntryMetadata) -> JournalEntry {
        let payload = serde_json::to_value(&self).unwrap_or(serde_json::Value::Null);
        JournalEntry { metadata, payload }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_into_entry_serializes_payload() {
        // Arrange
        let run_id = Uuid::new_v4();
        let kind = SequenceEventKind::BeatFinished(BeatFinished {
            index: 2,
            kind: BeatKind::TextBubble,
            forced: true,
        });
        let metadata = EntryMetadata {
            entry_id: Uuid::new_v4(),
            event_type: kind.event_type().to_owned(),
            run_id,
            sequence_number: 4,
            elapsed: 1.5,
        };

        // Act
        let entry = kind.into_entry(metadata);

        // Assert
        assert_eq!(entry.metadata.event_type, "sequence.beat_finished");
        assert_eq!(entry.metadata.run_id, run_id);
        assert_eq!(
            entry.payload,
            serde_json::json!({
                "BeatFinished": { "index": 2, "kind": "text_bubble", "forced": true }
            })
        );
    }
}
