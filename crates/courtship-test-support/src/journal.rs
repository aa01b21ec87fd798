//! Test journal: keeps every appended entry.

use std::cell::RefCell;

use courtship_core::journal::{Journal, JournalEntry};

/// A journal that records entries for later inspection.
#[derive(Debug, Default)]
pub struct RecordingJournal {
    entries: RefCell<Vec<JournalEntry>>,
}

impl RecordingJournal {
    /// Creates an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded entries.
    #[must_use]
    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries.borrow().clone()
    }

    /// Returns the `event_type` of every entry, in order.
    #[must_use]
    pub fn event_types(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .map(|entry| entry.metadata.event_type.clone())
            .collect()
    }

    /// Counts entries of one type.
    #[must_use]
    pub fn count(&self, event_type: &str) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.metadata.event_type == event_type)
            .count()
    }
}

impl Journal for RecordingJournal {
    fn append(&self, entry: JournalEntry) {
        self.entries.borrow_mut().push(entry);
    }
}
