//! The sequence runner.
//!
//! Holds the descriptor list of one run and the single live beat, and moves
//! through the list as beats report done. The host calls [`SequenceRunner::start`]
//! once, [`SequenceRunner::update`] once per rendered frame, and
//! [`SequenceRunner::signal`] from its main-thread input handling.
//!
//! Guarantees:
//! - at most one beat is live;
//! - every started beat is finished exactly once, naturally or by `stop`;
//! - no beat is updated after it is finished;
//! - a signal only reaches the live beat and takes effect on the next update.

use std::fmt;
use std::rc::Rc;

use courtship_core::context::Context;
use courtship_core::journal::{EntryMetadata, Journal, NullJournal};
use courtship_core::signal::Signal;
use tracing::{Span, debug, info, instrument};
use uuid::Uuid;

use crate::domain::beats::{ActiveBeat, Beat, BeatStatus};
use crate::domain::descriptors::{BeatDescriptor, BeatKind};
use crate::domain::events::{
    BeatFinished, BeatStarted, SequenceCompleted, SequenceEventKind, SequenceStarted,
    SequenceStopped, SignalRouted,
};

/// What happened to a signal offered to the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalOutcome {
    /// The live beat consumed it.
    Delivered,
    /// A beat is live but does not react to this signal.
    Ignored,
    /// Nothing is running.
    NoActiveBeat,
}

/// Plays one descriptor list at a time.
pub struct SequenceRunner {
    beats: Vec<BeatDescriptor>,
    current_index: usize,
    active: Option<ActiveBeat>,
    running: bool,
    run_id: Option<Uuid>,
    elapsed: f32,
    sequence_number: u64,
    on_complete: Option<Box<dyn FnMut()>>,
    journal: Rc<dyn Journal>,
}

impl SequenceRunner {
    /// Creates an idle runner that journals nowhere.
    #[must_use]
    pub fn new() -> Self {
        Self::with_journal(Rc::new(NullJournal))
    }

    /// Creates an idle runner that reports lifecycle events to `journal`.
    #[must_use]
    pub fn with_journal(journal: Rc<dyn Journal>) -> Self {
        Self {
            beats: Vec::new(),
            current_index: 0,
            active: None,
            running: false,
            run_id: None,
            elapsed: 0.0,
            sequence_number: 0,
            on_complete: None,
            journal,
        }
    }

    /// Sets the callback fired when a run completes naturally.
    ///
    /// It is not fired when a run is stopped.
    pub fn set_on_complete(&mut self, on_complete: impl FnMut() + 'static) {
        self.on_complete = Some(Box::new(on_complete));
    }

    /// Starts a run over `descriptors`, beginning with the first beat.
    ///
    /// A run already in progress is stopped first, finishing its live beat.
    /// An empty list completes immediately.
    #[instrument(skip_all, fields(beat_count = descriptors.len(), run_id = tracing::field::Empty))]
    pub fn start(&mut self, descriptors: Vec<BeatDescriptor>, ctx: &mut Context<'_>) {
        if self.running || self.active.is_some() {
            debug!("restarting, stopping previous run");
            self.stop(ctx);
        }

        let run_id = Uuid::new_v4();
        Span::current().record("run_id", tracing::field::display(run_id));
        self.beats = descriptors;
        self.current_index = 0;
        self.running = true;
        self.run_id = Some(run_id);
        self.elapsed = 0.0;
        self.sequence_number = 0;

        info!(%run_id, "sequence started");
        self.record(SequenceEventKind::SequenceStarted(SequenceStarted {
            beat_count: self.beats.len(),
        }));

        self.advance_to_next(ctx);
    }

    /// Advances the live beat by `dt` seconds. Returns whether the run is
    /// still going afterwards.
    ///
    /// When the beat reports done it is finished and the next beat is
    /// started within the same call, so a finished beat never sees another
    /// update.
    pub fn update(&mut self, dt: f32, ctx: &mut Context<'_>) -> bool {
        if !self.running {
            return false;
        }
        let Some(beat) = self.active.as_mut() else {
            return self.running;
        };

        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }

        if beat.update(dt, ctx) == BeatStatus::Done {
            self.finish_active(ctx, false);
            self.current_index += 1;
            self.advance_to_next(ctx);
        }
        self.running
    }

    /// Offers `signal` to the live beat.
    ///
    /// Its effect is observed on the next [`update`](Self::update).
    pub fn signal(&mut self, signal: &Signal) -> SignalOutcome {
        let index = self.current_index;
        let Some(beat) = self.active.as_mut() else {
            debug!(%signal, "signal with no active beat dropped");
            return SignalOutcome::NoActiveBeat;
        };

        let consumed = beat.on_signal(signal);
        let routed = SignalRouted {
            signal: signal.event_name(),
            index,
        };
        if consumed {
            debug!(%signal, index, "signal delivered");
            self.record(SequenceEventKind::SignalDelivered(routed));
            SignalOutcome::Delivered
        } else {
            debug!(%signal, index, "signal ignored by active beat");
            self.record(SequenceEventKind::SignalDropped(routed));
            SignalOutcome::Ignored
        }
    }

    /// Parses a wire event and offers it to the live beat.
    pub fn signal_event(&mut self, name: &str, payload: &serde_json::Value) -> SignalOutcome {
        self.signal(&Signal::from_event(name, payload))
    }

    /// Aborts the run.
    ///
    /// Finishes the live beat (so it releases what it created), clears the
    /// running state, and clears any labels left on screen. The completion
    /// callback is not fired. The runner can be started again immediately.
    pub fn stop(&mut self, ctx: &mut Context<'_>) {
        let was_running = self.running || self.active.is_some();
        if self.active.is_some() {
            self.finish_active(ctx, true);
        }
        self.running = false;
        ctx.presenter.clear_labels();

        if was_running {
            info!(index = self.current_index, "sequence stopped");
            self.record(SequenceEventKind::SequenceStopped(SequenceStopped {
                index: self.current_index,
            }));
        }
    }

    /// Whether a run is in progress.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Index of the live beat (equals [`len`](Self::len) once complete).
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of descriptors in the current (or last) run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.beats.len()
    }

    /// Whether the current (or last) run has no descriptors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }

    /// Kind of the live beat.
    #[must_use]
    pub fn active_kind(&self) -> Option<BeatKind> {
        self.active.as_ref().map(ActiveBeat::kind)
    }

    /// The signal the live beat is suspended on, if any.
    #[must_use]
    pub fn awaiting(&self) -> Option<Signal> {
        self.active.as_ref().and_then(|beat| beat.awaiting())
    }

    /// Identifier of the current (or last) run.
    #[must_use]
    pub fn run_id(&self) -> Option<Uuid> {
        self.run_id
    }

    fn advance_to_next(&mut self, ctx: &mut Context<'_>) {
        let Some(descriptor) = self.beats.get(self.current_index) else {
            self.running = false;
            info!(beat_count = self.beats.len(), "sequence completed");
            self.record(SequenceEventKind::SequenceCompleted(SequenceCompleted {
                beat_count: self.beats.len(),
            }));
            if let Some(on_complete) = self.on_complete.as_mut() {
                on_complete();
            }
            return;
        };

        let mut beat = ActiveBeat::from_descriptor(descriptor);
        let kind = beat.kind();
        beat.start(ctx);
        debug!(index = self.current_index, %kind, "beat started");
        self.active = Some(beat);
        self.record(SequenceEventKind::BeatStarted(BeatStarted {
            index: self.current_index,
            kind,
        }));
    }

    fn finish_active(&mut self, ctx: &mut Context<'_>, forced: bool) {
        let Some(mut beat) = self.active.take() else {
            return;
        };
        let kind = beat.kind();
        beat.finish(ctx);
        debug!(index = self.current_index, %kind, forced, "beat finished");
        self.record(SequenceEventKind::BeatFinished(BeatFinished {
            index: self.current_index,
            kind,
            forced,
        }));
    }

    fn record(&mut self, kind: SequenceEventKind) {
        let Some(run_id) = self.run_id else {
            return;
        };
        self.sequence_number += 1;
        let metadata = EntryMetadata {
            entry_id: Uuid::new_v4(),
            event_type: kind.event_type().to_owned(),
            run_id,
            sequence_number: self.sequence_number,
            elapsed: self.elapsed,
        };
        self.journal.append(kind.into_entry(metadata));
    }
}

impl Default for SequenceRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SequenceRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceRunner")
            .field("beats", &self.beats.len())
            .field("current_index", &self.current_index)
            .field("active", &self.active_kind())
            .field("running", &self.running)
            .field("run_id", &self.run_id)
            .finish_non_exhaustive()
    }
}
