//! Headless playthrough: drives a loaded sequence frame by frame against a
//! [`HeadlessWorld`] and summarizes what happened.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use courtship_core::journal::{Journal, JournalEntry};
use courtship_sequencer::application::loader::{Diagnostic, SequenceScript};
use courtship_sequencer::application::runner::{SequenceRunner, SignalOutcome};
use courtship_sequencer::domain::descriptors::BeatKind;
use serde::Serialize;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::error::AppError;
use crate::headless::HeadlessWorld;

/// Keeps every journal entry of the playthrough for the report.
#[derive(Debug, Default)]
pub struct TranscriptJournal {
    entries: RefCell<Vec<JournalEntry>>,
}

impl TranscriptJournal {
    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<JournalEntry> {
        self.entries.take()
    }
}

impl Journal for TranscriptJournal {
    fn append(&self, entry: JournalEntry) {
        self.entries.borrow_mut().push(entry);
    }
}

/// How a playthrough ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The last beat finished.
    Completed,
    /// The frame cap was reached with a beat still live; the run was stopped.
    Stalled,
}

/// Summary printed after a playthrough.
#[derive(Debug, Clone, Serialize)]
pub struct PlaythroughReport {
    /// Script name, if the document had one.
    pub name: Option<String>,
    /// SHA-256 of the script source.
    pub digest: String,
    /// How the run ended.
    pub outcome: Outcome,
    /// Beats in the script.
    pub beat_count: usize,
    /// Index of the beat live at the end (equals `beat_count` on completion).
    pub reached_index: usize,
    /// Kind of the beat that was live when the run stalled.
    pub stalled_on: Option<BeatKind>,
    /// Frames simulated.
    pub frames: u64,
    /// Seconds simulated.
    pub simulated_seconds: f32,
    /// Signals sent on behalf of the player, in order.
    pub signals_sent: Vec<String>,
    /// Beats replaced by zero-length waits at load time.
    pub diagnostics: Vec<Diagnostic>,
    /// Labels created over the run.
    pub labels_created: usize,
    /// Sprites created over the run.
    pub sprites_spawned: usize,
    /// Phases entered, in order.
    pub phases: Vec<String>,
    /// Panels opened, in order.
    pub panels: Vec<String>,
    /// Every lifecycle entry the runner recorded.
    pub journal: Vec<JournalEntry>,
}

impl PlaythroughReport {
    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if serialization fails.
    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self).map_err(|e| AppError::Io(e.into()))
    }
}

/// Loads the configured sequence and plays it in a fresh world.
///
/// # Errors
///
/// Returns `AppError::Sequence` if the file cannot be read or parsed.
pub async fn run(config: &CliConfig) -> Result<PlaythroughReport, AppError> {
    let script = SequenceScript::load(&config.sequence_path)?;
    let mut world = HeadlessWorld::new();
    Ok(play(script, &mut world, config).await)
}

/// Plays `script` in `world` until it completes or hits the frame cap.
///
/// With `auto_signal` on, a beat suspended on a signal receives it before
/// the next frame, as if the player answered immediately. Beats that wait on
/// something other than a signal (proximity free roam) are left alone.
pub async fn play(
    script: SequenceScript,
    world: &mut HeadlessWorld,
    config: &CliConfig,
) -> PlaythroughReport {
    let journal = Rc::new(TranscriptJournal::default());
    let mut runner = SequenceRunner::with_journal(journal.clone());
    let SequenceScript {
        name,
        descriptors,
        diagnostics,
        digest,
    } = script;

    let dt = config.frame_delta();
    let mut ticker = config.realtime.then(|| {
        let mut interval = tokio::time::interval(Duration::from_secs_f32(dt));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval
    });

    info!(
        name = name.as_deref().unwrap_or("<unnamed>"),
        frame_rate = config.frame_rate,
        auto_signal = config.auto_signal,
        "playthrough starting"
    );
    runner.start(descriptors, &mut world.ctx());

    let mut frames: u64 = 0;
    let mut simulated_seconds = 0.0_f32;
    let mut signals_sent = Vec::new();
    while runner.is_running() && frames < config.max_frames {
        if let Some(ticker) = ticker.as_mut() {
            ticker.tick().await;
        }

        if config.auto_signal
            && let Some(signal) = runner.awaiting()
            && runner.signal(&signal) == SignalOutcome::Delivered
        {
            signals_sent.push(signal.event_name());
        }

        runner.update(dt, &mut world.ctx());
        frames += 1;
        simulated_seconds += dt;
    }

    let (outcome, stalled_on) = if runner.is_running() {
        let kind = runner.active_kind();
        warn!(
            frames,
            index = runner.current_index(),
            kind = ?kind,
            "frame cap reached, stopping sequence"
        );
        runner.stop(&mut world.ctx());
        (Outcome::Stalled, kind)
    } else {
        (Outcome::Completed, None)
    };

    info!(?outcome, frames, simulated_seconds, "playthrough finished");

    PlaythroughReport {
        name,
        digest,
        outcome,
        beat_count: runner.len(),
        reached_index: runner.current_index(),
        stalled_on,
        frames,
        simulated_seconds,
        signals_sent,
        diagnostics,
        labels_created: world.presenter.labels_created(),
        sprites_spawned: world.stage.sprites_spawned(),
        phases: world.level.phase_history().to_vec(),
        panels: world
            .host
            .panels_opened()
            .iter()
            .map(|panel| (*panel).to_owned())
            .collect(),
        journal: journal.take(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use courtship_sequencer::application::loader::SourceFormat;

    use super::*;

    fn config(max_frames: u64, auto_signal: bool) -> CliConfig {
        CliConfig {
            sequence_path: PathBuf::from("inline.yaml"),
            frame_rate: 10,
            max_frames,
            auto_signal,
            realtime: false,
        }
    }

    fn script(source: &str) -> SequenceScript {
        SequenceScript::parse(source, SourceFormat::Yaml).unwrap()
    }

    #[tokio::test]
    async fn test_auto_signal_answers_choice_panel() {
        // Arrange
        let script = script("
- type: show_choice
- type: wait
  duration: 0.15
");
        let mut world = HeadlessWorld::new();

        // Act
        let report = play(script, &mut world, &config(100, true)).await;

        // Assert
        assert_eq!(report.outcome, Outcome::Completed);
        assert_eq!(report.signals_sent, vec!["choice_made".to_owned()]);
        assert_eq!(report.panels, vec!["choice".to_owned()]);
        assert_eq!(report.reached_index, 2);
        assert_eq!(report.frames, 3);
    }

    #[tokio::test]
    async fn test_without_auto_signal_run_stalls_and_is_stopped() {
        let script = script("- type: show_story\n");
        let mut world = HeadlessWorld::new();

        let report = play(script, &mut world, &config(5, false)).await;

        assert_eq!(report.outcome, Outcome::Stalled);
        assert_eq!(report.stalled_on, Some(BeatKind::ShowStory));
        assert_eq!(report.frames, 5);
        assert!(report.signals_sent.is_empty());
        let last = report.journal.last().unwrap();
        assert_eq!(last.metadata.event_type, "sequence.stopped");
    }

    #[tokio::test]
    async fn test_report_serializes_to_json() {
        let script = script("{ name: intro, beats: [{ type: wait, duration: 0 }] }");
        let mut world = HeadlessWorld::new();

        let report = play(script, &mut world, &config(10, true)).await;
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["name"], "intro");
        assert_eq!(json["outcome"], "completed");
        assert_eq!(json["beat_count"], 1);
        assert_eq!(json["journal"][0]["metadata"]["event_type"], "sequence.started");
    }
}
