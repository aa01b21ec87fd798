//! Integration tests for headless playthroughs.

mod common;

use std::cell::Cell;
use std::rc::Rc;

use courtship_cli::error::AppError;
use courtship_cli::headless::HeadlessWorld;
use courtship_cli::playthrough::{self, Outcome};
use courtship_core::error::SequenceError;
use courtship_core::host::GameState;
use courtship_sequencer::application::loader::{DiagnosticKind, SequenceScript};
use courtship_sequencer::domain::descriptors::BeatKind;

#[tokio::test]
async fn test_full_date_plays_to_completion_with_auto_signals() {
    let report = common::play_fixture("first_date.yaml").await;

    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(report.name.as_deref(), Some("first-date"));
    assert_eq!(report.beat_count, 12);
    assert_eq!(report.reached_index, 12);
    assert_eq!(
        report.signals_sent,
        vec![
            "choice_made",
            "interaction",
            "key_E",
            "interaction",
            "story_continue"
        ]
    );
    assert_eq!(report.panels, vec!["choice", "story"]);
    assert_eq!(report.phases, vec!["cafe"]);
    assert_eq!(report.labels_created, 2);
    assert_eq!(report.sprites_spawned, 1);
    assert!(report.diagnostics.is_empty());
}

#[tokio::test]
async fn test_journal_brackets_every_beat() {
    let report = common::play_fixture("first_date.yaml").await;
    let types = common::event_types(&report);

    assert_eq!(types.first(), Some(&"sequence.started"));
    assert_eq!(types.last(), Some(&"sequence.completed"));
    let started = types.iter().filter(|t| **t == "sequence.beat_started").count();
    let finished = types.iter().filter(|t| **t == "sequence.beat_finished").count();
    assert_eq!(started, 12);
    assert_eq!(finished, 12);
    let numbers: Vec<u64> = report
        .journal
        .iter()
        .map(|entry| entry.metadata.sequence_number)
        .collect();
    assert!(numbers.windows(2).all(|pair| pair[1] == pair[0] + 1));
}

#[tokio::test]
async fn test_unknown_beat_is_replaced_and_run_completes() {
    let report = common::play_fixture("unknown_beat.yaml").await;

    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(report.frames, 2);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].kind, DiagnosticKind::UnknownType);
    assert_eq!(report.diagnostics[0].tag.as_deref(), Some("bogus"));
}

#[tokio::test]
async fn test_proximity_free_roam_stalls_at_frame_cap() {
    let mut config = common::config_for("proximity_stall.yaml");
    config.max_frames = 90;

    let report = playthrough::run(&config).await.unwrap();

    assert_eq!(report.outcome, Outcome::Stalled);
    assert_eq!(report.stalled_on, Some(BeatKind::FreeRoam));
    assert_eq!(report.frames, 90);
    assert_eq!(report.reached_index, 0);
    assert_eq!(
        common::event_types(&report).last(),
        Some(&"sequence.stopped")
    );
}

#[tokio::test]
async fn test_missing_callback_still_holds_and_continues() {
    let report = common::play_fixture("missing_callback.json").await;

    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(report.name.as_deref(), Some("callback-fallback"));
    assert_eq!(report.labels_created, 1);
}

#[tokio::test]
async fn test_registered_callback_runs_against_headless_world() {
    // Arrange
    let script = SequenceScript::load(&common::fixture_path("missing_callback.json")).unwrap();
    let mut world = HeadlessWorld::new();
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    world
        .level
        .callbacks_mut()
        .register("spawnFireworks", move |ctx| {
            seen.set(seen.get() + 1);
            ctx.host.set_game_state(GameState::FreeRoam);
        });

    // Act
    let report = playthrough::play(script, &mut world, &common::config_for("unused")).await;

    // Assert
    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(calls.get(), 1);
    assert_eq!(world.host.state(), GameState::FreeRoam);
    assert!(world.presenter.visible_labels().is_empty());
}

#[tokio::test]
async fn test_missing_file_is_sequence_error() {
    let config = common::config_for("does_not_exist.yaml");

    let result = playthrough::run(&config).await;

    assert!(matches!(
        result,
        Err(AppError::Sequence(SequenceError::Parse(_)))
    ));
}
