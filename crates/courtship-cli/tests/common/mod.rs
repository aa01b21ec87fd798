//! Shared helpers for playthrough integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use courtship_cli::config::CliConfig;
use courtship_cli::playthrough::{self, PlaythroughReport};

/// Absolute path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Fast, auto-answering configuration for a fixture.
pub fn config_for(name: &str) -> CliConfig {
    CliConfig {
        sequence_path: fixture_path(name),
        frame_rate: 30,
        max_frames: 3_000,
        auto_signal: true,
        realtime: false,
    }
}

/// Loads and plays a fixture with [`config_for`].
pub async fn play_fixture(name: &str) -> PlaythroughReport {
    playthrough::run(&config_for(name)).await.unwrap()
}

/// `event_type` of every journal entry in the report, in order.
pub fn event_types(report: &PlaythroughReport) -> Vec<&str> {
    report
        .journal
        .iter()
        .map(|entry| entry.metadata.event_type.as_str())
        .collect()
}
