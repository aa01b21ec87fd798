//! Playthrough configuration, read from the environment.

use std::path::PathBuf;

use crate::error::AppError;

/// Settings for one headless playthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Sequence file to play (YAML, or JSON by extension).
    pub sequence_path: PathBuf,
    /// Simulated frames per second.
    pub frame_rate: u16,
    /// Frame cap; a run still going after this many frames is reported as stalled.
    pub max_frames: u64,
    /// Answer suspend beats with the signal they wait for.
    pub auto_signal: bool,
    /// Pace frames in wall-clock time instead of as fast as possible.
    pub realtime: bool,
}

impl CliConfig {
    /// Default `FRAME_RATE`.
    pub const DEFAULT_FRAME_RATE: u16 = 60;
    /// Default `MAX_FRAMES`: ten minutes at 60 fps.
    pub const DEFAULT_MAX_FRAMES: u64 = 36_000;

    /// Reads the configuration from the process environment. The first
    /// command-line argument, if any, overrides `SEQUENCE_PATH`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if no sequence path is given or a value
    /// does not parse.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(std::env::args().nth(1), |key| std::env::var(key).ok())
    }

    /// Builds a configuration from an optional path argument and a variable
    /// lookup.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_lookup(
        path_arg: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let sequence_path = path_arg
            .or_else(|| lookup("SEQUENCE_PATH"))
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| {
                AppError::Config(
                    "SEQUENCE_PATH environment variable or a path argument must be set".into(),
                )
            })?;

        let frame_rate: u16 = match lookup("FRAME_RATE") {
            Some(raw) => raw
                .trim()
                .parse()
                .ok()
                .filter(|rate| *rate > 0)
                .ok_or_else(|| {
                    AppError::Config(format!("FRAME_RATE must be a positive integer, got {raw:?}"))
                })?,
            None => Self::DEFAULT_FRAME_RATE,
        };

        let max_frames: u64 = match lookup("MAX_FRAMES") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("MAX_FRAMES must be a valid u64: {e}")))?,
            None => Self::DEFAULT_MAX_FRAMES,
        };

        let auto_signal = match lookup("AUTO_SIGNAL") {
            Some(raw) => parse_flag("AUTO_SIGNAL", &raw)?,
            None => true,
        };

        let realtime = match lookup("REALTIME") {
            Some(raw) => parse_flag("REALTIME", &raw)?,
            None => false,
        };

        Ok(Self {
            sequence_path,
            frame_rate,
            max_frames,
            auto_signal,
            realtime,
        })
    }

    /// Seconds per simulated frame.
    #[must_use]
    pub fn frame_delta(&self) -> f32 {
        1.0 / f32::from(self.frame_rate)
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::Config(format!(
            "{key} must be true or false, got {raw:?}"
        ))),
    }
}
