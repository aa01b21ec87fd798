//! Error types.

use thiserror::Error;

/// Errors raised while turning authored content into a runnable sequence.
///
/// The runner itself never fails; malformed beats degrade at load time.
#[derive(Debug, Error)]
pub enum SequenceError {
    /// The source text is not valid YAML/JSON, or its top level is not a beat list.
    #[error("sequence parse error: {0}")]
    Parse(String),

    /// The document decoded to nothing at all.
    #[error("sequence document is empty")]
    EmptyDocument,
}
