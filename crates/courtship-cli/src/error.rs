//! Courtship playthrough error types.

use courtship_core::error::SequenceError;
use thiserror::Error;

/// Startup and runtime errors for the playthrough binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading the sequence file or writing the report failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The sequence file could not be loaded.
    #[error("sequence error: {0}")]
    Sequence(#[from] SequenceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = AppError::Config("FRAME_RATE must be a positive integer".into());
        assert_eq!(
            err.to_string(),
            "configuration error: FRAME_RATE must be a positive integer"
        );
    }

    #[test]
    fn test_sequence_error_converts_with_question_mark() {
        fn load() -> Result<(), AppError> {
            let parsed: Result<(), SequenceError> = Err(SequenceError::EmptyDocument);
            parsed?;
            Ok(())
        }

        let err = load().unwrap_err();

        assert!(matches!(err, AppError::Sequence(SequenceError::EmptyDocument)));
        assert!(err.to_string().starts_with("sequence error: "));
    }

    #[test]
    fn test_io_error_converts() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, AppError::Io(_)));
    }
}
