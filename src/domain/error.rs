//! Domain error types

use thiserror::Error;

/// Errors that can occur in the Morse oracle
///
/// Every variant carries a message meant to be shown to a person as-is.
/// Unknown characters or Morse tokens are never errors; the codec renders
/// them as the unknown marker instead.
#[derive(Error, Debug)]
pub enum OracleError {
    #[error("Audio error: {0}")]
    Audio(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Session(String),
}

/// Result type alias for oracle operations
pub type OracleResult<T> = Result<T, OracleError>;
