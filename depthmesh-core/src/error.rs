//! Error types for depthmesh

use std::time::Duration;
use thiserror::Error;

/// Main error type for depthmesh operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Frame size mismatch: expected {}x{}, got {}x{}", expected.0, expected.1, actual.0, actual.1)]
    FrameSizeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Timed out after {0:?} waiting for a depth frame")]
    Timeout(Duration),

    #[error("Depth source disconnected: {0}")]
    Disconnected(String),
}

impl Error {
    /// Whether the frame loop can keep going after this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::Disconnected(_) | Error::Io(_))
    }
}

/// Result type alias for depthmesh operations
pub type Result<T> = std::result::Result<T, Error>;
