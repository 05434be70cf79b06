//! Error types for Boardflow.
//!
//! All errors in Boardflow are represented by the `BoardflowError` enum,
//! which provides specific variants for different error categories.

use std::io::ErrorKind;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all Boardflow operations.
///
/// Each variant represents a specific category of error that can occur
/// during workflow definition, configuration, or storage operations.
/// Structural validation problems are deliberately not represented here:
/// they are advisory and surfaced through [`crate::ValidationReport`].
#[derive(Deserialize, Serialize, Error, Debug, Clone, PartialEq)]
pub enum BoardflowError {
    /// Engine-level errors (startup, backend wiring).
    #[error("{0}")]
    Engine(String),

    /// Configuration parsing or validation errors.
    #[error("{0}")]
    Config(String),

    /// Data conversion errors (JSON, TOML).
    #[error("{0}")]
    Convert(String),

    /// Storage operation errors.
    #[error("{0}")]
    Store(String),

    /// Workflow definition errors.
    #[error("{0}")]
    Workflow(String),

    /// Node definition errors.
    #[error("{0}")]
    Node(String),

    /// Connection definition errors.
    #[error("{0}")]
    Connection(String),

    /// I/O operation errors.
    #[error("{0}")]
    IoError(String),
}

impl From<BoardflowError> for String {
    fn from(val: BoardflowError) -> Self {
        val.to_string()
    }
}

impl From<std::io::Error> for BoardflowError {
    fn from(error: std::io::Error) -> Self {
        BoardflowError::IoError(error.to_string())
    }
}

impl From<BoardflowError> for std::io::Error {
    fn from(val: BoardflowError) -> Self {
        #[allow(clippy::io_other_error)]
        std::io::Error::new(ErrorKind::Other, val.to_string())
    }
}

impl From<serde_json::Error> for BoardflowError {
    fn from(error: serde_json::Error) -> Self {
        BoardflowError::Convert(error.to_string())
    }
}
