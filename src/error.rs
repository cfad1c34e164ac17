//! Custom error types for veeamrun
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for veeamrun operations
#[derive(Error, Debug)]
pub enum VeeamrunError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Logger setup errors
    #[error("Logging error: {0}")]
    Log(String),

    /// An external program could not be started
    #[error("Failed to run {program}: {reason}")]
    Spawn { program: String, reason: String },

    /// The backup tool did not report a session for the started job
    #[error("Could not find job ID in the output : {output}")]
    SessionIdNotFound { output: String },

    /// Notification delivery errors
    #[error("Mail error: {0}")]
    Mail(String),
}

impl VeeamrunError {
    /// Create a spawn error for the given program
    pub fn spawn(program: impl Into<String>, reason: impl ToString) -> Self {
        Self::Spawn {
            program: program.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if this is a missing session identifier error
    pub fn is_session_id_not_found(&self) -> bool {
        matches!(self, Self::SessionIdNotFound { .. })
    }
}

impl From<std::io::Error> for VeeamrunError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for VeeamrunError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for veeamrun operations
pub type VeeamrunResult<T> = Result<T, VeeamrunError>;
