//! Parsing of `veeamconfig` output
//!
//! Only two facts are ever read from the tool: the session identifier printed
//! by `job start`, and the state printed by `session info`. Each is a single
//! pattern with one capture; nothing else in the output is interpreted.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{error, info, warn};

use crate::error::{VeeamrunError, VeeamrunResult};

lazy_static! {
    static ref SESSION_ID_PATTERN: Regex = Regex::new(r"Session ID: \[\{(.+)\}\]").unwrap();
    static ref STATE_PATTERN: Regex = Regex::new(r"State: (.+)").unwrap();
}

/// State of a backup session as reported by `veeamconfig session info`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// The job is still running
    Running,
    /// The job finished and failed
    Failed,
    /// The state line was missing from the tool's output
    Unknown,
    /// Any other state reported by the tool (`Success`, `Warning`, ...)
    Other(String),
}

impl SessionState {
    pub fn is_running(&self) -> bool {
        matches!(self, SessionState::Running)
    }

    /// Only an explicit `Failed` counts as a failed backup.
    ///
    /// `Unknown` is not a failure: an unreadable state ends the wait and is
    /// reported as a success.
    pub fn is_failure(&self) -> bool {
        matches!(self, SessionState::Failed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            SessionState::Running => "Running",
            SessionState::Failed => "Failed",
            SessionState::Unknown => "Unknown",
            SessionState::Other(state) => state,
        }
    }
}

impl From<&str> for SessionState {
    fn from(state: &str) -> Self {
        match state {
            "Running" => SessionState::Running,
            "Failed" => SessionState::Failed,
            "Unknown" => SessionState::Unknown,
            other => SessionState::Other(other.to_string()),
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract the session identifier from `veeamconfig job start` output
pub fn parse_session_id(output: &str) -> VeeamrunResult<String> {
    match SESSION_ID_PATTERN.captures(output) {
        Some(captures) => {
            let session_id = captures[1].to_string();
            info!("Found job ID: {}", session_id);
            Ok(session_id)
        }
        None => {
            error!("Could not find job ID in the output : {}", output);
            Err(VeeamrunError::SessionIdNotFound {
                output: output.to_string(),
            })
        }
    }
}

/// Extract the raw state text from `veeamconfig session info` output
pub fn parse_state(output: &str) -> Option<&str> {
    STATE_PATTERN
        .captures(output)
        .and_then(|captures| captures.get(1))
        .map(|state| state.as_str())
}

/// Read the session state, falling back to `Unknown` when it cannot be parsed
pub fn session_state(session_id: &str, output: &str) -> SessionState {
    match parse_state(output) {
        Some(state) => {
            info!("Job ID {} status is {}", session_id, state);
            SessionState::from(state)
        }
        None => {
            warn!(
                "Could not find job ID {} status in output {:?}",
                session_id, output
            );
            SessionState::Unknown
        }
    }
}
