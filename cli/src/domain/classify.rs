//! Classification of `docker-machine` failures by their error text.
//!
//! The tool reports "host does not exist" and "already running/stopped"
//! conditions only through its exit status and message, so lifecycle
//! operations match on the rendered error.

use super::error::MachineError;

/// What a failed lifecycle call actually means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The named host is unknown to `docker-machine`.
    HostNotFound,
    /// The machine is already in the requested state; treated as success.
    AlreadyInState,
    /// Anything else; passed through unchanged.
    Other,
}

/// The "already in state" marker a lifecycle operation tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlreadyPattern {
    /// `start`: matched case-insensitively.
    Running,
    /// `stop` and `kill`: matched case-sensitively.
    Stopped,
}

impl AlreadyPattern {
    fn matches(self, text: &str) -> bool {
        match self {
            Self::Running => text.to_lowercase().contains("already running"),
            Self::Stopped => text.contains("already stopped"),
        }
    }
}

/// Classify an error returned by a lifecycle command.
///
/// Only process failures carry tool output; every other variant is `Other`.
#[must_use]
pub fn classify(err: &MachineError, already: AlreadyPattern) -> ErrorClass {
    let MachineError::Process(process) = err else {
        return ErrorClass::Other;
    };
    let text = process.to_string();
    if text.to_lowercase().contains("host does not exist") {
        ErrorClass::HostNotFound
    } else if already.matches(&text) {
        ErrorClass::AlreadyInState
    } else {
        ErrorClass::Other
    }
}
