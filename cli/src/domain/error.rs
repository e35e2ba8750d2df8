//! Typed errors for every machine operation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or `std::process`. The binary converts
//! these into `anyhow::Error` via the `?` operator.

use thiserror::Error;

/// Failure of the `docker-machine` subprocess itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    /// The executable could not be started (not on `PATH`, bad working dir, ...).
    #[error("{0}")]
    Spawn(String),

    /// The executable ran and exited unsuccessfully.
    ///
    /// `message` is the trimmed stderr, or the trimmed stdout when stderr was
    /// empty. `stdout` keeps whatever partial output the tool produced.
    #[error("docker-machine {command} failed ({}): {message}", exit_label(.code))]
    Exit {
        command: String,
        code: Option<i32>,
        message: String,
        stdout: String,
    },
}

#[allow(clippy::ref_option)]
fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// Errors returned by machine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error("Docker host \"{0}\" does not exist")]
    HostNotFound(String),

    /// Invalid caller input, detected before any subprocess is spawned.
    #[error("{0}")]
    Validation(String),

    #[error("cannot parse {what}: {reason}")]
    Parse { what: &'static str, reason: String },
}

impl MachineError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn parse(what: &'static str, reason: impl ToString) -> Self {
        Self::Parse {
            what,
            reason: reason.to_string(),
        }
    }

    /// Short machine-readable code used by `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Process(_) => "process_error",
            Self::HostNotFound(_) => "host_not_found",
            Self::Validation(_) => "validation_error",
            Self::Parse { .. } => "parse_error",
        }
    }
}

/// Result alias for machine operations.
pub type MachineResult<T> = Result<T, MachineError>;
