//! Per-machine operations: status, create, start, stop, kill, env, ssh, inspect.
//!
//! Each function builds the `docker-machine` argument list, runs it through
//! a [`MachineCli`] and interprets the output. Invalid input is rejected
//! before anything is spawned.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::application::ports::MachineCli;
use crate::domain::create::create_args;
use crate::domain::env::parse_exports;
use crate::domain::keys::normalize_keys;
use crate::domain::{AlreadyPattern, ErrorClass, MachineError, MachineResult, classify};

/// Get the machine state, trimmed and lowercased (e.g. `running`).
///
/// # Errors
///
/// Returns the process error if `docker-machine status` fails.
pub async fn status(cli: &impl MachineCli, name: &str) -> MachineResult<String> {
    let stdout = cli.command(&["status", name]).await?;
    Ok(stdout.trim().to_lowercase())
}

/// `true` when [`status`] reports `running`.
///
/// # Errors
///
/// Returns the process error if `docker-machine status` fails.
pub async fn is_running(cli: &impl MachineCli, name: &str) -> MachineResult<bool> {
    Ok(status(cli, name).await? == "running")
}

/// Create a machine with `driver` and driver-specific `options`.
///
/// Each option is passed as `--<key> <value>`. Returns the tool's stdout.
///
/// # Errors
///
/// Returns [`MachineError::Validation`] for an empty name or driver, or the
/// process error if `docker-machine create` fails.
pub async fn create(
    cli: &impl MachineCli,
    name: &str,
    driver: &str,
    options: &BTreeMap<String, String>,
) -> MachineResult<String> {
    let args = create_args(name, driver, options)?;
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    cli.command(&args).await
}

/// Start a machine. Starting a running machine is a no-op.
///
/// # Errors
///
/// Returns [`MachineError::HostNotFound`] for an unknown machine, or the
/// process error for any other failure.
pub async fn start(cli: &impl MachineCli, name: &str) -> MachineResult<()> {
    transition(cli, "start", name, AlreadyPattern::Running).await
}

/// Stop a machine gracefully. Stopping a stopped machine is a no-op.
///
/// # Errors
///
/// Returns [`MachineError::HostNotFound`] for an unknown machine, or the
/// process error for any other failure.
pub async fn stop(cli: &impl MachineCli, name: &str) -> MachineResult<()> {
    transition(cli, "stop", name, AlreadyPattern::Stopped).await
}

/// Force-stop a machine. Killing a stopped machine is a no-op.
///
/// # Errors
///
/// Returns [`MachineError::HostNotFound`] for an unknown machine, or the
/// process error for any other failure.
pub async fn kill(cli: &impl MachineCli, name: &str) -> MachineResult<()> {
    transition(cli, "kill", name, AlreadyPattern::Stopped).await
}

async fn transition(
    cli: &impl MachineCli,
    operation: &str,
    name: &str,
    already: AlreadyPattern,
) -> MachineResult<()> {
    let Err(err) = cli.command(&[operation, name]).await else {
        return Ok(());
    };
    match classify(&err, already) {
        ErrorClass::HostNotFound => Err(MachineError::HostNotFound(name.to_string())),
        ErrorClass::AlreadyInState => {
            tracing::debug!(machine = name, operation, "machine already in requested state");
            Ok(())
        }
        ErrorClass::Other => Err(err),
    }
}

/// Options for [`env`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOptions {
    /// Shell dialect passed as `--shell`. Ignored when `parse` is set.
    pub shell: Option<String>,
    /// Request bash output and parse it into variables.
    pub parse: bool,
}

/// Result of [`env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvOutput {
    /// The trimmed shell script, as printed by the tool.
    Script(String),
    /// Variables parsed from `export KEY="VALUE"` lines.
    Variables(BTreeMap<String, String>),
}

/// Get the environment needed to point a docker client at the machine.
///
/// # Errors
///
/// Returns the process error if `docker-machine env` fails.
pub async fn env(
    cli: &impl MachineCli,
    name: &str,
    options: &EnvOptions,
) -> MachineResult<EnvOutput> {
    let shell = if options.parse {
        Some("bash")
    } else {
        options.shell.as_deref().filter(|s| !s.is_empty())
    };

    let mut args = vec!["env"];
    if let Some(shell) = shell {
        args.extend(["--shell", shell]);
    }
    args.push(name);

    let stdout = cli.command(&args).await?;
    if options.parse {
        Ok(EnvOutput::Variables(parse_exports(&stdout)))
    } else {
        Ok(EnvOutput::Script(stdout.trim().to_string()))
    }
}

/// A command to run on the machine over `docker-machine ssh`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCommand {
    /// A single command line.
    Line(String),
    /// Tokens joined with single spaces.
    Tokens(Vec<String>),
}

impl RemoteCommand {
    /// The trimmed command line.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::Validation`] if nothing is left after trimming.
    pub fn render(&self) -> MachineResult<String> {
        let line = match self {
            Self::Line(line) => line.trim().to_string(),
            Self::Tokens(tokens) => tokens.join(" ").trim().to_string(),
        };
        if line.is_empty() {
            return Err(MachineError::validation("command may not be empty"));
        }
        Ok(line)
    }
}

impl From<&str> for RemoteCommand {
    fn from(line: &str) -> Self {
        Self::Line(line.to_string())
    }
}

impl From<String> for RemoteCommand {
    fn from(line: String) -> Self {
        Self::Line(line)
    }
}

impl From<Vec<String>> for RemoteCommand {
    fn from(tokens: Vec<String>) -> Self {
        Self::Tokens(tokens)
    }
}

impl From<&[&str]> for RemoteCommand {
    fn from(tokens: &[&str]) -> Self {
        Self::Tokens(tokens.iter().map(ToString::to_string).collect())
    }
}

/// Run `command` on the machine and return its output untrimmed.
///
/// # Errors
///
/// Returns [`MachineError::Validation`] for an empty command, or the
/// process error if `docker-machine ssh` fails.
pub async fn ssh(
    cli: &impl MachineCli,
    name: &str,
    command: impl Into<RemoteCommand>,
) -> MachineResult<String> {
    let line = command.into().render()?;
    cli.command(&["ssh", name, &line]).await
}

/// Get the full machine metadata with every key in camelCase.
///
/// # Errors
///
/// Returns the process error if `docker-machine inspect` fails, or
/// [`MachineError::Parse`] if its output is not a JSON object.
pub async fn inspect(cli: &impl MachineCli, name: &str) -> MachineResult<Map<String, Value>> {
    let stdout = cli.command(&["inspect", name]).await?;
    let raw: Value = serde_json::from_str(stdout.trim())
        .map_err(|e| MachineError::parse("inspect output", e))?;
    match normalize_keys(raw) {
        Value::Object(map) => Ok(map),
        other => Err(MachineError::parse(
            "inspect output",
            format!("expected a JSON object, got {other}"),
        )),
    }
}
