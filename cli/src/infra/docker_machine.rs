//! Infrastructure implementation of the `MachineCli` port.
//!
//! `DockerMachine<R>` routes every `docker-machine` call through a
//! `CommandRunner`, running in the configured working directory and turning
//! spawn failures and non-zero exits into `ProcessError`.

use std::path::{Path, PathBuf};

use crate::application::ports::{CommandRunner, MachineCli};
use crate::domain::{MachineResult, ProcessError};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::MachineConfig;

/// The external executable. Resolved through `PATH`.
pub const DOCKER_MACHINE: &str = "docker-machine";

/// Infrastructure adapter for the `docker-machine` binary.
///
/// Generic over `R: CommandRunner` so that tests can inject a mock runner
/// without spawning real processes.
pub struct DockerMachine<R: CommandRunner> {
    runner: R,
    cwd: PathBuf,
}

impl<R: CommandRunner> DockerMachine<R> {
    /// Create an adapter that runs the tool from `config`'s working directory.
    pub fn new(runner: R, config: &MachineConfig) -> Self {
        Self {
            runner,
            cwd: config.working_dir(),
        }
    }

    #[must_use]
    pub fn working_dir(&self) -> &Path {
        &self.cwd
    }
}

impl DockerMachine<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn with_config(config: &MachineConfig) -> Self {
        Self::new(TokioCommandRunner, config)
    }
}

impl<R: CommandRunner> MachineCli for DockerMachine<R> {
    async fn command(&self, args: &[&str]) -> MachineResult<String> {
        let operation = args.first().copied().unwrap_or_default();
        tracing::debug!(operation, ?args, cwd = %self.cwd.display(), "running docker-machine");

        let output = self
            .runner
            .run(DOCKER_MACHINE, args, &self.cwd)
            .await
            .map_err(|e| ProcessError::Spawn(format!("{e:#}")))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if output.status.success() {
            return Ok(stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = if stderr.trim().is_empty() {
            stdout.trim().to_string()
        } else {
            stderr.trim().to_string()
        };
        tracing::debug!(operation, code = ?output.status.code(), %message, "docker-machine failed");
        Err(ProcessError::Exit {
            command: operation.to_string(),
            code: output.status.code(),
            message,
            stdout,
        }
        .into())
    }
}
