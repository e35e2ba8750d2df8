//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::Output;

use anyhow::Result;

use crate::domain::MachineResult;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `program` with `args` in `cwd` and capture stdout and stderr.
    ///
    /// # Errors
    ///
    /// Returns an error only if the process cannot be spawned or awaited.
    /// A non-zero exit is reported through `Output::status`.
    async fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<Output>;
}

// ── Machine CLI Port ──────────────────────────────────────────────────────────

/// One `docker-machine` invocation: arguments in, stdout out.
///
/// Every service in [`crate::application::services`] is written against this
/// port. The production adapter is `infra::docker_machine::DockerMachine`.
#[allow(async_fn_in_trait)]
pub trait MachineCli {
    /// Run `docker-machine <args>` and return its stdout.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::MachineError::Process`] if the tool cannot be
    /// started or exits unsuccessfully.
    async fn command(&self, args: &[&str]) -> MachineResult<String>;
}

impl<T: MachineCli + ?Sized> MachineCli for &T {
    async fn command(&self, args: &[&str]) -> MachineResult<String> {
        (**self).command(args).await
    }
}
