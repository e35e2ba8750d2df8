//! `Machine` — the per-machine operations bound to one name.

use serde_json::{Map, Value};

use crate::application::ports::MachineCli;
use crate::application::services::machine::{self, EnvOptions, EnvOutput, RemoteCommand};
use crate::domain::MachineResult;

/// Name used when neither the caller nor `DOCKER_MACHINE_NAME` provides one.
pub const DEFAULT_MACHINE_NAME: &str = "default";

/// A machine handle: every method forwards to the matching function in
/// [`crate::application::services::machine`] with the bound name.
///
/// Listing and creation have no handle form; see
/// [`crate::application::services::list`] and [`machine::create`].
pub struct Machine<C> {
    cli: C,
    name: String,
}

impl<C: MachineCli> Machine<C> {
    #[must_use]
    pub fn new(cli: C, name: impl Into<String>) -> Self {
        Self {
            cli,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// See [`machine::status`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying operation's error.
    pub async fn status(&self) -> MachineResult<String> {
        machine::status(&self.cli, &self.name).await
    }

    /// See [`machine::is_running`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying operation's error.
    pub async fn is_running(&self) -> MachineResult<bool> {
        machine::is_running(&self.cli, &self.name).await
    }

    /// See [`machine::start`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying operation's error.
    pub async fn start(&self) -> MachineResult<()> {
        machine::start(&self.cli, &self.name).await
    }

    /// See [`machine::stop`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying operation's error.
    pub async fn stop(&self) -> MachineResult<()> {
        machine::stop(&self.cli, &self.name).await
    }

    /// See [`machine::kill`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying operation's error.
    pub async fn kill(&self) -> MachineResult<()> {
        machine::kill(&self.cli, &self.name).await
    }

    /// See [`machine::env`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying operation's error.
    pub async fn env(&self, options: &EnvOptions) -> MachineResult<EnvOutput> {
        machine::env(&self.cli, &self.name, options).await
    }

    /// See [`machine::ssh`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying operation's error.
    pub async fn ssh(&self, command: impl Into<RemoteCommand>) -> MachineResult<String> {
        machine::ssh(&self.cli, &self.name, command).await
    }

    /// See [`machine::inspect`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying operation's error.
    pub async fn inspect(&self) -> MachineResult<Map<String, Value>> {
        machine::inspect(&self.cli, &self.name).await
    }
}
