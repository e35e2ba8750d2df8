//! Environment configuration for `docker-machine` invocations.
//!
//! Loaded once via `envy`; never written back.
//!   - `DOCKER_MACHINE_NAME`          default machine name (fallback `default`)
//!   - `DOCKER_TOOLBOX_INSTALL_PATH`  working directory for the tool (fallback `.`)
//!
//! Empty values are treated as unset.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::application::handle::DEFAULT_MACHINE_NAME;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MachineConfig {
    /// Machine targeted when a command is given no name.
    #[serde(default)]
    pub docker_machine_name: Option<String>,

    /// Docker Toolbox install directory; `docker-machine` runs from here.
    #[serde(default)]
    pub docker_toolbox_install_path: Option<String>,
}

impl MachineConfig {
    /// Read the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be deserialized.
    pub fn from_env() -> Result<Self> {
        envy::from_env().context("failed to load docker-machine settings from environment")
    }

    /// Read from an explicit set of variables instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be deserialized.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars).context("failed to load docker-machine settings")
    }

    /// `DOCKER_MACHINE_NAME` if set and non-empty, otherwise `default`.
    #[must_use]
    pub fn machine_name(&self) -> &str {
        non_empty(self.docker_machine_name.as_deref()).unwrap_or(DEFAULT_MACHINE_NAME)
    }

    /// `DOCKER_TOOLBOX_INSTALL_PATH` if set and non-empty, otherwise `.`.
    #[must_use]
    pub fn working_dir(&self) -> PathBuf {
        PathBuf::from(non_empty(self.docker_toolbox_install_path.as_deref()).unwrap_or("."))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
