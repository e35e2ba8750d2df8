//! Application context — unified state passed to every command handler.
//!
//! Holds the output context, the rendering mode, the environment
//! configuration, and the `docker-machine` adapter built from it.

use anyhow::Result;

use crate::application::handle::Machine;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::MachineConfig;
use crate::infra::docker_machine::DockerMachine;
use crate::output::OutputContext;

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags passed from the top-level CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Settings read from the environment at startup.
    pub config: MachineConfig,
    /// The `docker-machine` adapter.
    pub cli: DockerMachine<TokioCommandRunner>,
}

impl AppContext {
    /// Construct an `AppContext` from CLI flags and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment configuration cannot be read.
    pub fn new(flags: OutputFlags) -> Result<Self> {
        Ok(Self::with_config(flags, MachineConfig::from_env()?))
    }

    /// Construct an `AppContext` with an explicit configuration.
    #[must_use]
    pub fn with_config(flags: OutputFlags, config: MachineConfig) -> Self {
        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            mode,
            cli: DockerMachine::with_config(&config),
            config,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Resolve the target machine name: the explicit one, else the configured
    /// default.
    #[must_use]
    pub fn machine_name(&self, name: Option<&str>) -> String {
        name.filter(|n| !n.is_empty())
            .unwrap_or_else(|| self.config.machine_name())
            .to_string()
    }

    /// A handle on the named (or default) machine.
    #[must_use]
    pub fn machine(&self, name: Option<&str>) -> Machine<&DockerMachine<TokioCommandRunner>> {
        Machine::new(&self.cli, self.machine_name(name))
    }
}
