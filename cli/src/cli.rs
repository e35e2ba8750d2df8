//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, OutputFlags};
use crate::commands;
use crate::commands::lifecycle::{MachineArgs, Transition};
use crate::domain::MachineError;
use crate::output::json::format_error;

/// Drive docker-machine hosts
#[derive(Parser)]
#[command(
    name = "machine",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List machines
    Ls(commands::ls::LsArgs),

    /// Show a machine's state
    Status(MachineArgs),

    /// Start a machine
    Start(MachineArgs),

    /// Stop a machine
    Stop(MachineArgs),

    /// Kill a machine
    Kill(MachineArgs),

    /// Create a machine
    Create(commands::create::CreateArgs),

    /// Show the docker client environment for a machine
    Env(commands::env::EnvArgs),

    /// Run a command on a machine
    Ssh(commands::ssh::SshArgs),

    /// Show a machine's details as JSON
    Inspect(commands::inspect::InspectArgs),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// In JSON mode a failure is also printed to stdout as an error object.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read or the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            command,
        } = self;
        let app = AppContext::new(OutputFlags {
            no_color,
            quiet,
            json,
        })?;

        let result = dispatch(&app, command).await;
        if app.is_json() {
            if let Err(e) = &result {
                println!("{}", format_error(&format!("{e:#}"), error_code(e))?);
            }
        }
        result
    }
}

async fn dispatch(app: &AppContext, command: Command) -> Result<()> {
    match command {
        Command::Ls(args) => commands::ls::run(app, &args).await,
        Command::Status(args) => commands::lifecycle::status(app, &args).await,
        Command::Start(args) => commands::lifecycle::transition(app, &args, Transition::Start).await,
        Command::Stop(args) => commands::lifecycle::transition(app, &args, Transition::Stop).await,
        Command::Kill(args) => commands::lifecycle::transition(app, &args, Transition::Kill).await,
        Command::Create(args) => commands::create::run(app, &args).await,
        Command::Env(args) => commands::env::run(app, &args).await,
        Command::Ssh(args) => commands::ssh::run(app, &args).await,
        Command::Inspect(args) => commands::inspect::run(app, &args).await,
    }
}

/// Stable code for the JSON error object.
#[must_use]
pub fn error_code(error: &anyhow::Error) -> &'static str {
    error
        .downcast_ref::<MachineError>()
        .map_or("error", MachineError::code)
}
