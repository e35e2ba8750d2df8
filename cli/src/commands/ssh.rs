//! `machine ssh` — run a command on a machine over SSH.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use crate::app::AppContext;
use crate::output::json::print_json;

/// Arguments for `machine ssh`.
#[derive(Args, Debug, Clone)]
pub struct SshArgs {
    /// Machine name (defaults to $DOCKER_MACHINE_NAME, then `default`)
    pub name: Option<String>,

    /// Start the machine first if it is not running
    #[arg(long)]
    pub start: bool,

    /// Command to run, after `--`
    #[arg(last = true, required = true, value_name = "CMD")]
    pub command: Vec<String>,
}

/// Run `machine ssh`.
///
/// # Errors
///
/// Returns an error if starting the machine or the remote command fails.
pub async fn run(app: &AppContext, args: &SshArgs) -> Result<()> {
    let machine = app.machine(args.name.as_deref());
    if args.start {
        machine.start().await?;
    }
    let output = machine.ssh(args.command.clone()).await?;

    if app.is_json() {
        return print_json(&json!({ "name": machine.name(), "output": output }));
    }
    print!("{output}");
    Ok(())
}
