//! `machine status|start|stop|kill` — single-machine state commands.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use crate::app::AppContext;
use crate::output::HumanRenderer;
use crate::output::json::print_json;

/// Arguments naming one machine.
#[derive(Args, Debug, Clone, Default)]
pub struct MachineArgs {
    /// Machine name (defaults to $DOCKER_MACHINE_NAME, then `default`)
    pub name: Option<String>,
}

/// A state transition requested from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Start,
    Stop,
    Kill,
}

impl Transition {
    #[must_use]
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Start => "started",
            Self::Stop => "stopped",
            Self::Kill => "killed",
        }
    }
}

/// Run `machine status`.
///
/// # Errors
///
/// Returns an error if `docker-machine status` fails.
pub async fn status(app: &AppContext, args: &MachineArgs) -> Result<()> {
    let machine = app.machine(args.name.as_deref());
    let state = machine.status().await?;

    if app.is_json() {
        return print_json(&json!({ "name": machine.name(), "state": state }));
    }
    HumanRenderer::new(&app.output).render_state(machine.name(), &state);
    Ok(())
}

/// Run `machine start`, `machine stop` or `machine kill`.
///
/// Requesting the state the machine is already in succeeds.
///
/// # Errors
///
/// Returns an error if the machine does not exist or the transition fails.
pub async fn transition(app: &AppContext, args: &MachineArgs, transition: Transition) -> Result<()> {
    let machine = app.machine(args.name.as_deref());
    match transition {
        Transition::Start => machine.start().await?,
        Transition::Stop => machine.stop().await?,
        Transition::Kill => machine.kill().await?,
    }

    if app.is_json() {
        return print_json(&json!({ "name": machine.name(), "result": transition.past_tense() }));
    }
    app.output
        .success(&format!("Machine {} {}.", machine.name(), transition.past_tense()));
    Ok(())
}
