//! `machine inspect` — print a machine's details with camelCase keys.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::output::json::print_json;

/// Arguments for `machine inspect`.
#[derive(Args, Debug, Clone, Default)]
pub struct InspectArgs {
    /// Machine name (defaults to $DOCKER_MACHINE_NAME, then `default`)
    pub name: Option<String>,
}

/// Run `machine inspect`. Output is JSON in both modes.
///
/// # Errors
///
/// Returns an error if `docker-machine inspect` fails or prints something
/// other than a JSON object.
pub async fn run(app: &AppContext, args: &InspectArgs) -> Result<()> {
    let details = app.machine(args.name.as_deref()).inspect().await?;
    print_json(&details)
}
