//! `machine ls` — list machines, optionally with inspection details.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::list::{InspectPool, ListOptions, list};
use crate::output::HumanRenderer;
use crate::output::json::print_json;

/// Arguments for `machine ls`.
#[derive(Args, Debug, Clone)]
pub struct LsArgs {
    /// Seconds `docker-machine` waits for each host (0 uses its default)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Merge `docker-machine inspect` data into every record
    #[arg(long)]
    pub inspect: bool,
}

impl From<&LsArgs> for ListOptions {
    fn from(args: &LsArgs) -> Self {
        Self {
            timeout: args.timeout,
            inspect: args.inspect,
        }
    }
}

/// Run `machine ls`.
///
/// # Errors
///
/// Returns an error if listing or any inspection fails.
pub async fn run(app: &AppContext, args: &LsArgs) -> Result<()> {
    let machines = list(&app.cli, &ListOptions::from(args), &InspectPool::default()).await?;

    if app.is_json() {
        return print_json(&machines);
    }
    HumanRenderer::new(&app.output).render_machines(&machines);
    Ok(())
}
