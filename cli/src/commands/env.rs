//! `machine env` — print the environment that points docker at a machine.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::machine::{EnvOptions, EnvOutput};
use crate::output::HumanRenderer;
use crate::output::json::print_json;

/// Arguments for `machine env`.
#[derive(Args, Debug, Clone, Default)]
pub struct EnvArgs {
    /// Machine name (defaults to $DOCKER_MACHINE_NAME, then `default`)
    pub name: Option<String>,

    /// Shell dialect for the script (bash, fish, cmd, powershell, ...)
    #[arg(long, conflicts_with = "parse")]
    pub shell: Option<String>,

    /// Print the variables instead of a shell script
    #[arg(long)]
    pub parse: bool,
}

/// Run `machine env`.
///
/// `--json` implies `--parse`.
///
/// # Errors
///
/// Returns an error if `docker-machine env` fails.
pub async fn run(app: &AppContext, args: &EnvArgs) -> Result<()> {
    let options = EnvOptions {
        shell: args.shell.clone(),
        parse: args.parse || app.is_json(),
    };
    let output = app.machine(args.name.as_deref()).env(&options).await?;

    match output {
        EnvOutput::Variables(vars) if app.is_json() => print_json(&vars),
        EnvOutput::Variables(vars) => {
            HumanRenderer::new(&app.output).render_variables(&vars);
            Ok(())
        }
        EnvOutput::Script(script) => {
            println!("{script}");
            Ok(())
        }
    }
}
