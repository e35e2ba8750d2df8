//! `machine create` — create a machine with a driver and driver flags.

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use clap::Args;
use serde_json::json;

use crate::app::AppContext;
use crate::application::services::machine;
use crate::output::json::print_json;

/// Arguments for `machine create`.
#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Driver to create the machine with (e.g. virtualbox, amazonec2)
    #[arg(short, long)]
    pub driver: String,

    /// Driver flag as `key=value`, passed on as `--key value` (repeatable)
    #[arg(short = 'o', long = "opt", value_name = "KEY=VALUE", value_parser = parse_option)]
    pub options: Vec<(String, String)>,

    /// Name of the new machine
    pub name: String,
}

/// Parse one `key=value` driver flag. A leading `--` on the key is dropped.
///
/// # Errors
///
/// Returns an error if there is no `=` or the key is empty.
pub fn parse_option(raw: &str) -> Result<(String, String)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("expected KEY=VALUE, got `{raw}`");
    };
    let key = key.trim_start_matches("--");
    if key.is_empty() {
        bail!("empty flag name in `{raw}`");
    }
    Ok((key.to_string(), value.to_string()))
}

/// Run `machine create`.
///
/// # Errors
///
/// Returns an error if the arguments are invalid or `docker-machine create` fails.
pub async fn run(app: &AppContext, args: &CreateArgs) -> Result<()> {
    let options: BTreeMap<String, String> = args.options.iter().cloned().collect();
    let stdout = machine::create(&app.cli, &args.name, &args.driver, &options).await?;

    if app.is_json() {
        return print_json(&json!({ "name": args.name, "driver": args.driver, "output": stdout }));
    }
    if !app.output.quiet {
        print!("{stdout}");
    }
    app.output.success(&format!("Machine {} created.", args.name));
    Ok(())
}
