//! Argument construction for `docker-machine create`.

use std::collections::BTreeMap;

use super::error::{MachineError, MachineResult};

/// Build `create --driver <driver> [--<key> <value>]... <name>`.
///
/// Each option renders as two tokens; the machine name is always last.
///
/// # Errors
///
/// Returns [`MachineError::Validation`] if `name` or `driver` is empty.
pub fn create_args(
    name: &str,
    driver: &str,
    options: &BTreeMap<String, String>,
) -> MachineResult<Vec<String>> {
    if name.is_empty() {
        return Err(MachineError::validation("name is required"));
    }
    if driver.is_empty() {
        return Err(MachineError::validation("driver is required"));
    }

    let mut args = vec!["create".to_string(), "--driver".to_string(), driver.to_string()];
    for (key, value) in options {
        args.push(format!("--{key}"));
        args.push(value.clone());
    }
    args.push(name.to_string());
    Ok(args)
}

/// Recover the flag set from `create` arguments (inverse of [`create_args`]).
///
/// Returns `None` if the list is not shaped like `create` arguments. The
/// driver is reported under the `driver` key alongside the other flags.
#[must_use]
pub fn parse_create_flags(args: &[String]) -> Option<(String, BTreeMap<String, String>)> {
    let (command, rest) = args.split_first()?;
    if command != "create" {
        return None;
    }
    let (name, flags) = rest.split_last()?;
    if flags.len() % 2 != 0 {
        return None;
    }
    let mut parsed = BTreeMap::new();
    for pair in flags.chunks(2) {
        let key = pair[0].strip_prefix("--")?;
        parsed.insert(key.to_string(), pair[1].clone());
    }
    Some((name.clone(), parsed))
}
