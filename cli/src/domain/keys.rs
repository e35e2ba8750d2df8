//! Canonical key form for inspection data and listing columns.
//!
//! `docker-machine` mixes `PascalCase`, `SCREAMING_CASE` and acronyms
//! (`SSHKeyPath`, `URL`) across its JSON. Every key is rewritten to
//! camelCase so consumers see one naming convention.

use serde_json::{Map, Value};

/// Rewrite `key` in camelCase.
///
/// Words are split on non-alphanumeric characters, on lower-to-upper
/// transitions (`DriverName`) and at the end of an acronym (`SSHKey`).
/// The first word is lowercased; later words are capitalised.
///
/// ```
/// use machine_cli::domain::keys::camel_case;
///
/// assert_eq!(camel_case("DriverName"), "driverName");
/// assert_eq!(camel_case("URL"), "url");
/// assert_eq!(camel_case("SSHKeyPath"), "sshKeyPath");
/// assert_eq!(camel_case("docker_version"), "dockerVersion");
/// ```
#[must_use]
pub fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for (i, word) in split_words(key).iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

fn split_words(key: &str) -> Vec<String> {
    let chars: Vec<char> = key.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars
                .get(i + 1)
                .is_some_and(|n| n.is_lowercase() || n.is_numeric());
            let boundary = prev.is_lowercase()
                || prev.is_numeric()
                || (prev.is_uppercase() && next_is_lower);
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Recursively rewrite every object key in `value` to camelCase.
///
/// Arrays are walked so objects nested inside them are normalised too;
/// scalars are returned unchanged. When two keys collapse to the same
/// canonical form, the one visited last wins.
#[must_use]
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (camel_case(&k), normalize_keys(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

/// Merge `overlay` on top of `base`.
///
/// Objects are merged key by key, recursing where both sides hold an object
/// under the same key. Any other overlay value replaces the base value.
pub fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => merge_maps(base, overlay),
        (base, overlay) => *base = overlay,
    }
}

/// Map-level form of [`deep_merge`].
pub fn merge_maps(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        match base.get_mut(&key) {
            Some(existing) if existing.is_object() && value.is_object() => {
                deep_merge(existing, value);
            }
            _ => {
                base.insert(key, value);
            }
        }
    }
}
