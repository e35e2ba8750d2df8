//! `docker-machine ls` output: template construction and row parsing.
//!
//! The listing is requested with a Go template that prints one machine per
//! line as comma-separated columns in [`LIST_COLUMNS`] order. Every column
//! except `ResponseTime` is `urlquery`-escaped by the tool, so commas inside
//! values never collide with the separator.

use percent_encoding::percent_decode_str;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use super::error::{MachineError, MachineResult};
use super::keys::deep_merge;

/// Listing columns, in the order the template prints them.
pub const LIST_COLUMNS: [&str; 11] = [
    "Name",
    "Active",
    "ActiveHost",
    "ActiveSwarm",
    "DriverName",
    "State",
    "URL",
    "Swarm",
    "Error",
    "DockerVersion",
    "ResponseTime",
];

const COLUMN_SEPARATOR: char = ',';

/// One machine as reported by `docker-machine ls`, optionally enriched with
/// its `docker-machine inspect` data.
///
/// Serializes as one camelCase object: the listing columns, then every
/// `details` entry. A `details` entry shadows the column of the same name,
/// which is how an inspection value that does not fit a column's type still
/// overrides it.
#[derive(Debug, Clone, PartialEq)]
pub struct MachineRecord {
    pub name: String,
    /// Raw active marker (`*` or `-`).
    pub active: Option<String>,
    pub active_host: bool,
    pub active_swarm: bool,
    pub driver_name: Option<String>,
    /// Lowercased machine state, e.g. `running`.
    pub state: Option<String>,
    pub url: Option<String>,
    pub swarm: Option<String>,
    pub error: Option<String>,
    /// `None` when the tool reports `Unknown` or nothing.
    pub docker_version: Option<String>,
    /// Response time in milliseconds.
    pub response_time: f64,
    /// Inspection keys, merged on top of the columns.
    pub details: Map<String, Value>,
}

impl MachineRecord {
    /// Merge canonicalised inspection data on top of this record.
    ///
    /// Inspection keys always win. A value that fits its column's type is
    /// stored in the column; anything else, including a column overridden
    /// with a value of another type, is kept in `details`. Objects already
    /// in `details` are merged key by key.
    #[must_use]
    pub fn merge_inspection(mut self, inspection: Map<String, Value>) -> Self {
        for (key, value) in inspection {
            let value = match self.details.remove(&key) {
                Some(mut existing) => {
                    deep_merge(&mut existing, value);
                    existing
                }
                None => value,
            };
            if !self.set_column(&key, &value) {
                self.details.insert(key, value);
            }
        }
        self
    }

    /// Store `value` in the column named `key` if it has the column's type.
    fn set_column(&mut self, key: &str, value: &Value) -> bool {
        match (key, value) {
            ("name", Value::String(name)) => self.name.clone_from(name),
            ("active", v) => return set_text(&mut self.active, v),
            ("activeHost", Value::Bool(b)) => self.active_host = *b,
            ("activeSwarm", Value::Bool(b)) => self.active_swarm = *b,
            ("driverName", v) => return set_text(&mut self.driver_name, v),
            ("state", v) => return set_text(&mut self.state, v),
            ("url", v) => return set_text(&mut self.url, v),
            ("swarm", v) => return set_text(&mut self.swarm, v),
            ("error", v) => return set_text(&mut self.error, v),
            ("dockerVersion", v) => return set_text(&mut self.docker_version, v),
            ("responseTime", Value::Number(n)) => match n.as_f64() {
                Some(ms) => self.response_time = ms,
                None => return false,
            },
            _ => return false,
        }
        true
    }

    fn columns(&self) -> [(&'static str, Value); 11] {
        [
            ("name", Value::from(self.name.as_str())),
            ("active", Value::from(self.active.clone())),
            ("activeHost", Value::from(self.active_host)),
            ("activeSwarm", Value::from(self.active_swarm)),
            ("driverName", Value::from(self.driver_name.clone())),
            ("state", Value::from(self.state.clone())),
            ("url", Value::from(self.url.clone())),
            ("swarm", Value::from(self.swarm.clone())),
            ("error", Value::from(self.error.clone())),
            ("dockerVersion", Value::from(self.docker_version.clone())),
            ("responseTime", Value::from(self.response_time)),
        ]
    }
}

fn set_text(slot: &mut Option<String>, value: &Value) -> bool {
    match value {
        Value::String(text) => *slot = Some(text.clone()),
        Value::Null => *slot = None,
        _ => return false,
    }
    true
}

impl Serialize for MachineRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.columns() {
            if !self.details.contains_key(key) {
                map.serialize_entry(key, &value)?;
            }
        }
        for (key, value) in &self.details {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Build the `ls -f` template: every column `urlquery`-escaped except the
/// response time, printed as a plain nanosecond integer.
#[must_use]
pub fn list_template() -> String {
    LIST_COLUMNS
        .iter()
        .map(|name| {
            if *name == "ResponseTime" {
                format!("{{{{ .{name} | printf \"%d\" }}}}")
            } else {
                format!("{{{{ .{name} | urlquery }}}}")
            }
        })
        .collect::<Vec<_>>()
        .join(&COLUMN_SEPARATOR.to_string())
}

/// Parse the stdout of `docker-machine ls -f <template>`.
///
/// Blank lines are skipped; `\n` and `\r\n` endings are both accepted.
/// Records are returned in listing order.
///
/// # Errors
///
/// Returns [`MachineError::Parse`] on the first malformed row.
pub fn parse_listing(stdout: &str) -> MachineResult<Vec<MachineRecord>> {
    stdout
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(parse_row)
        .collect()
}

fn parse_row(line: &str) -> MachineResult<MachineRecord> {
    let fields: Vec<&str> = line.split(COLUMN_SEPARATOR).collect();
    if fields.len() != LIST_COLUMNS.len() {
        return Err(MachineError::parse(
            "listing row",
            format!(
                "expected {} fields, found {} in {line:?}",
                LIST_COLUMNS.len(),
                fields.len()
            ),
        ));
    }

    let decoded = fields
        .into_iter()
        .map(decode_field)
        .collect::<MachineResult<Vec<_>>>()?;
    let Ok(
        [
            name,
            active,
            active_host,
            active_swarm,
            driver_name,
            state,
            url,
            swarm,
            error,
            docker_version,
            response_time,
        ],
    ) = <[Option<String>; 11]>::try_from(decoded)
    else {
        return Err(MachineError::parse("listing row", "column count mismatch"));
    };

    let name = name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| MachineError::parse("listing row", format!("missing name in {line:?}")))?;

    Ok(MachineRecord {
        name,
        active,
        active_host: active_host.as_deref() == Some("true"),
        active_swarm: active_swarm.as_deref() == Some("true"),
        driver_name,
        state: state.map(|s| s.to_lowercase()),
        url,
        swarm,
        error,
        docker_version: docker_version.filter(|v| v != "Unknown"),
        response_time: nanos_to_millis(response_time.as_deref())?,
        details: Map::new(),
    })
}

/// Decode one `urlquery`-escaped field. Empty means absent.
///
/// `urlquery` is form encoding, so `+` stands for a space and a literal `+`
/// arrives as `%2B`.
fn decode_field(field: &str) -> MachineResult<Option<String>> {
    if field.is_empty() {
        return Ok(None);
    }
    let spaced = field.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| Some(s.into_owned()))
        .map_err(|e| MachineError::parse("listing field", format!("{field:?}: {e}")))
}

#[allow(clippy::cast_precision_loss)]
fn nanos_to_millis(raw: Option<&str>) -> MachineResult<f64> {
    let raw = raw.ok_or_else(|| MachineError::parse("response time", "missing value"))?;
    let nanos: u64 = raw
        .trim()
        .parse()
        .map_err(|e| MachineError::parse("response time", format!("{raw:?}: {e}")))?;
    Ok(nanos as f64 / 1e6)
}
