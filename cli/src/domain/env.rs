//! Parsing of `docker-machine env --shell bash` output.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)]
static EXPORT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)^export (.+)="([^"]+)"#).expect("valid export regex"));

/// Collect `export KEY="VALUE"` lines into a map.
///
/// `\n` and `\r\n` line endings are both accepted. Only the first quoted
/// segment of each line is taken; lines that do not
/// start with `export` (comments, `unset`, usage hints) are ignored.
#[must_use]
pub fn parse_exports(stdout: &str) -> BTreeMap<String, String> {
    stdout
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter_map(|line| EXPORT_LINE.captures(line))
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}
