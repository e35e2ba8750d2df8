//! List all machines, optionally enriched with `docker-machine inspect` data.
//!
//! One `ls` call produces the records; with `inspect` set, one `inspect`
//! call per record runs through an [`InspectPool`] that caps how many are in
//! flight. Results keep listing order, and the first failed inspection
//! fails the whole list.

use std::future::Future;

use futures_util::{StreamExt as _, TryStreamExt as _, stream};

use super::machine::inspect;
use crate::application::ports::MachineCli;
use crate::domain::listing::{list_template, parse_listing};
use crate::domain::{MachineRecord, MachineResult};

/// Hard cap on concurrent `inspect` calls; also the default.
pub const DEFAULT_INSPECT_CONCURRENCY: usize = 4;

/// Options for [`list`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Seconds passed to the tool as `-t`. `None` or `0` omits the flag.
    pub timeout: Option<u64>,
    /// Merge each machine's inspection data into its record.
    pub inspect: bool,
}

/// Bounded worker pool for per-machine jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InspectPool {
    limit: usize,
}

impl InspectPool {
    /// A pool running at most `limit` jobs at once, clamped to
    /// `1..=DEFAULT_INSPECT_CONCURRENCY`.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.clamp(1, DEFAULT_INSPECT_CONCURRENCY),
        }
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Drive `jobs` with at most `limit` in flight.
    ///
    /// Jobs start in iteration order; a queued job starts as soon as any
    /// running one finishes. Results are returned in iteration order
    /// regardless of completion order.
    ///
    /// # Errors
    ///
    /// Returns the first error to complete. Jobs still in flight are dropped
    /// and no partial results are returned.
    pub async fn run<I, F, T>(&self, jobs: I) -> MachineResult<Vec<T>>
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = MachineResult<T>>,
    {
        let mut done: Vec<(usize, T)> = stream::iter(jobs.into_iter().enumerate())
            .map(|(index, job)| async move { job.await.map(|value| (index, value)) })
            .buffer_unordered(self.limit)
            .try_collect()
            .await?;
        done.sort_unstable_by_key(|(index, _)| *index);
        Ok(done.into_iter().map(|(_, value)| value).collect())
    }
}

impl Default for InspectPool {
    fn default() -> Self {
        Self::new(DEFAULT_INSPECT_CONCURRENCY)
    }
}

/// List machines via `docker-machine ls -f <template> [-t <timeout>]`.
///
/// # Errors
///
/// Returns the process error if `ls` fails, [`crate::domain::MachineError::Parse`]
/// for a malformed row, or, with `inspect` set, the first inspection error.
pub async fn list(
    cli: &impl MachineCli,
    options: &ListOptions,
    pool: &InspectPool,
) -> MachineResult<Vec<MachineRecord>> {
    let template = list_template();
    let timeout = options.timeout.filter(|t| *t > 0).map(|t| t.to_string());

    let mut args = vec!["ls", "-f", template.as_str()];
    if let Some(timeout) = timeout.as_deref() {
        args.extend(["-t", timeout]);
    }

    let stdout = cli.command(&args).await?;
    let machines = parse_listing(&stdout)?;
    if !options.inspect {
        return Ok(machines);
    }

    tracing::debug!(
        machines = machines.len(),
        limit = pool.limit(),
        "inspecting machines"
    );
    pool.run(machines.into_iter().map(|machine| async move {
        let data = inspect(cli, &machine.name).await?;
        Ok(machine.merge_inspection(data))
    }))
    .await
    .inspect_err(|e| tracing::warn!(error = %e, "machine inspection failed, list aborted"))
}
