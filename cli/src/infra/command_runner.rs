//! Infrastructure implementation of the `CommandRunner` port.

use std::path::Path;
use std::process::{Output, Stdio};

use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;

/// Production `CommandRunner` on `tokio::process`.
///
/// stdout and stderr are piped and read concurrently with the wait, so a
/// chatty child cannot fill a pipe and deadlock. There is no timeout and the
/// child is not killed when the future is dropped: once started, a
/// `docker-machine` operation runs to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<Output> {
        tokio::process::Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .with_context(|| format!("failed to spawn {program}"))
    }
}
