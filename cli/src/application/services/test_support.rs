//! Shared test doubles for service tests.
//!
//! `ScriptedCli` answers each `docker-machine` call from a queue of canned
//! results and records the arguments it was called with.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::application::ports::MachineCli;
use crate::domain::{MachineResult, ProcessError};

pub struct ScriptedCli {
    replies: Mutex<VecDeque<MachineResult<String>>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedCli {
    pub fn new(replies: impl IntoIterator<Item = MachineResult<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A CLI that must not be called.
    pub fn empty() -> Self {
        Self::new(Vec::<MachineResult<String>>::new())
    }

    pub fn ok(stdout: &str) -> Self {
        Self::new([Ok(stdout.to_string())])
    }

    pub fn failing(message: &str) -> Self {
        Self::new([Err(exit_error(message))])
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().expect("mutex poisoned").clone()
    }
}

impl MachineCli for ScriptedCli {
    async fn command(&self, args: &[&str]) -> MachineResult<String> {
        self.calls
            .lock()
            .expect("mutex poisoned")
            .push(args.iter().map(ToString::to_string).collect());
        self.replies
            .lock()
            .expect("mutex poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(ProcessError::Spawn("unexpected call".to_string()).into()))
    }
}

/// A non-zero exit whose message is `message`.
pub fn exit_error(message: &str) -> crate::domain::MachineError {
    ProcessError::Exit {
        command: "test".to_string(),
        code: Some(1),
        message: message.to_string(),
        stdout: String::new(),
    }
    .into()
}
