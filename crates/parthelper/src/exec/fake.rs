//! Fake executor for testing.
//!
//! Records every command line without spawning anything and replays scripted
//! responses, so partition logic can be tested without root or real disks.

use super::{CmdOutput, CommandExecutor};
use crate::{ExecError, ExecResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Scripted result for a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeResponse {
    Success { stdout: String, stderr: String },
    Failure { code: Option<i32>, stderr: String },
}

impl FakeResponse {
    pub fn stdout(stdout: impl Into<String>) -> Self {
        FakeResponse::Success {
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn fail(code: i32, stderr: impl Into<String>) -> Self {
        FakeResponse::Failure {
            code: Some(code),
            stderr: stderr.into(),
        }
    }
}

impl Default for FakeResponse {
    fn default() -> Self {
        FakeResponse::stdout("")
    }
}

#[derive(Debug, Default)]
struct FakeExecutorState {
    /// Command lines in the order they were run
    commands: Vec<String>,
    responses: HashMap<String, FakeResponse>,
    fallback: FakeResponse,
}

/// Executor that records command lines instead of running them.
///
/// Clones share state, so a test can hand one clone to the code under test and
/// inspect the recorded commands through another.
#[derive(Debug, Clone, Default)]
pub struct FakeExecutor {
    state: Arc<Mutex<FakeExecutorState>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to the exact command line `cmd` with `response`.
    pub fn on(self, cmd: impl Into<String>, response: FakeResponse) -> Self {
        self.lock().responses.insert(cmd.into(), response);
        self
    }

    /// Response for any command line without a scripted entry.
    pub fn otherwise(self, response: FakeResponse) -> Self {
        self.lock().fallback = response;
        self
    }

    /// All recorded command lines.
    pub fn commands(&self) -> Vec<String> {
        self.lock().commands.clone()
    }

    pub fn command_count(&self) -> usize {
        self.lock().commands.len()
    }

    pub fn last_command(&self) -> Option<String> {
        self.lock().commands.last().cloned()
    }

    /// Forget recorded commands; scripted responses are kept.
    pub fn clear(&self) {
        self.lock().commands.clear();
    }

    fn lock(&self) -> MutexGuard<'_, FakeExecutorState> {
        // Recorded history stays valid even if another holder panicked.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CommandExecutor for FakeExecutor {
    fn run_cmd(&self, cmd: &str) -> ExecResult<CmdOutput> {
        let mut state = self.lock();
        state.commands.push(cmd.to_string());

        let response = state
            .responses
            .get(cmd)
            .unwrap_or(&state.fallback)
            .clone();
        log::debug!("FAKE EXEC: {} -> {:?}", cmd, response);

        match response {
            FakeResponse::Success { stdout, stderr } => Ok(CmdOutput { stdout, stderr }),
            FakeResponse::Failure { code, stderr } => Err(ExecError::Failed {
                command: cmd.to_string(),
                code,
                stderr,
            }),
        }
    }
}
