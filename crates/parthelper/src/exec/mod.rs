//! Command execution.
//!
//! Every external tool invocation goes through a [`CommandExecutor`] so the partition
//! logic can be exercised without spawning real processes.

pub mod fake;
pub mod shell;

pub use fake::{FakeExecutor, FakeResponse};
pub use shell::ShellExecutor;

use crate::ExecResult;
use std::sync::Arc;

/// Captured output of a successful command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmdOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CmdOutput {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}

/// Runs a full command line through a shell-equivalent interpreter.
///
/// Implementations must return `Err` when the process cannot be spawned or exits
/// non-zero; `Ok` always means a zero exit status.
pub trait CommandExecutor: Send + Sync {
    fn run_cmd(&self, cmd: &str) -> ExecResult<CmdOutput>;
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for &T {
    fn run_cmd(&self, cmd: &str) -> ExecResult<CmdOutput> {
        (**self).run_cmd(cmd)
    }
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for Box<T> {
    fn run_cmd(&self, cmd: &str) -> ExecResult<CmdOutput> {
        (**self).run_cmd(cmd)
    }
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for Arc<T> {
    fn run_cmd(&self, cmd: &str) -> ExecResult<CmdOutput> {
        (**self).run_cmd(cmd)
    }
}
