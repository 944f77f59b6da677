use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub type ExecResult<T> = std::result::Result<T, ExecError>;
pub type PartResult<T> = std::result::Result<T, PartitionError>;

/// Failure reported by a [`crate::CommandExecutor`].
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("Command not found: {program}")]
    NotFound { program: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Command failed: {command} (exit={code:?}): {stderr}")]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Command timed out: {command} after {timeout:?}")]
    Timeout { command: String, timeout: Duration },
}

impl ExecError {
    /// Standard error captured from the tool, if the process got far enough to produce any.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            ExecError::Failed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}

/// The partition operation an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CheckExistence,
    GetTableType,
    CreateTable,
    CreatePartition,
    DeletePartition,
    SetUuid,
    GetUuid,
    SyncTable,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::CheckExistence => "check partition existence",
            Action::GetTableType => "get partition table type",
            Action::CreateTable => "create partition table",
            Action::CreatePartition => "create partition",
            Action::DeletePartition => "delete partition",
            Action::SetUuid => "set partition GUID",
            Action::GetUuid => "get partition GUID",
            Action::SyncTable => "sync partition table",
        };
        f.write_str(s)
    }
}

/// Coarse classification of a [`PartitionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected before any external command was issued.
    InvalidInput,
    /// The external tool exited non-zero, timed out or could not be spawned.
    CommandFailed,
    /// The external tool succeeded but its output had an unexpected shape.
    Parse,
}

#[derive(Error, Debug)]
pub enum PartitionError {
    #[error("unable to create partition table for device {device}: unsupported partition table type {table_type:?}")]
    UnsupportedTableType { device: String, table_type: String },

    #[error("unable to {action} for device {device}{}: {source}", part_suffix(.part_num))]
    Command {
        action: Action,
        device: String,
        part_num: Option<String>,
        #[source]
        source: ExecError,
    },

    #[error("unable to {action} for device {device}: unexpected output {output:?}")]
    Parse {
        action: Action,
        device: String,
        output: String,
    },
}

fn part_suffix(part_num: &Option<String>) -> String {
    match part_num {
        Some(num) => format!(" (partition {num:?})"),
        None => String::new(),
    }
}

impl PartitionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PartitionError::UnsupportedTableType { .. } => ErrorKind::InvalidInput,
            PartitionError::Command { .. } => ErrorKind::CommandFailed,
            PartitionError::Parse { .. } => ErrorKind::Parse,
        }
    }

    /// Device the failed operation targeted. Empty for a system-wide sync.
    pub fn device(&self) -> &str {
        match self {
            PartitionError::UnsupportedTableType { device, .. }
            | PartitionError::Command { device, .. }
            | PartitionError::Parse { device, .. } => device,
        }
    }

    /// Standard error of the failed tool invocation, when there was one.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            PartitionError::Command { source, .. } => source.stderr(),
            _ => None,
        }
    }
}
