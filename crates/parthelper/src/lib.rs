//! Partition table management for Linux block devices.
//!
//! [`Partition`] implements [`Partitioner`] by running `parted`, `partprobe` and
//! `sgdisk` through a [`CommandExecutor`] and parsing what they print. It keeps no
//! state between calls and never retries.
//!
//! ```no_run
//! use parthelper::{Partition, Partitioner, ShellExecutor, PARTITION_GPT};
//!
//! # fn main() -> parthelper::PartResult<()> {
//! let part = Partition::new(ShellExecutor::new());
//! part.create_partition_table("/dev/sdy", PARTITION_GPT)?;
//! part.create_partition("/dev/sdy", "data")?;
//! part.sync_partition_table("/dev/sdy")?;
//! let uuid = part.partition_uuid("/dev/sdy", "1")?;
//! # let _ = uuid;
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod error;
pub mod exec;
pub mod parse;
pub mod partition;

pub use command::{is_supported_table_type, ToolCommand, PARTITION_GPT, SUPPORTED_TABLE_TYPES};
pub use error::{Action, ErrorKind, ExecError, ExecResult, PartResult, PartitionError};
pub use exec::{CmdOutput, CommandExecutor, FakeExecutor, FakeResponse, ShellExecutor};
pub use partition::{Partition, Partitioner};
