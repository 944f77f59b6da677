//! External tool command lines (partprobe/parted/sgdisk).

use std::fmt;

/// GUID partition table.
pub const PARTITION_GPT: &str = "gpt";

/// Partition table types [`crate::Partitioner::create_partition_table`] accepts.
pub const SUPPORTED_TABLE_TYPES: &[&str] = &[PARTITION_GPT];

/// Label of the unique GUID line in `sgdisk --info` output.
pub const PARTITION_UNIQUE_GUID_LABEL: &str = "Partition unique GUID:";

const PARTED: &str = "parted";
const PARTPROBE: &str = "partprobe";
const SGDISK: &str = "sgdisk";

pub fn is_supported_table_type(table_type: &str) -> bool {
    SUPPORTED_TABLE_TYPES.contains(&table_type)
}

/// A single invocation of one of the partitioning tools.
///
/// Arguments are interpolated verbatim; nothing is shell-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCommand<'a> {
    /// `partprobe -d -s <device>`: dry-run probe that prints the table type and partitions.
    Probe { device: &'a str },
    /// `partprobe <device>`: ask the kernel to re-read the table. Empty device means all.
    Reread { device: &'a str },
    MkLabel {
        device: &'a str,
        table_type: &'a str,
    },
    /// Single optimally aligned partition spanning the whole device.
    MkPart { device: &'a str, name: &'a str },
    Rm { device: &'a str, part_num: &'a str },
    SetGuid {
        device: &'a str,
        part_num: &'a str,
        uuid: &'a str,
    },
    Info { device: &'a str, part_num: &'a str },
}

impl ToolCommand<'_> {
    pub fn program(&self) -> &'static str {
        match self {
            ToolCommand::Probe { .. } | ToolCommand::Reread { .. } => PARTPROBE,
            ToolCommand::MkLabel { .. } | ToolCommand::MkPart { .. } | ToolCommand::Rm { .. } => {
                PARTED
            }
            ToolCommand::SetGuid { .. } | ToolCommand::Info { .. } => SGDISK,
        }
    }

    /// Whether the command rewrites the on-disk partition table.
    ///
    /// A re-read only refreshes the kernel's view and is not destructive.
    pub fn is_destructive(&self) -> bool {
        matches!(
            self,
            ToolCommand::MkLabel { .. }
                | ToolCommand::MkPart { .. }
                | ToolCommand::Rm { .. }
                | ToolCommand::SetGuid { .. }
        )
    }
}

impl fmt::Display for ToolCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let program = self.program();
        match self {
            ToolCommand::Probe { device } => write!(f, "{program} -d -s {device}"),
            ToolCommand::Reread { device } => write!(f, "{program} {device}"),
            ToolCommand::MkLabel { device, table_type } => {
                write!(f, "{program} -s {device} mklabel {table_type}")
            }
            ToolCommand::MkPart { device, name } => {
                write!(f, "{program} -s {device} mkpart --align optimal {name} 0% 100%")
            }
            ToolCommand::Rm { device, part_num } => write!(f, "{program} -s {device} rm {part_num}"),
            ToolCommand::SetGuid {
                device,
                part_num,
                uuid,
            } => write!(f, "{program} {device} --partition-guid={part_num}:{uuid}"),
            ToolCommand::Info { device, part_num } => {
                write!(f, "{program} {device} --info={part_num}")
            }
        }
    }
}
