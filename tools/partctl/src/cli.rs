use clap::{Parser, Subcommand};
use parthelper::ToolCommand;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "partctl", author, version)]
#[command(about = "Inspect and edit block device partition tables via parted, partprobe and sgdisk")]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Confirm a destructive operation
    #[arg(long = "yes-i-know", global = true)]
    pub yes_i_know: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Check whether a device has partitions
    Exists { device: String, part_num: String },

    /// Print the partition table type
    TableType { device: String },

    /// Create a new partition table (destructive)
    Mklabel {
        device: String,
        #[arg(long = "type", default_value = parthelper::PARTITION_GPT)]
        table_type: String,
    },

    /// Create a partition spanning the whole device (destructive)
    Mkpart { device: String, name: String },

    /// Delete a partition (destructive)
    Rm { device: String, part_num: String },

    /// Set the unique GUID of a partition (destructive)
    SetUuid {
        device: String,
        part_num: String,
        uuid: String,
    },

    /// Print the unique GUID of a partition
    Uuid { device: String, part_num: String },

    /// Re-read the partition table; all devices when none is given
    Sync { device: Option<String> },
}

impl Command {
    /// The tool invocation this subcommand turns into.
    pub fn tool_command(&self) -> ToolCommand<'_> {
        match self {
            Command::Exists { device, .. } | Command::TableType { device } => {
                ToolCommand::Probe { device }
            }
            Command::Mklabel { device, table_type } => ToolCommand::MkLabel { device, table_type },
            Command::Mkpart { device, name } => ToolCommand::MkPart { device, name },
            Command::Rm { device, part_num } => ToolCommand::Rm { device, part_num },
            Command::SetUuid {
                device,
                part_num,
                uuid,
            } => ToolCommand::SetGuid {
                device,
                part_num,
                uuid,
            },
            Command::Uuid { device, part_num } => ToolCommand::Info { device, part_num },
            Command::Sync { device } => ToolCommand::Reread {
                device: device.as_deref().unwrap_or_default(),
            },
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.tool_command().is_destructive()
    }
}
