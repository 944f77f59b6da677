//! Partition table operations.

use crate::command::{is_supported_table_type, ToolCommand};
use crate::exec::{CmdOutput, CommandExecutor};
use crate::{parse, Action, PartResult, PartitionError};

/// Operations on a block device's partition table.
///
/// Each call issues exactly one external command and holds no state between calls.
/// Nothing here serialises access to a device; callers coordinate that themselves.
pub trait Partitioner: Send + Sync {
    /// Whether the device has any partitions.
    ///
    /// `part_num` only adds context to errors: the answer is true as soon as the
    /// probe lists at least one partition, whichever numbers those are.
    fn is_partition_exists(&self, device: &str, part_num: &str) -> PartResult<bool>;

    /// Partition table type as reported by `partprobe` (`gpt`, `msdos`, ...).
    fn partition_table_type(&self, device: &str) -> PartResult<String>;

    /// Write a new, empty partition table. `table_type` must be in
    /// [`crate::SUPPORTED_TABLE_TYPES`].
    fn create_partition_table(&self, device: &str, table_type: &str) -> PartResult<()>;

    /// Create a partition named `part_name` over the whole device.
    fn create_partition(&self, device: &str, part_name: &str) -> PartResult<()>;

    fn delete_partition(&self, device: &str, part_num: &str) -> PartResult<()>;

    /// Assign `uuid` as the unique GUID of a partition. Written as given.
    fn set_partition_uuid(&self, device: &str, part_num: &str, uuid: &str) -> PartResult<()>;

    /// Unique GUID of a partition, lower-cased.
    fn partition_uuid(&self, device: &str, part_num: &str) -> PartResult<String>;

    /// Ask the kernel to re-read the partition table. An empty `device` re-reads all devices.
    fn sync_partition_table(&self, device: &str) -> PartResult<()>;
}

/// [`Partitioner`] driving parted, partprobe and sgdisk through a [`CommandExecutor`].
#[derive(Debug, Clone)]
pub struct Partition<E> {
    executor: E,
}

impl<E: CommandExecutor> Partition<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    fn run(
        &self,
        cmd: ToolCommand<'_>,
        action: Action,
        device: &str,
        part_num: Option<&str>,
    ) -> PartResult<CmdOutput> {
        self.executor
            .run_cmd(&cmd.to_string())
            .map_err(|source| PartitionError::Command {
                action,
                device: device.to_string(),
                part_num: part_num.map(str::to_string),
                source,
            })
    }
}

fn parse_error(action: Action, device: &str, output: &str) -> PartitionError {
    PartitionError::Parse {
        action,
        device: device.to_string(),
        output: output.to_string(),
    }
}

impl<E: CommandExecutor> Partitioner for Partition<E> {
    fn is_partition_exists(&self, device: &str, part_num: &str) -> PartResult<bool> {
        let out = self.run(
            ToolCommand::Probe { device },
            Action::CheckExistence,
            device,
            Some(part_num),
        )?;
        Ok(parse::has_partitions(&out.stdout))
    }

    fn partition_table_type(&self, device: &str) -> PartResult<String> {
        let out = self.run(ToolCommand::Probe { device }, Action::GetTableType, device, None)?;
        parse::table_type(&out.stdout)
            .map(str::to_string)
            .ok_or_else(|| parse_error(Action::GetTableType, device, &out.stdout))
    }

    fn create_partition_table(&self, device: &str, table_type: &str) -> PartResult<()> {
        if !is_supported_table_type(table_type) {
            return Err(PartitionError::UnsupportedTableType {
                device: device.to_string(),
                table_type: table_type.to_string(),
            });
        }

        self.run(
            ToolCommand::MkLabel { device, table_type },
            Action::CreateTable,
            device,
            None,
        )?;
        Ok(())
    }

    fn create_partition(&self, device: &str, part_name: &str) -> PartResult<()> {
        self.run(
            ToolCommand::MkPart {
                device,
                name: part_name,
            },
            Action::CreatePartition,
            device,
            None,
        )?;
        Ok(())
    }

    fn delete_partition(&self, device: &str, part_num: &str) -> PartResult<()> {
        self.run(
            ToolCommand::Rm { device, part_num },
            Action::DeletePartition,
            device,
            Some(part_num),
        )?;
        Ok(())
    }

    fn set_partition_uuid(&self, device: &str, part_num: &str, uuid: &str) -> PartResult<()> {
        self.run(
            ToolCommand::SetGuid {
                device,
                part_num,
                uuid,
            },
            Action::SetUuid,
            device,
            Some(part_num),
        )?;
        Ok(())
    }

    fn partition_uuid(&self, device: &str, part_num: &str) -> PartResult<String> {
        let out = self.run(
            ToolCommand::Info { device, part_num },
            Action::GetUuid,
            device,
            Some(part_num),
        )?;
        parse::partition_unique_guid(&out.stdout)
            .ok_or_else(|| parse_error(Action::GetUuid, device, &out.stdout))
    }

    fn sync_partition_table(&self, device: &str) -> PartResult<()> {
        self.run(ToolCommand::Reread { device }, Action::SyncTable, device, None)?;
        Ok(())
    }
}
