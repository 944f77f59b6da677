use anyhow::Result;
use clap::Parser;
use parthelper::{CommandExecutor, Partition, Partitioner};

mod cli;
mod config;
mod logging;
mod preflight;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    execute(cli, preflight::is_root(), |cfg| cfg.executor.build())
}

/// Preflight, then config, then the executor; nothing runs if an earlier step fails.
fn execute<E, F>(cli: Cli, is_root: bool, build: F) -> Result<()>
where
    E: CommandExecutor,
    F: FnOnce(&config::Config) -> E,
{
    if cli.command.is_destructive() {
        preflight::check_destructive(cli.yes_i_know, is_root)?;
    }

    let cfg = config::Config::load(cli.config.as_deref())?;
    let part = Partition::new(build(&cfg));
    run(&part, cli.command)
}

fn run(part: &dyn Partitioner, command: Command) -> Result<()> {
    match command {
        Command::Exists { device, part_num } => {
            println!("{}", part.is_partition_exists(&device, &part_num)?);
        }
        Command::TableType { device } => {
            println!("{}", part.partition_table_type(&device)?);
        }
        Command::Mklabel { device, table_type } => {
            part.create_partition_table(&device, &table_type)?;
            log::info!("Created {} partition table on {}", table_type, device);
        }
        Command::Mkpart { device, name } => {
            part.create_partition(&device, &name)?;
            log::info!("Created partition {} on {}", name, device);
        }
        Command::Rm { device, part_num } => {
            part.delete_partition(&device, &part_num)?;
            log::info!("Deleted partition {} from {}", part_num, device);
        }
        Command::SetUuid {
            device,
            part_num,
            uuid,
        } => {
            part.set_partition_uuid(&device, &part_num, &uuid)?;
            log::info!("Set GUID of partition {} on {} to {}", part_num, device, uuid);
        }
        Command::Uuid { device, part_num } => {
            println!("{}", part.partition_uuid(&device, &part_num)?);
        }
        Command::Sync { device } => {
            let device = device.unwrap_or_default();
            part.sync_partition_table(&device)?;
            if device.is_empty() {
                log::info!("Re-read partition tables of all devices");
            } else {
                log::info!("Re-read partition table of {}", device);
            }
        }
    }
    Ok(())
}
