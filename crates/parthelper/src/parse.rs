//! Interpretation of partitioning tool output.

use crate::command::PARTITION_UNIQUE_GUID_LABEL;

const PARTITIONS_TOKEN: &str = "partitions";

/// Whether `partprobe -d -s` output lists at least one partition.
///
/// ```text
/// $ partprobe -d -s /dev/sdy
/// /dev/sdy: gpt partitions 1 2
/// ```
///
/// Output without the `partitions` token, or with nothing after it, means no partitions.
pub fn has_partitions(probe_stdout: &str) -> bool {
    match probe_stdout.trim().split_once(PARTITIONS_TOKEN) {
        Some((_, rest)) => !rest.is_empty(),
        None => false,
    }
}

/// Partition table type from `partprobe -d -s` output (`/dev/sda: msdos partitions 1`).
pub fn table_type(probe_stdout: &str) -> Option<&str> {
    probe_stdout.split_whitespace().nth(1)
}

/// Unique GUID from `sgdisk --info=<n>` output, lower-cased.
///
/// ```text
/// Partition GUID code: 0FC63DAF-8483-4772-8E79-3D69D8477DE4 (Linux filesystem)
/// Partition unique GUID: 5209CFD8-3AB1-4720-BCEA-DFA80315EC92
/// First sector: 2048 (at 1024.0 KiB)
/// ```
///
/// Only the first labelled line is considered.
pub fn partition_unique_guid(info_stdout: &str) -> Option<String> {
    let line = info_stdout
        .lines()
        .find(|line| line.contains(PARTITION_UNIQUE_GUID_LABEL))?;

    let (_, rest) = line.split_once(PARTITION_UNIQUE_GUID_LABEL)?;
    let guid = rest.trim();
    if guid.is_empty() {
        return None;
    }
    Some(guid.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SGDISK_INFO: &str = "Partition GUID code: 0FC63DAF-8483-4772-8E79-3D69D8477DE4 (Linux filesystem)
Partition unique GUID: 5209CFD8-3AB1-4720-BCEA-DFA80315EC92
First sector: 2048 (at 1024.0 KiB)
Last sector: 999423 (at 488.0 MiB)
Partition size: 997376 sectors (487.0 MiB)
Attribute flags: 0000000000000000
Partition name: ''
";

    #[test]
    fn partitions_listed() {
        assert!(has_partitions("/dev/sdy: gpt partitions 1 2"));
        assert!(has_partitions("/dev/sdy: gpt partitions 1\n"));
    }

    #[test]
    fn no_partitions_after_token() {
        assert!(!has_partitions("/dev/sdy: gpt partitions "));
        assert!(!has_partitions("/dev/sdy: gpt partitions"));
        assert!(!has_partitions("/dev/sdy: gpt partitions\n"));
    }

    #[test]
    fn missing_token_means_no_partitions() {
        assert!(!has_partitions(""));
        assert!(!has_partitions("/dev/sdy: loop"));
    }

    #[test]
    fn table_type_is_second_token() {
        assert_eq!(table_type("/dev/sda: msdos partitions 1"), Some("msdos"));
        assert_eq!(table_type("/dev/sdy: gpt partitions\n"), Some("gpt"));
        assert_eq!(table_type("/dev/sda:"), None);
        assert_eq!(table_type("   "), None);
    }

    #[test]
    fn guid_is_trimmed_and_lowercased() {
        assert_eq!(
            partition_unique_guid(SGDISK_INFO).as_deref(),
            Some("5209cfd8-3ab1-4720-bcea-dfa80315ec92")
        );
        assert_eq!(
            partition_unique_guid("  Partition unique GUID:   ABCD  \r\n").as_deref(),
            Some("abcd")
        );
    }

    #[test]
    fn guid_missing_or_empty() {
        assert_eq!(partition_unique_guid("Partition name: ''"), None);
        assert_eq!(partition_unique_guid("Partition unique GUID:   \n"), None);
    }

    #[test]
    fn first_guid_line_wins() {
        let out = "Partition unique GUID:\nPartition unique GUID: AAAA\n";
        assert_eq!(partition_unique_guid(out), None);

        let out = "Partition unique GUID: BBBB\nPartition unique GUID: AAAA\n";
        assert_eq!(partition_unique_guid(out).as_deref(), Some("bbbb"));
    }
}
