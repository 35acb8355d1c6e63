//! JSON report writer.
//!
//! Writes the per-hop records as a pretty-printed JSON array.

use crate::aggregator::HopRecord;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write hop records to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let report = summarize_hops(aggregate_runs(&runs, 30));
/// write_report(&report.to_records(true), "traceroute_statistics.json")?;
/// ```
pub fn write_report(records: &[HopRecord], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    super::validate_path(output_path)?;
    super::ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, records).map_err(OutputError::SerializationFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "Report written successfully ({} hops, {} bytes)",
        records.len(),
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read hop records back from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<Vec<HopRecord>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let records: Vec<HopRecord> =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!("Report loaded: {} hops", records.len());

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn create_test_records() -> Vec<HopRecord> {
        vec![HopRecord {
            avg: 1.5,
            hop: 1,
            hosts: vec![vec!["gw, (192.168.0.1)".to_string()]],
            max: 2.0,
            med: 1.5,
            min: 1.0,
        }]
    }

    #[test]
    fn test_write_and_read_report() {
        let records = create_test_records();
        let temp_file = NamedTempFile::new().unwrap();

        write_report(&records, temp_file.path()).unwrap();
        let loaded = read_report(temp_file.path()).unwrap();

        assert_eq!(loaded, records);
    }

    #[test]
    fn test_report_uses_two_space_indent() {
        let temp_file = NamedTempFile::new().unwrap();
        write_report(&create_test_records(), temp_file.path()).unwrap();

        let text = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(text.starts_with("[\n  {\n    \"avg\": 1.5,"));
    }

    #[test]
    fn test_write_to_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = write_report(&create_test_records(), temp_dir.path());
        assert!(matches!(result, Err(OutputError::InvalidPath(_))));
    }
}
