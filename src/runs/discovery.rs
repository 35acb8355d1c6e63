//! Run-file discovery.
//!
//! A run set is a directory of `tr_run-<i>.out` files. Only indices in
//! `1..=num_runs` take part; everything else in the directory is ignored.

use crate::utils::config::{RUN_FILE_EXTENSION, RUN_FILE_PREFIX};
use crate::utils::error::AcquisitionError;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// One captured traceroute run on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunFile {
    /// 1-based run index taken from the file name
    pub index: u32,
    pub path: PathBuf,
}

impl RunFile {
    /// Read the run's output
    ///
    /// **Public** - used by the aggregator
    ///
    /// A run that cannot be read counts as a run with no samples, so this
    /// never fails. Invalid UTF-8 is replaced rather than rejected.
    pub fn read_lossy(&self) -> String {
        match fs::read(&self.path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                warn!(
                    "Run {} unreadable ({}), treating as empty: {}",
                    self.index,
                    self.path.display(),
                    e
                );
                String::new()
            }
        }
    }
}

/// File name for run `index`
pub fn run_file_name(index: u32) -> String {
    format!("{}{}.{}", RUN_FILE_PREFIX, index, RUN_FILE_EXTENSION)
}

/// Parse the run index out of a file name such as `tr_run-3.out`
///
/// **Public** - returns None for anything that does not follow the naming
/// convention
pub fn parse_run_index(file_name: &str) -> Option<u32> {
    let stem = file_name
        .strip_prefix(RUN_FILE_PREFIX)?
        .strip_suffix(RUN_FILE_EXTENSION)?
        .strip_suffix('.')?;
    if stem.is_empty() || !stem.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    stem.parse().ok()
}

/// List the eligible run files in `dir`, ordered by run index
///
/// **Public** - main entry point for discovery
///
/// # Errors
/// * `AcquisitionError::RunDirUnreadable` - directory missing or not listable
pub fn discover_runs(dir: &Path, num_runs: u32) -> Result<Vec<RunFile>, AcquisitionError> {
    let entries = fs::read_dir(dir).map_err(|source| AcquisitionError::RunDirUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut runs = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };

        match parse_run_index(name) {
            Some(index) if (1..=num_runs).contains(&index) => runs.push(RunFile {
                index,
                path: entry.path(),
            }),
            Some(index) => debug!("Ignoring {} (run {} > {})", name, index, num_runs),
            None => debug!("Ignoring {} (not a run file)", name),
        }
    }

    runs.sort_by_key(|run| run.index);
    debug!("Discovered {} run files in {}", runs.len(), dir.display());

    Ok(runs)
}
