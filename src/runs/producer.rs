//! Run producer: executes traceroute repeatedly against a target.
//!
//! Each run's stdout goes verbatim into `<capture_dir>/tr_run-<i>.out`.
//! Runs are strictly sequential with a fixed delay between them.

use super::discovery::run_file_name;
use crate::utils::config::TRACEROUTE_BIN;
use crate::utils::error::AcquisitionError;
use chrono::Utc;
use log::{debug, info, warn};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

/// Settings for a capture session
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Host name or IP passed to traceroute
    pub target: String,

    /// Number of runs (1-based indices 1..=num_runs)
    pub num_runs: u32,

    /// Hop limit passed as `-m`
    pub max_hops: u32,

    /// Pause between consecutive runs
    pub run_delay: Duration,

    /// Where run files are written; created if absent
    pub capture_dir: PathBuf,

    /// traceroute executable
    pub program: String,
}

impl CaptureConfig {
    pub fn new(target: impl Into<String>, capture_dir: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            num_runs: 1,
            max_hops: 30,
            run_delay: Duration::ZERO,
            capture_dir: capture_dir.into(),
            program: TRACEROUTE_BIN.to_string(),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

/// Run traceroute `num_runs` times and return the capture directory
///
/// **Public** - main entry point for target mode
///
/// # Errors
/// * `AcquisitionError::CaptureDirFailed` - directory cannot be created
/// * `AcquisitionError::RunFileFailed` - a run file cannot be created
/// * `AcquisitionError::CommandUnavailable` - traceroute could not be started
///
/// A run that starts but exits unsuccessfully is only logged; its file is
/// kept as whatever traceroute managed to print.
pub fn capture_runs(config: &CaptureConfig) -> Result<PathBuf, AcquisitionError> {
    ensure_capture_dir(&config.capture_dir)?;

    for index in 1..=config.num_runs {
        let path = config.capture_dir.join(run_file_name(index));
        info!(
            "Run {}/{} against {} started at {}",
            index,
            config.num_runs,
            config.target,
            Utc::now().to_rfc3339()
        );
        run_once(config, &path)?;

        if index < config.num_runs && !config.run_delay.is_zero() {
            debug!("Sleeping {:?} before next run", config.run_delay);
            thread::sleep(config.run_delay);
        }
    }

    Ok(config.capture_dir.clone())
}

/// Create the capture directory if needed
///
/// **Private** - internal helper for capture_runs
fn ensure_capture_dir(dir: &Path) -> Result<(), AcquisitionError> {
    if !dir.exists() {
        debug!("Creating capture directory: {}", dir.display());
    }
    fs::create_dir_all(dir).map_err(|source| AcquisitionError::CaptureDirFailed {
        path: dir.to_path_buf(),
        source,
    })
}

/// Execute one traceroute with stdout redirected into `path`
///
/// **Private** - internal helper for capture_runs
fn run_once(config: &CaptureConfig, path: &Path) -> Result<(), AcquisitionError> {
    let file = File::create(path).map_err(|source| AcquisitionError::RunFileFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let command_line = format!(
        "{} -m {} {}",
        config.program, config.max_hops, config.target
    );
    debug!("Executing: {} > {}", command_line, path.display());

    let status = Command::new(&config.program)
        .arg("-m")
        .arg(config.max_hops.to_string())
        .arg(&config.target)
        .stdin(Stdio::null())
        .stdout(Stdio::from(file))
        .status()
        .map_err(|source| AcquisitionError::CommandUnavailable {
            command: command_line.clone(),
            source,
        })?;

    if !status.success() {
        warn!("'{}' exited with {}", command_line, status);
    }

    Ok(())
}
