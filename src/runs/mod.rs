//! Run acquisition.
//!
//! Either executes traceroute repeatedly into a capture directory, or
//! treats an existing directory of captured output as the run set.

pub mod discovery;
pub mod producer;

pub use discovery::{discover_runs, parse_run_index, run_file_name, RunFile};
pub use producer::{capture_runs, CaptureConfig};
