//! Configuration and constants for the CLI.

/// Default path of the JSON statistics report
pub const DEFAULT_OUTPUT_PATH: &str = "traceroute_statistics.json";

/// Default path of the rendered latency chart
pub const DEFAULT_GRAPH_PATH: &str = "graph.html";

/// Directory (relative to the working directory) that target mode captures into
pub const DEFAULT_CAPTURE_DIR: &str = "test_files";

/// External traceroute binary
pub const TRACEROUTE_BIN: &str = "traceroute";

/// Defaults mirrored by the CLI flags
pub const DEFAULT_NUM_RUNS: u32 = 1;
pub const DEFAULT_RUN_DELAY_SECS: u64 = 0;
pub const DEFAULT_MAX_HOPS: u32 = 30;

/// traceroute refuses hop limits above this
pub const MAX_HOP_LIMIT: u32 = 255;

// Run files are named `tr_run-<i>.out`, i being the 1-based run index
pub const RUN_FILE_PREFIX: &str = "tr_run-";
pub const RUN_FILE_EXTENSION: &str = "out";

/// Sample count used for hops that never answered
pub const EMPTY_HOP_PLACEHOLDER_LEN: usize = 2;

/// Decimal places kept for mean and median
pub const STAT_PRECISION: i32 = 3;
