//! Traceroute Stats
//!
//! Per-hop latency statistics from repeated traceroute runs.
//!
//! The pipeline runs strictly forward:
//! runs (captured or executed) → line classification → per-hop aggregation
//! → summary statistics → JSON report and box-plot chart.
//!
//! ```bash
//! trstats -t example.com -n 5 -d 10
//! trstats --test ./captures -n 3 -m 20 -o stats.json -g graph.html
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod output;
pub mod parser;
pub mod runs;
pub mod utils;
