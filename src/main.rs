//! Traceroute latency statistics CLI
//!
//! Runs traceroute repeatedly against a target (or reads captured runs),
//! then reports per-hop latency statistics and a box plot.

use anyhow::Result;
use clap::{ArgGroup, Parser};
use env_logger::Env;
use std::path::PathBuf;
use std::time::Duration;

use traceroute_stats::chart::ChartConfig;
use traceroute_stats::commands::{execute_analyze, validate_args, AnalyzeArgs, RunSource};
use traceroute_stats::utils::config::{
    DEFAULT_CAPTURE_DIR, DEFAULT_GRAPH_PATH, DEFAULT_MAX_HOPS, DEFAULT_NUM_RUNS,
    DEFAULT_OUTPUT_PATH, DEFAULT_RUN_DELAY_SECS,
};

/// Traceroute Latency Statistics
#[derive(Parser, Debug)]
#[command(name = "trstats")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["target", "test"])))]
struct Cli {
    /// Number of times traceroute will run
    #[arg(short = 'n', long = "num_runs", default_value_t = DEFAULT_NUM_RUNS)]
    num_runs: u32,

    /// Number of seconds to wait between two consecutive runs
    #[arg(short = 'd', long = "run_delay", default_value_t = DEFAULT_RUN_DELAY_SECS)]
    run_delay: u64,

    /// Number of hops traceroute will run
    #[arg(short = 'm', long = "max_hops", default_value_t = DEFAULT_MAX_HOPS)]
    max_hops: u32,

    /// Path and name of output JSON file containing the stats
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Path and name of output HTML file containing the stats graph (.html/.htm)
    #[arg(short, long, default_value = DEFAULT_GRAPH_PATH)]
    graph: PathBuf,

    /// A target domain name or IP address (required if --test is absent)
    #[arg(short, long)]
    target: Option<String>,

    /// Directory containing num_runs text files with traceroute output
    #[arg(long)]
    test: Option<PathBuf>,

    /// Directory that runs against --target are captured into
    #[arg(long = "capture_dir", default_value = DEFAULT_CAPTURE_DIR)]
    capture_dir: PathBuf,

    /// Leave hops without any reply out of the JSON report
    #[arg(long = "omit_empty")]
    omit_empty: bool,

    /// Print text summary to stdout
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_args(self) -> AnalyzeArgs {
        let source = if let Some(target) = self.target {
            RunSource::target(
                target,
                Duration::from_secs(self.run_delay),
                self.capture_dir,
            )
        } else {
            match self.test {
                Some(dir) => RunSource::Directory(dir),
                None => unreachable!("the required `source` group admits --target or --test"),
            }
        };

        AnalyzeArgs {
            source,
            num_runs: self.num_runs,
            max_hops: self.max_hops,
            output_json: self.output,
            output_graph: self.graph,
            omit_empty: self.omit_empty,
            print_summary: self.summary,
            chart_config: Some(ChartConfig::new()),
        }
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = cli.into_args();

    // Validate args first
    validate_args(&args)?;

    execute_analyze(args)?;

    Ok(())
}
