//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Acquires runs (executes traceroute, or uses a captured directory)
//! 2. Parses and aggregates every run per hop
//! 3. Summarizes per-hop statistics
//! 4. Renders the latency chart
//! 5. Writes output files

use crate::aggregator::{aggregate_runs, summarize_hops, LatencyReport};
use crate::chart::{render_report, ChartConfig};
use crate::output::{validate_chart_path, write_chart, write_report};
use crate::runs::{capture_runs, discover_runs, CaptureConfig};
use crate::utils::config::{
    DEFAULT_CAPTURE_DIR, DEFAULT_GRAPH_PATH, DEFAULT_MAX_HOPS, DEFAULT_NUM_RUNS,
    DEFAULT_OUTPUT_PATH, MAX_HOP_LIMIT, TRACEROUTE_BIN,
};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Where the runs come from
#[derive(Debug, Clone, PartialEq)]
pub enum RunSource {
    /// Execute traceroute against a target, capturing into `capture_dir`
    Target {
        target: String,
        run_delay: Duration,
        capture_dir: PathBuf,
        program: String,
    },

    /// Use previously captured `tr_run-<i>.out` files
    Directory(PathBuf),
}

impl RunSource {
    pub fn target(target: impl Into<String>, run_delay: Duration, capture_dir: impl Into<PathBuf>) -> Self {
        RunSource::Target {
            target: target.into(),
            run_delay,
            capture_dir: capture_dir.into(),
            program: TRACEROUTE_BIN.to_string(),
        }
    }
}

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    pub source: RunSource,

    /// Runs to execute, and the highest run index read from disk
    pub num_runs: u32,

    /// Hops reported (and hop limit passed to traceroute)
    pub max_hops: u32,

    /// Output path for the JSON report
    pub output_json: PathBuf,

    /// Output path for the chart document
    pub output_graph: PathBuf,

    /// Leave placeholder hops out of the JSON report
    pub omit_empty: bool,

    /// Print text summary to stdout
    pub print_summary: bool,

    pub chart_config: Option<ChartConfig>,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            source: RunSource::Directory(PathBuf::from(DEFAULT_CAPTURE_DIR)),
            num_runs: DEFAULT_NUM_RUNS,
            max_hops: DEFAULT_MAX_HOPS,
            output_json: PathBuf::from(DEFAULT_OUTPUT_PATH),
            output_graph: PathBuf::from(DEFAULT_GRAPH_PATH),
            omit_empty: false,
            print_summary: false,
            chart_config: None,
        }
    }
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// Returns the report that was written.
///
/// # Errors
/// * traceroute missing or capture directory not creatable
/// * run directory unreadable
/// * chart rendering or file write failures
pub fn execute_analyze(args: AnalyzeArgs) -> Result<LatencyReport> {
    let start_time = Instant::now();

    // Step 1: Acquire runs
    info!("Step 1/5: Acquiring runs...");
    let run_dir = acquire_runs(&args)?;

    let runs = discover_runs(&run_dir, args.num_runs)
        .with_context(|| format!("Failed to list run files in {}", run_dir.display()))?;
    info!("Found {} of {} run files", runs.len(), args.num_runs);

    // Step 2: Parse and aggregate
    info!("Step 2/5: Aggregating {} hops across runs...", args.max_hops);
    let hops = aggregate_runs(&runs, args.max_hops);

    // Step 3: Summarize
    info!("Step 3/5: Summarizing hop statistics...");
    let report = summarize_hops(hops);

    for hop in report.hops.iter().filter(|h| !h.placeholder) {
        debug!(
            "  hop {}: {} samples, avg {} ms",
            hop.hop,
            hop.samples.len(),
            hop.stats.avg
        );
    }

    // Step 4: Render chart
    info!("Step 4/5: Rendering latency chart...");
    let html = render_report(&report, args.chart_config.as_ref())
        .context("Failed to render latency chart")?;

    // Step 5: Write outputs
    info!("Step 5/5: Writing output files...");

    write_report(&report.to_records(!args.omit_empty), &args.output_json)
        .context("Failed to write statistics JSON")?;
    info!("✓ Statistics written to: {}", args.output_json.display());

    write_chart(&html, &args.output_graph).context("Failed to write latency chart")?;
    info!("✓ Chart written to: {}", args.output_graph.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("TRACEROUTE LATENCY SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Runs:  {}", runs.len());
        println!("Hops:  {}", report.len());
        println!("\n{}", report.text_summary());
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Produce or locate the run directory
///
/// **Private** - internal helper for execute_analyze
fn acquire_runs(args: &AnalyzeArgs) -> Result<PathBuf> {
    match &args.source {
        RunSource::Target {
            target,
            run_delay,
            capture_dir,
            program,
        } => {
            let config = CaptureConfig {
                target: target.clone(),
                num_runs: args.num_runs,
                max_hops: args.max_hops,
                run_delay: *run_delay,
                capture_dir: capture_dir.clone(),
                program: program.clone(),
            };
            capture_runs(&config)
                .with_context(|| format!("Failed to capture traceroute runs against {}", target))
        }
        RunSource::Directory(dir) => {
            debug!("Using captured runs in {}", dir.display());
            Ok(dir.clone())
        }
    }
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.num_runs == 0 {
        anyhow::bail!("num_runs must be greater than 0");
    }

    if args.max_hops == 0 {
        anyhow::bail!("max_hops must be greater than 0");
    }

    if args.max_hops > MAX_HOP_LIMIT {
        anyhow::bail!("max_hops is too large (max {})", MAX_HOP_LIMIT);
    }

    match &args.source {
        RunSource::Target { target, .. } => {
            if target.trim().is_empty() {
                anyhow::bail!("Target cannot be empty");
            }
            if target.starts_with('-') {
                anyhow::bail!("Target cannot start with '-'");
            }
        }
        RunSource::Directory(dir) => {
            if !dir.is_dir() {
                anyhow::bail!("Test directory does not exist: {}", dir.display());
            }
        }
    }

    validate_chart_path(&args.output_graph).context("Invalid --graph path")?;

    Ok(())
}
