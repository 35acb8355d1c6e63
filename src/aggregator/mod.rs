//! Aggregation of classified lines into per-hop statistics.
//!
//! This module transforms run outputs into:
//! - Per-hop sample and host-set accumulators
//! - Summary statistics (mean, median, min, max)
//! - The ordered per-hop report consumed by the emitters

pub mod hop_builder;
pub mod metrics;
pub mod report;

// Re-export main types and functions
pub use hop_builder::{aggregate_runs, aggregate_texts, scan_hop, HopAccumulator};
pub use metrics::{summarize_hop, summarize_hops};
pub use report::{HopRecord, HopStats, HopSummary, LatencyReport};
