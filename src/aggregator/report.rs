//! Report types: per-hop summaries and the JSON record schema.
//!
//! The JSON report is an array of [`HopRecord`] objects, one per hop, with
//! keys in the order `avg, hop, hosts, max, med, min`.

use crate::parser::HostPair;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Write;

/// Summary statistics for one hop (all zero for placeholders)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HopStats {
    pub avg: f64,
    pub med: f64,
    pub min: f64,
    pub max: f64,
}

/// Finalized data for one hop
#[derive(Debug, Clone, PartialEq)]
pub struct HopSummary {
    /// 1-based hop number
    pub hop: u32,

    /// Raw samples, or the zero placeholder when nothing answered
    pub samples: Vec<f64>,

    /// One host set per contributing line
    pub host_sets: Vec<BTreeSet<HostPair>>,

    pub stats: HopStats,

    /// True when no run produced a sample for this hop
    pub placeholder: bool,
}

impl HopSummary {
    /// Axis label used on the chart
    pub fn label(&self) -> String {
        format!("hop{}", self.hop)
    }

    /// Distinct hosts across all lines of this hop
    pub fn distinct_hosts(&self) -> BTreeSet<&HostPair> {
        self.host_sets.iter().flatten().collect()
    }

    pub fn to_record(&self) -> HopRecord {
        HopRecord {
            avg: self.stats.avg,
            hop: self.hop,
            hosts: self
                .host_sets
                .iter()
                .map(|set| set.iter().map(ToString::to_string).collect())
                .collect(),
            max: self.stats.max,
            med: self.stats.med,
            min: self.stats.min,
        }
    }
}

/// One hop object in the JSON report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HopRecord {
    pub avg: f64,
    pub hop: u32,
    /// Per-line host sets, each entry rendered as `"<hostname>, (<ip>)"`
    pub hosts: Vec<Vec<String>>,
    pub max: f64,
    pub med: f64,
    pub min: f64,
}

/// The full per-hop report, hop 1 first with no gaps
#[derive(Debug, Clone, PartialEq)]
pub struct LatencyReport {
    pub hops: Vec<HopSummary>,
}

impl LatencyReport {
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// `hop1..hopN`
    pub fn hop_labels(&self) -> Vec<String> {
        self.hops.iter().map(HopSummary::label).collect()
    }

    /// Raw (or placeholder) samples per hop, for the box traces
    pub fn sample_series(&self) -> Vec<Vec<f64>> {
        self.hops.iter().map(|h| h.samples.clone()).collect()
    }

    /// Rounded mean per hop, 0 for placeholders, for the overlay trace
    pub fn mean_series(&self) -> Vec<f64> {
        self.hops.iter().map(|h| h.stats.avg).collect()
    }

    /// JSON records; placeholders are dropped when `include_empty` is false
    pub fn to_records(&self, include_empty: bool) -> Vec<HopRecord> {
        self.hops
            .iter()
            .filter(|h| include_empty || !h.placeholder)
            .map(HopSummary::to_record)
            .collect()
    }

    /// Human-readable per-hop table
    ///
    /// **Public** - printed by `--summary`
    pub fn text_summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>4}  {:>7}  {:>10}  {:>10}  {:>10}  {:>10}  hosts",
            "hop", "samples", "avg ms", "med ms", "min ms", "max ms"
        );
        for hop in &self.hops {
            if hop.placeholder {
                let _ = writeln!(out, "{:>4}  {:>7}  {:>10}", hop.hop, 0, "*");
                continue;
            }
            let hosts: Vec<String> = hop.distinct_hosts().iter().map(|h| h.to_string()).collect();
            let _ = writeln!(
                out,
                "{:>4}  {:>7}  {:>10.3}  {:>10.3}  {:>10.3}  {:>10.3}  {}",
                hop.hop,
                hop.samples.len(),
                hop.stats.avg,
                hop.stats.med,
                hop.stats.min,
                hop.stats.max,
                hosts.join("; ")
            );
        }
        out
    }
}
