//! Fold classified lines from every run into per-hop accumulators.
//!
//! Each run file is scanned once and its lines bucketed by hop, which gives
//! the same per-hop result as rescanning every file once per hop.

use crate::parser::{classify_any, classify_line, HopLine, HostPair};
use crate::runs::RunFile;
use log::debug;
use std::collections::BTreeSet;

/// Raw samples and host sets collected for one hop across all runs
#[derive(Debug, Clone, PartialEq)]
pub struct HopAccumulator {
    /// 1-based hop number
    pub hop: u32,

    /// Every latency sample, in run order then line order
    pub samples: Vec<f64>,

    /// One deduplicated host set per contributing line
    pub host_sets: Vec<BTreeSet<HostPair>>,
}

impl HopAccumulator {
    pub fn new(hop: u32) -> Self {
        Self {
            hop,
            samples: Vec::new(),
            host_sets: Vec::new(),
        }
    }

    /// Fold one classified line into this hop
    ///
    /// Host sets are kept per line, never merged across lines.
    pub fn push_line(&mut self, line: HopLine) {
        debug_assert_eq!(line.hop, self.hop);
        self.samples.extend(line.latencies);
        self.host_sets.push(line.hosts);
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Aggregate run files into `max_hops` accumulators, hop 1 first
///
/// **Public** - main entry point for aggregation
///
/// Runs are consumed in the order given (discovery sorts them by index).
pub fn aggregate_runs(runs: &[RunFile], max_hops: u32) -> Vec<HopAccumulator> {
    let mut hops = empty_accumulators(max_hops);

    for run in runs {
        let text = run.read_lossy();
        let matched = fold_text(&mut hops, &text);
        debug!("Run {}: {} lines attributed to hops", run.index, matched);
    }

    hops
}

/// Aggregate in-memory run outputs
///
/// **Public** - pure counterpart of `aggregate_runs`
pub fn aggregate_texts<'a, I>(texts: I, max_hops: u32) -> Vec<HopAccumulator>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut hops = empty_accumulators(max_hops);
    for text in texts {
        fold_text(&mut hops, text);
    }
    hops
}

/// Scan every run output for a single hop
///
/// **Public** - per-hop form of aggregation; `aggregate_texts` returns the
/// same accumulator for each hop in one pass
pub fn scan_hop(texts: &[&str], hop: u32) -> HopAccumulator {
    let mut acc = HopAccumulator::new(hop);
    for text in texts {
        for line in text.lines() {
            if let Some(hop_line) = classify_line(line, hop).into_hop_line() {
                acc.push_line(hop_line);
            }
        }
    }
    acc
}

/// **Private** - one accumulator per hop, index `hop - 1`
fn empty_accumulators(max_hops: u32) -> Vec<HopAccumulator> {
    (1..=max_hops).map(HopAccumulator::new).collect()
}

/// Bucket the lines of one run into `hops`; returns how many lines matched
///
/// **Private** - internal helper. Lines naming a hop beyond the accumulator
/// range are dropped.
fn fold_text(hops: &mut [HopAccumulator], text: &str) -> usize {
    let mut matched = 0;
    for hop_line in text.lines().filter_map(classify_any) {
        let Some(acc) = hops.get_mut(hop_line.hop as usize - 1) else {
            continue;
        };
        acc.push_line(hop_line);
        matched += 1;
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUN: &str = "traceroute to example.com (93.184.216.34), 5 hops max, 60 byte packets
 1  gw (192.168.0.1)  1.100 ms  1.200 ms  1.300 ms
 2  * * *
 3  r3.isp.net (10.3.0.1)  9.5 ms r3b.isp.net (10.3.0.2)  9.7 ms  9.9 ms
";

    #[test]
    fn test_aggregate_buckets_by_hop() {
        let hops = aggregate_texts([RUN], 5);

        assert_eq!(hops.len(), 5);
        assert_eq!(hops[0].samples, vec![1.1, 1.2, 1.3]);
        assert!(hops[1].is_empty());
        assert_eq!(hops[2].samples, vec![9.5, 9.7, 9.9]);
        assert_eq!(hops[2].host_sets.len(), 1);
        assert_eq!(hops[2].host_sets[0].len(), 2);
        assert!(hops[3].is_empty() && hops[4].is_empty());
    }

    #[test]
    fn test_hops_beyond_limit_are_dropped() {
        let hops = aggregate_texts([RUN], 2);
        assert_eq!(hops.len(), 2);
        assert_eq!(hops[0].samples.len(), 3);
    }

    #[test]
    fn test_zero_max_hops_yields_nothing() {
        assert!(aggregate_texts([RUN], 0).is_empty());
    }
}
