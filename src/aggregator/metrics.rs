//! Summary statistics over per-hop latency samples.
//!
//! Mean and median are rounded to three decimals; min and max are kept as
//! sampled. Hops without a single sample become placeholders instead of
//! being dropped, so every hop from 1 to max_hops is reported.

use super::hop_builder::HopAccumulator;
use super::report::{HopStats, HopSummary, LatencyReport};
use crate::utils::config::{EMPTY_HOP_PLACEHOLDER_LEN, STAT_PRECISION};
use log::debug;

/// Summarize every accumulator, preserving hop order
///
/// **Public** - main entry point for the summarizer
pub fn summarize_hops(hops: Vec<HopAccumulator>) -> LatencyReport {
    let hops: Vec<HopSummary> = hops.into_iter().map(summarize_hop).collect();
    debug!(
        "Summarized {} hops ({} without samples)",
        hops.len(),
        hops.iter().filter(|h| h.placeholder).count()
    );
    LatencyReport { hops }
}

/// Summarize one hop
///
/// **Public** - empty accumulators yield a placeholder summary
pub fn summarize_hop(acc: HopAccumulator) -> HopSummary {
    match HopStats::from_samples(&acc.samples) {
        Some(stats) => HopSummary {
            hop: acc.hop,
            samples: acc.samples,
            host_sets: acc.host_sets,
            stats,
            placeholder: false,
        },
        None => HopSummary {
            hop: acc.hop,
            samples: vec![0.0; EMPTY_HOP_PLACEHOLDER_LEN],
            host_sets: Vec::new(),
            stats: HopStats::default(),
            placeholder: true,
        },
    }
}

impl HopStats {
    /// Compute statistics, or None when there are no samples
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        Some(Self {
            avg: round_to(mean(samples)?, STAT_PRECISION),
            med: round_to(median(samples)?, STAT_PRECISION),
            min: min(samples)?,
            max: max(samples)?,
        })
    }
}

/// Arithmetic mean
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Median; the mean of the two middle values for even-length input
pub fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

pub fn min(samples: &[f64]) -> Option<f64> {
    samples.iter().copied().reduce(f64::min)
}

pub fn max(samples: &[f64]) -> Option<f64> {
    samples.iter().copied().reduce(f64::max)
}

/// Round to `places` decimals, ties to even after scaling
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_min_max() {
        let samples = [5.5, 0.25, 9.0];
        assert_eq!(min(&samples), Some(0.25));
        assert_eq!(max(&samples), Some(9.0));
        assert_eq!(min(&[]), None);
    }

    #[test]
    fn test_round_to_three_places() {
        assert_eq!(round_to(1.23456, 3), 1.235);
        assert_eq!(round_to(10.0 / 3.0, 3), 3.333);
        assert_eq!(round_to(2.0, 3), 2.0);
    }

    #[test]
    fn test_round_to_ties_go_to_even() {
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
    }

    #[test]
    fn test_two_sample_tie_rounds_down_to_even() {
        let stats = HopStats::from_samples(&[1.000, 1.001]).unwrap();
        assert_eq!(stats.avg, 1.0);
        assert_eq!(stats.med, 1.0);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 1.001);
    }

    #[test]
    fn test_stats_round_mean_but_not_extremes() {
        let stats = HopStats::from_samples(&[1.0001, 1.0002, 1.0004]).unwrap();
        assert_eq!(stats.avg, 1.0);
        assert_eq!(stats.med, 1.0);
        assert_eq!(stats.min, 1.0001);
        assert_eq!(stats.max, 1.0004);
    }

    #[test]
    fn test_empty_hop_is_placeholder() {
        let summary = summarize_hop(HopAccumulator::new(4));
        assert!(summary.placeholder);
        assert_eq!(summary.hop, 4);
        assert_eq!(summary.samples, vec![0.0, 0.0]);
        assert_eq!(summary.stats, HopStats::default());
        assert!(summary.host_sets.is_empty());
    }
}
