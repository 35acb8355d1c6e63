use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use traceroute_stats::aggregator::{
    aggregate_texts, scan_hop, summarize_hops, HopStats,
};
use traceroute_stats::parser::HostPair;

const RUN_1: &str = "traceroute to example.com (93.184.216.34), 6 hops max, 60 byte packets
 1  gw.home (192.168.0.1)  1.012 ms  0.988 ms  1.104 ms
 2  * * *
 3  isp-edge.net (100.64.0.1)  8.250 ms  8.500 ms  9.125 ms
 4  core-a.net (203.0.113.1)  15.000 ms core-b.net (203.0.113.2)  16.000 ms  15.500 ms
 5  peer.net (198.51.100.7)  20.0 ms
 6  * * *
";

const RUN_2: &str = "traceroute to example.com (93.184.216.34), 6 hops max, 60 byte packets
 1  gw.home (192.168.0.1)  1.200 ms  1.150 ms  1.175 ms
 2  * * *
 3  isp-edge.net (100.64.0.1)  8.000 ms  *  8.750 ms
 4  core-a.net (203.0.113.1)  14.500 ms  14.750 ms  15.250 ms
 5  peer.net (198.51.100.7)  22.0 ms  24.0 ms
 6  * * *
";

#[test]
fn test_samples_concatenate_across_runs() {
    let report = summarize_hops(aggregate_texts([RUN_1, RUN_2], 6));
    let hop5 = &report.hops[4];

    assert_eq!(hop5.samples, vec![20.0, 22.0, 24.0]);
    assert_eq!(
        hop5.stats,
        HopStats {
            avg: 22.0,
            med: 22.0,
            min: 20.0,
            max: 24.0,
        }
    );
}

#[test]
fn test_report_always_has_max_hops_entries() {
    let report = summarize_hops(aggregate_texts([RUN_1], 10));

    assert_eq!(report.len(), 10);
    assert_eq!(report.to_records(true).len(), 10);
    let hops: Vec<u32> = report.hops.iter().map(|h| h.hop).collect();
    assert_eq!(hops, (1..=10).collect::<Vec<u32>>());

    for hop in &report.hops[5..] {
        assert!(hop.placeholder);
        assert_eq!(hop.samples, vec![0.0, 0.0]);
        assert_eq!(hop.stats, HopStats::default());
    }
}

#[test]
fn test_unreachable_tail_becomes_placeholders() {
    let run = " 1  gw (10.0.0.1)  1.0 ms\n 2  isp (10.1.0.1)  2.0 ms\n 3  far (10.2.0.1)  3.0 ms\n";
    let report = summarize_hops(aggregate_texts([run], 5));

    assert_eq!(report.len(), 5);
    assert!(!report.hops[2].placeholder);
    assert!(report.hops[3].placeholder && report.hops[4].placeholder);
    assert_eq!(report.mean_series(), vec![1.0, 2.0, 3.0, 0.0, 0.0]);
    assert_eq!(report.hop_labels()[4], "hop5");
}

#[test]
fn test_host_sets_stay_per_line() {
    let report = summarize_hops(aggregate_texts([RUN_1, RUN_2], 6));
    let hop4 = &report.hops[3];

    assert_eq!(
        hop4.host_sets,
        vec![
            BTreeSet::from([
                HostPair::new("core-a.net", "203.0.113.1"),
                HostPair::new("core-b.net", "203.0.113.2"),
            ]),
            BTreeSet::from([HostPair::new("core-a.net", "203.0.113.1")]),
        ]
    );

    // Same router in both runs still yields two entries
    assert_eq!(report.hops[0].host_sets.len(), 2);
    assert_eq!(report.hops[0].host_sets[0], report.hops[0].host_sets[1]);
}

#[test]
fn test_single_pass_matches_per_hop_scan() {
    let texts = [RUN_1, RUN_2];
    let all = aggregate_texts(texts, 8);

    for (i, acc) in all.iter().enumerate() {
        assert_eq!(acc, &scan_hop(&texts, i as u32 + 1));
    }
}

#[test]
fn test_aggregation_is_idempotent() {
    let first = summarize_hops(aggregate_texts([RUN_1, RUN_2], 6));
    let second = summarize_hops(aggregate_texts([RUN_1, RUN_2], 6));

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first.to_records(true)).unwrap(),
        serde_json::to_string(&second.to_records(true)).unwrap()
    );
}

#[test]
fn test_stats_within_sample_range() {
    let report = summarize_hops(aggregate_texts([RUN_1, RUN_2], 6));

    for hop in report.hops.iter().filter(|h| !h.placeholder) {
        let s = hop.stats;
        assert!(s.min <= s.med && s.med <= s.max, "hop {}", hop.hop);
        assert!(s.min <= s.avg && s.avg <= s.max, "hop {}", hop.hop);
    }
}

#[test]
fn test_mean_and_median_are_rounded() {
    let report = summarize_hops(aggregate_texts([RUN_1], 1));
    let hop1 = &report.hops[0];

    // (1.012 + 0.988 + 1.104) / 3 = 1.034666...
    assert_eq!(hop1.stats.avg, 1.035);
    assert_eq!(hop1.stats.med, 1.012);
    assert_eq!(hop1.stats.min, 0.988);
    assert_eq!(hop1.stats.max, 1.104);
}

#[test]
fn test_omit_empty_drops_placeholders_only() {
    let report = summarize_hops(aggregate_texts([RUN_1], 6));
    let hops: Vec<u32> = report.to_records(false).iter().map(|r| r.hop).collect();
    assert_eq!(hops, vec![1, 3, 4, 5]);
}

#[test]
fn test_tied_mean_rounds_to_even() {
    let report = summarize_hops(aggregate_texts([" 1  gw (10.0.0.1)  1.000 ms  1.001 ms\n"], 1));
    let hop1 = &report.hops[0];

    assert_eq!(hop1.stats.avg, 1.0);
    assert_eq!(hop1.stats.med, 1.0);
}
