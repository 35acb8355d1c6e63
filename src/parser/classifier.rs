//! Traceroute line classifier.
//!
//! Decides whether a single line of traceroute output belongs to a hop and
//! extracts its probe latencies and responding hosts. Three rules apply:
//!
//! - hop prefix: the hop number, optionally preceded by one space, then a space
//! - latency: a decimal number, optional whitespace, then `ms`
//! - host pair: `[A-Za-z0-9.-]+`, a space, then a dotted quad in parentheses
//!
//! A line is a data point only when all three rules fire. Anything else,
//! including `* * *` timeouts, is a [`LineMatch::NoMatch`].

use super::schema::{HopLine, HostPair, LineMatch, NoMatchReason};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static LATENCY_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.\d+)\s*ms").expect("latency rule is a valid regex"));

static HOST_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z0-9.-]+) \((\d+\.\d+\.\d+\.\d+)\)").expect("host rule is a valid regex")
});

/// Classify `line` against hop `hop` (1-based)
///
/// **Public** - contract entry point, one line and one hop at a time
///
/// # Example
/// ```
/// use traceroute_stats::parser::classify_line;
///
/// let m = classify_line(" 3  host-a (192.168.1.1)  10.5 ms  11.0 ms", 3);
/// assert!(m.is_match());
/// assert!(!classify_line(" 3  * * *", 3).is_match());
/// ```
pub fn classify_line(line: &str, hop: u32) -> LineMatch {
    match leading_hop(line) {
        Some(digits) if digits == hop.to_string() => extract(line, hop),
        _ => LineMatch::NoMatch(NoMatchReason::HopPrefix),
    }
}

/// Classify `line` against whichever hop its prefix names
///
/// **Public** - used by the aggregator to bucket a file in one pass
///
/// Equivalent to trying [`classify_line`] for every hop: a hop number only
/// matches its own canonical decimal form, so `03` or `+3` never match.
pub fn classify_any(line: &str) -> Option<HopLine> {
    let digits = leading_hop(line)?;
    if digits.starts_with('0') {
        return None;
    }
    let hop: u32 = digits.parse().ok()?;
    extract(line, hop).into_hop_line()
}

/// Return the hop digits at the start of the line
///
/// **Private** - hop-prefix rule. At most one leading space is allowed and
/// the digits must be followed by a space, so `11 ...` never reads as hop 1.
fn leading_hop(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(' ').unwrap_or(line);
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 || !rest[end..].starts_with(' ') {
        return None;
    }
    Some(&rest[..end])
}

/// Apply the latency and host rules to a line already attributed to `hop`
///
/// **Private** - internal helper for the classify functions
fn extract(line: &str, hop: u32) -> LineMatch {
    let latencies = extract_latencies(line);
    if latencies.is_empty() {
        return LineMatch::NoMatch(NoMatchReason::NoLatency);
    }

    let hosts = extract_hosts(line);
    if hosts.is_empty() {
        return LineMatch::NoMatch(NoMatchReason::NoHost);
    }

    LineMatch::Matched(HopLine {
        hop,
        latencies,
        hosts,
    })
}

/// Latency rule
///
/// **Private** - internal extraction logic
fn extract_latencies(line: &str) -> Vec<f64> {
    LATENCY_RULE
        .captures_iter(line)
        .filter_map(|caps| caps[1].parse::<f64>().ok())
        .collect()
}

/// Host-pair rule
///
/// **Private** - internal extraction logic
fn extract_hosts(line: &str) -> BTreeSet<HostPair> {
    HOST_RULE
        .captures_iter(line)
        .map(|caps| HostPair::new(&caps[1], &caps[2]))
        .collect()
}
