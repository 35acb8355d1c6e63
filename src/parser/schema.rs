//! Result types produced by the line classifier.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A (hostname, IPv4 address) pair reported by a router
///
/// The address is kept as the raw dotted-quad text seen in the output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HostPair {
    pub hostname: String,
    pub ip: String,
}

impl HostPair {
    pub fn new(hostname: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ip: ip.into(),
        }
    }
}

/// Renders as `"<hostname>, (<ip>)"`, the form used in the JSON report
impl fmt::Display for HostPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, ({})", self.hostname, self.ip)
    }
}

/// One line of traceroute output attributed to a hop
#[derive(Debug, Clone, PartialEq)]
pub struct HopLine {
    /// 1-based hop number
    pub hop: u32,

    /// Probe latencies in milliseconds, in line order
    pub latencies: Vec<f64>,

    /// Hosts seen on this line, deduplicated
    pub hosts: BTreeSet<HostPair>,
}

/// Why a line did not produce a data point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoMatchReason {
    /// The line does not start with the hop number followed by a space
    HopPrefix,
    /// No `<float> ms` token
    NoLatency,
    /// No `name (a.b.c.d)` token
    NoHost,
}

/// Outcome of classifying one line
#[derive(Debug, Clone, PartialEq)]
pub enum LineMatch {
    Matched(HopLine),
    NoMatch(NoMatchReason),
}

impl LineMatch {
    pub fn is_match(&self) -> bool {
        matches!(self, LineMatch::Matched(_))
    }

    pub fn into_hop_line(self) -> Option<HopLine> {
        match self {
            LineMatch::Matched(line) => Some(line),
            LineMatch::NoMatch(_) => None,
        }
    }
}
