//! Traceroute text parsing.
//!
//! This module handles:
//! - Attributing raw output lines to hop numbers
//! - Extracting probe latencies and responding hosts
//! - Defining the per-line result types

pub mod classifier;
pub mod schema;

// Re-export main types
pub use classifier::{classify_any, classify_line};
pub use schema::{HopLine, HostPair, LineMatch, NoMatchReason};
