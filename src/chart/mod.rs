//! Latency chart rendering using the plotly library.
//!
//! This module converts a per-hop report into a box plot with a mean overlay.

pub mod generator;

// Re-export main types
pub use generator::{render_latency_chart, render_report, ChartConfig};
