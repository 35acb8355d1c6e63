//! Latency box-plot generation using plotly.
//!
//! One box trace per hop, labelled `hop1..hopN`, plus a marker trace of the
//! per-hop mean over the same labels. The figure is returned as a
//! self-contained HTML document; writing it is left to `output`.

use crate::aggregator::LatencyReport;
use crate::utils::error::ChartError;
use log::info;
use plotly::color::NamedColor;
use plotly::common::{Marker, Mode, Title};
use plotly::layout::{Axis, Layout};
use plotly::{BoxPlot, Plot, Scatter};

/// Chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub mean_trace_name: String,
    pub marker_size: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Latency Range Box Plot".to_string(),
            x_title: "Hops".to_string(),
            y_title: "Latency Range".to_string(),
            mean_trace_name: "Avg Latency".to_string(),
            marker_size: 6,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Render the chart for a finished report
///
/// **Public** - convenience over `render_latency_chart`
pub fn render_report(
    report: &LatencyReport,
    config: Option<&ChartConfig>,
) -> Result<String, ChartError> {
    render_latency_chart(
        &report.hop_labels(),
        &report.sample_series(),
        &report.mean_series(),
        config,
    )
}

/// Render box traces plus a mean overlay to an HTML document
///
/// **Public** - narrow rendering interface
///
/// # Errors
/// * `ChartError::NoHops` - nothing to draw
/// * `ChartError::MismatchedSeries` - labels, samples and means disagree in length
pub fn render_latency_chart(
    labels: &[String],
    samples: &[Vec<f64>],
    means: &[f64],
    config: Option<&ChartConfig>,
) -> Result<String, ChartError> {
    if labels.is_empty() {
        return Err(ChartError::NoHops);
    }
    if labels.len() != samples.len() || labels.len() != means.len() {
        return Err(ChartError::MismatchedSeries {
            labels: labels.len(),
            samples: samples.len(),
            means: means.len(),
        });
    }

    let default_config = ChartConfig::default();
    let config = config.unwrap_or(&default_config);

    info!("Rendering chart with {} hops", labels.len());

    let mut plot = Plot::new();
    for (label, hop_samples) in labels.iter().zip(samples) {
        let trace = BoxPlot::<f64, f64>::new(hop_samples.clone()).name(label);
        plot.add_trace(trace);
    }

    let mean_trace = Scatter::new(labels.to_vec(), means.to_vec())
        .mode(Mode::Markers)
        .marker(
            Marker::new()
                .color(NamedColor::Black)
                .size(config.marker_size),
        )
        .name(&config.mean_trace_name);
    plot.add_trace(mean_trace);

    plot.set_layout(
        Layout::new()
            .title(Title::with_text(&config.title))
            .x_axis(Axis::new().title(Title::with_text(&config.x_title)))
            .y_axis(Axis::new().title(Title::with_text(&config.y_title))),
    );

    Ok(plot.to_html())
}
