//! SVG line chart generation.
//!
//! Renders one polyline per player against the snapshot time axis:
//! - X axis ticks as `HH:MM` in a fixed UTC offset
//! - Y axis scaled to the data (always including zero)
//! - Legend laid out in columns below the plot, labelled by display name

use crate::aggregator::timeseries::Series;
use crate::utils::config::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_UTC_OFFSET_HOURS, LEGEND_COLUMNS,
};
use crate::utils::error::ChartError;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use log::{debug, info};

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 50.0;
const AXIS_LABEL_SPACE: f64 = 50.0;
const LEGEND_ROW_HEIGHT: f64 = 22.0;
const Y_TICKS: usize = 5;
const MAX_X_TICKS: usize = 8;

/// Line colors, cycled per player
const PALETTE: [&str; 10] = [
    "rgb(31, 119, 180)",
    "rgb(255, 127, 14)",
    "rgb(44, 160, 44)",
    "rgb(214, 39, 40)",
    "rgb(148, 103, 189)",
    "rgb(140, 86, 75)",
    "rgb(227, 119, 194)",
    "rgb(127, 127, 127)",
    "rgb(188, 189, 34)",
    "rgb(23, 190, 207)",
];

/// Line chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
    /// Offset applied to the time axis labels
    pub utc_offset_hours: i32,
    pub legend_columns: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
            legend_columns: LEGEND_COLUMNS,
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

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_utc_offset(mut self, hours: i32) -> Self {
        self.utc_offset_hours = hours;
        self
    }

    fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours * 3600).unwrap_or_else(|| Utc.fix())
    }
}

/// Maps data coordinates to SVG coordinates
struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    t_min: u64,
    t_max: u64,
    y_min: i64,
    y_max: i64,
}

impl Frame {
    fn x(&self, t: u64) -> f64 {
        if self.t_max == self.t_min {
            return self.left + self.width / 2.0;
        }
        let ratio = (t - self.t_min) as f64 / (self.t_max - self.t_min) as f64;
        self.left + ratio * self.width
    }

    /// Scaled in `f64`: the spread of two `i64` scores can exceed `i64::MAX`
    fn y(&self, v: i64) -> f64 {
        let ratio = (v as f64 - self.y_min as f64) / self.span();
        self.top + self.height - ratio * self.height
    }

    fn span(&self) -> f64 {
        self.y_max as f64 - self.y_min as f64
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Generate an SVG line chart
///
/// **Public** - main entry point for chart rendering
///
/// # Arguments
/// * `timestamps` - X values (unix seconds), ascending
/// * `series` - one entry per player, each with one value per timestamp
/// * `labels` - legend label per series
///
/// # Errors
/// * `ChartError::EmptySeries` - no timestamps
/// * `ChartError::LengthMismatch` - a series or the label list has the wrong length
pub fn generate_line_chart(
    timestamps: &[u64],
    series: &[Series],
    labels: &[String],
    config: Option<&ChartConfig>,
) -> Result<String, ChartError> {
    if timestamps.is_empty() {
        return Err(ChartError::EmptySeries);
    }
    if labels.len() != series.len() {
        return Err(ChartError::LengthMismatch {
            expected: series.len(),
            found: labels.len(),
        });
    }
    if let Some(bad) = series.iter().find(|s| s.values.len() != timestamps.len()) {
        return Err(ChartError::LengthMismatch {
            expected: timestamps.len(),
            found: bad.values.len(),
        });
    }

    let config = config.cloned().unwrap_or_default();
    info!(
        "Generating chart '{}' with {} lines over {} points",
        config.title,
        series.len(),
        timestamps.len()
    );

    let columns = config.legend_columns.max(1);
    let legend_rows = series.len().div_ceil(columns);
    let legend_height = legend_rows as f64 * LEGEND_ROW_HEIGHT + 20.0;

    let values = series.iter().flat_map(|s| s.values.iter().copied());
    let y_min = values.clone().min().unwrap_or(0).min(0);
    let mut y_max = values.max().unwrap_or(0).max(0);
    if y_max == y_min {
        y_max = y_min + 1;
    }

    let frame = Frame {
        left: MARGIN_LEFT,
        top: MARGIN_TOP,
        width: (config.width as f64 - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
        height: (config.height as f64 - MARGIN_TOP - AXIS_LABEL_SPACE - legend_height).max(1.0),
        t_min: timestamps[0],
        t_max: timestamps[timestamps.len() - 1],
        y_min,
        y_max,
    };

    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" font-family="sans-serif" font-size="12">"#,
        config.width, config.height, config.width, config.height
    ));
    svg.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        config.width, config.height
    ));
    svg.push_str(&format!(
        r#"<text x="{}" y="28" font-size="18" text-anchor="middle" font-weight="bold">{}</text>"#,
        config.width / 2,
        escape_xml(&config.title)
    ));

    render_axes(&mut svg, &frame, timestamps, &config.offset());

    for (i, (line, label)) in series.iter().zip(labels).enumerate() {
        render_line(&mut svg, &frame, timestamps, line, label, PALETTE[i % PALETTE.len()]);
    }

    render_legend(&mut svg, &frame, labels, columns, config.width);

    svg.push_str("</svg>");

    debug!("Chart generated ({} bytes)", svg.len());
    Ok(svg)
}

fn render_axes(out: &mut String, frame: &Frame, timestamps: &[u64], offset: &FixedOffset) {
    let right = frame.left + frame.width;

    // Horizontal grid + Y labels
    for i in 0..=Y_TICKS {
        let value = frame.y_min as f64 + frame.span() * i as f64 / Y_TICKS as f64;
        let y = frame.top + frame.height - frame.height * i as f64 / Y_TICKS as f64;
        out.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="rgb(220, 220, 220)"/>"#,
            frame.left, y, right, y
        ));
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" dx="-8" dy="4" text-anchor="end">{:.0}</text>"#,
            frame.left, y, value
        ));
    }

    // X ticks, evenly spread over the snapshots
    let step = timestamps.len().div_ceil(MAX_X_TICKS).max(1);
    for &t in timestamps.iter().step_by(step) {
        let x = frame.x(t);
        out.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="black"/>"#,
            x,
            frame.bottom(),
            x,
            frame.bottom() + 5.0
        ));
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
            x,
            frame.bottom() + 20.0,
            format_time(t, offset)
        ));
    }

    // Axis lines
    out.push_str(&format!(
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="black"/>"#,
        frame.left,
        frame.bottom(),
        right,
        frame.bottom()
    ));
    out.push_str(&format!(
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="black"/>"#,
        frame.left,
        frame.top,
        frame.left,
        frame.bottom()
    ));
}

fn render_line(
    out: &mut String,
    frame: &Frame,
    timestamps: &[u64],
    line: &Series,
    label: &str,
    color: &str,
) {
    let points: Vec<String> = timestamps
        .iter()
        .zip(&line.values)
        .map(|(&t, &v)| format!("{:.2},{:.2}", frame.x(t), frame.y(v)))
        .collect();

    out.push_str(&format!(
        r#"<polyline fill="none" stroke="{}" stroke-width="2" points="{}"><title>{}</title></polyline>"#,
        color,
        points.join(" "),
        escape_xml(label)
    ));

    // A single snapshot gives a zero-length line; mark the point instead
    if timestamps.len() == 1 {
        out.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="4" fill="{}"/>"#,
            frame.x(timestamps[0]),
            frame.y(line.values[0]),
            color
        ));
    }
}

fn render_legend(out: &mut String, frame: &Frame, labels: &[String], columns: usize, width: usize) {
    let top = frame.bottom() + AXIS_LABEL_SPACE;
    let column_width = width as f64 / columns as f64;

    for (i, label) in labels.iter().enumerate() {
        let x = (i % columns) as f64 * column_width + 10.0;
        let y = top + (i / columns) as f64 * LEGEND_ROW_HEIGHT;
        let color = PALETTE[i % PALETTE.len()];
        out.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="15" height="4" fill="{}"/>"#,
            x, y - 4.0, color
        ));
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}">{}</text>"#,
            x + 20.0,
            y,
            escape_xml(label)
        ));
    }
}

/// `HH:MM` of a unix timestamp in the given offset
pub fn format_time(timestamp: u64, offset: &FixedOffset) -> String {
    i64::try_from(timestamp)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.with_timezone(offset).format("%H:%M").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// Escape text for use inside SVG elements
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
