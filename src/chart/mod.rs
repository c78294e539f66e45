//! Chart rendering for the graph report.
//!
//! Charts are built as SVG documents, one per statistic, and rasterized to
//! PNG for output.

pub mod generator;
pub mod raster;

// Re-export main types
pub use generator::{format_time, generate_line_chart, ChartConfig};
pub use raster::rasterize_png;
