//! Output writers for save files and charts.
//!
//! This module handles writing data to disk:
//! - JSON save files (atomic replace)
//! - PNG charts

pub mod json;
pub mod png;

// Re-export main functions
pub use json::{read_roster, write_roster};
pub use png::{chart_path, write_png};
