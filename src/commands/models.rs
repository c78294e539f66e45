use crate::utils::config::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_GRAPHS_DIR, DEFAULT_SAVE_PATH,
    DEFAULT_UTC_OFFSET_HOURS,
};
use std::path::PathBuf;

/// Arguments for the init command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct InitArgs {
    /// Output path for the fresh save file
    pub output: PathBuf,
}

impl Default for InitArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_SAVE_PATH),
        }
    }
}

/// Arguments for the graphs command
#[derive(Debug, Clone)]
pub struct GraphArgs {
    /// Directory of `save_<timestamp>` snapshots
    pub history_dir: PathBuf,

    /// Directory receiving `<field>.png`
    pub output_dir: PathBuf,

    /// Offset of the time axis labels, in hours from UTC
    pub utc_offset_hours: i32,

    /// Chart width in pixels
    pub width: usize,

    /// Chart height in pixels
    pub height: usize,
}

impl Default for GraphArgs {
    fn default() -> Self {
        Self {
            history_dir: PathBuf::from("history"),
            output_dir: PathBuf::from(DEFAULT_GRAPHS_DIR),
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }
}

/// Arguments for the names command
#[derive(Debug, Clone)]
pub struct NamesArgs {
    pub history_dir: PathBuf,
}

/// Arguments for the leaderboard command
#[derive(Debug, Clone)]
pub struct LeaderboardArgs {
    /// Single save file to rank
    pub save: PathBuf,
}
