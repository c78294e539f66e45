//! Derived reports over loaded snapshots.
//!
//! This module transforms parsed snapshots into:
//! - Per-player time series of a statistic (for graphs)
//! - Display-name change histories
//! - Per-statistic leaderboards

pub mod leaderboard;
pub mod names;
pub mod timeseries;

// Re-export main types and functions
pub use leaderboard::{build_leaderboards, rank_by_field, render_leaderboards, Leaderboard, LeaderboardEntry};
pub use names::{render_name_changes, track_name_changes, NameHistory};
pub use timeseries::{extract_all_series, extract_series, final_labels, Series};
