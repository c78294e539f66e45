//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod graphs;
pub mod init;
pub mod leaderboard;
pub mod models;
pub mod names;
pub mod utils;

// Re-export main command functions
pub use graphs::{execute_graphs, render_charts, validate_graph_args};
pub use init::execute_init;
pub use leaderboard::{build_leaderboard_report, execute_leaderboard};
pub use models::{GraphArgs, InitArgs, LeaderboardArgs, NamesArgs};
pub use names::{build_name_report, execute_names};
pub use utils::{display_version, validate_save_file};
