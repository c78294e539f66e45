//! Roster Stats CLI
//!
//! Offline tooling for game event save files.
//! Generates rosters, graphs, name-change reports and leaderboards.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use roster_stats::commands::{
    display_version, execute_graphs, execute_init, execute_leaderboard, execute_names,
    validate_graph_args, validate_save_file, GraphArgs, InitArgs, LeaderboardArgs, NamesArgs,
};
use roster_stats::utils::config::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_GRAPHS_DIR, DEFAULT_SAVE_PATH,
    DEFAULT_UTC_OFFSET_HOURS,
};

/// Roster Stats - save file tooling for game events
#[derive(Parser, Debug)]
#[command(name = "roster-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a fresh save with random player ids and zeroed statistics
    Init {
        /// Output path for the save file
        #[arg(short, long, default_value = DEFAULT_SAVE_PATH)]
        output: PathBuf,
    },

    /// Plot every statistic over a history of snapshots
    Graphs {
        /// Directory of save_<timestamp> snapshots
        history_folder: PathBuf,

        /// Directory receiving one <field>.png per statistic
        #[arg(short, long, env = "ROSTER_GRAPHS_DIR", default_value = DEFAULT_GRAPHS_DIR)]
        output_dir: PathBuf,

        /// Offset of the time axis labels, in hours from UTC
        #[arg(long, default_value_t = DEFAULT_UTC_OFFSET_HOURS, allow_hyphen_values = true)]
        utc_offset: i32,

        /// Chart width in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
        width: usize,

        /// Chart height in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
        height: usize,
    },

    /// Print each player's display-name history
    Names {
        /// Directory of save_<timestamp> snapshots
        history_folder: PathBuf,
    },

    /// Print per-statistic leaderboards of a single save
    Leaderboard {
        /// Save file to rank
        save: PathBuf,
    },

    /// Validate a save file and print a summary
    Validate {
        /// Save file to check
        save: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Init { output } => {
            execute_init(InitArgs { output })?;
        }

        Commands::Graphs {
            history_folder,
            output_dir,
            utc_offset,
            width,
            height,
        } => {
            let args = GraphArgs {
                history_dir: history_folder,
                output_dir,
                utc_offset_hours: utc_offset,
                width,
                height,
            };

            // Validate args first
            validate_graph_args(&args)?;

            execute_graphs(args)?;
        }

        Commands::Names { history_folder } => {
            execute_names(NamesArgs {
                history_dir: history_folder,
            })?;
        }

        Commands::Leaderboard { save } => {
            execute_leaderboard(LeaderboardArgs { save })?;
        }

        Commands::Validate { save } => {
            validate_save_file(&save)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
