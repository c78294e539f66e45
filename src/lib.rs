//! Roster Stats
//!
//! Offline tooling for the save files of a game event: generating the
//! initial roster, graphing statistics over a history of snapshots,
//! reporting display-name changes and printing leaderboards.
//!
//! This crate provides the core implementation for the
//! `roster-stats` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! roster-stats init
//! roster-stats graphs history/
//! roster-stats names history/
//! roster-stats leaderboard save.json
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod output;
pub mod parser;
pub mod roster;
pub mod utils;
