//! Save file parsing and schema definitions.
//!
//! This module handles:
//! - Defining the save document schema
//! - Parsing individual snapshots and their filename timestamps
//! - Loading a directory of snapshots into an ordered history

pub mod history;
pub mod schema;
pub mod snapshot;

// Re-export main types
pub use history::{load_history, History, Snapshot};
pub use schema::{PlayerId, PlayerStats, Roster, SaveFile, StatField};
pub use snapshot::{is_snapshot_file, parse_snapshot, parse_timestamp};
