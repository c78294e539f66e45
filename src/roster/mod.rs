//! Roster initialization.

pub mod generator;

pub use generator::{generate_player_id, generate_roster};
