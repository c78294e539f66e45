//! Save file schema definitions.
//!
//! This module defines the structure of the JSON save files written by the
//! game server (and by `roster-stats init`):
//!
//! ```json
//! { "players": { "<player id>": { "name": "...", "score": 0, ... } } }
//! ```
//!
//! Player order inside `players` is preserved on load and on save.

use crate::utils::error::ParseError;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// Opaque player identifier, the join key across snapshots
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        PlayerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for PlayerId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<String> for PlayerId {
    fn from(value: String) -> Self {
        PlayerId(value)
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        PlayerId(value.to_string())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Statistics record of one player in one snapshot
///
/// Every field is required. Counters are unsigned, so a negative counter
/// is rejected at load time. Score is signed: the game awards penalties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Display name (players may rename themselves during the event)
    pub name: String,
    pub score: i64,
    pub kills: u32,
    pub wins: u32,
    pub chests: u32,
    pub segfaults: u32,
}

impl PlayerStats {
    /// A record with the given name and every counter at zero
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            kills: 0,
            wins: 0,
            chests: 0,
            segfaults: 0,
        }
    }

    /// Value of a tracked numeric field
    pub fn get(&self, field: StatField) -> i64 {
        match field {
            StatField::Score => self.score,
            StatField::Kills => i64::from(self.kills),
            StatField::Wins => i64::from(self.wins),
            StatField::Chests => i64::from(self.chests),
            StatField::Segfaults => i64::from(self.segfaults),
        }
    }
}

/// Tracked numeric fields, shared by every report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    Score,
    Kills,
    Wins,
    Chests,
    Segfaults,
}

impl StatField {
    /// All tracked fields, in report order
    pub const ALL: [StatField; 5] = [
        StatField::Score,
        StatField::Kills,
        StatField::Wins,
        StatField::Chests,
        StatField::Segfaults,
    ];

    /// Field name as it appears in save files
    pub fn as_str(self) -> &'static str {
        match self {
            StatField::Score => "score",
            StatField::Kills => "kills",
            StatField::Wins => "wins",
            StatField::Chests => "chests",
            StatField::Segfaults => "segfaults",
        }
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseError::InvalidFormat(format!("Unknown statistic field: {}", s)))
    }
}

/// One roster snapshot: player id -> statistics, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<(PlayerId, PlayerStats)>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a player, returning the previous record if any.
    /// A replaced player keeps its original position.
    pub fn insert(&mut self, id: PlayerId, stats: PlayerStats) -> Option<PlayerStats> {
        match self.players.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, slot)) => Some(std::mem::replace(slot, stats)),
            None => {
                self.players.push((id, stats));
                None
            }
        }
    }

    pub fn get(&self, id: &PlayerId) -> Option<&PlayerStats> {
        self.players
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, stats)| stats)
    }

    pub fn contains(&self, id: &PlayerId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, &PlayerStats)> {
        self.players.iter().map(|(id, stats)| (id, stats))
    }

    pub fn ids(&self) -> impl Iterator<Item = &PlayerId> {
        self.players.iter().map(|(id, _)| id)
    }

    /// Sum of a field over every player
    pub fn total(&self, field: StatField) -> i64 {
        self.players.iter().map(|(_, stats)| stats.get(field)).sum()
    }
}

impl FromIterator<(PlayerId, PlayerStats)> for Roster {
    fn from_iter<I: IntoIterator<Item = (PlayerId, PlayerStats)>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for (id, stats) in iter {
            roster.insert(id, stats);
        }
        roster
    }
}

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.players.iter().map(|(id, stats)| (id, stats)))
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RosterVisitor)
    }
}

struct RosterVisitor;

impl<'de> Visitor<'de> for RosterVisitor {
    type Value = Roster;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of player id to player statistics")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut players = Vec::with_capacity(map.size_hint().unwrap_or(0));
        let mut seen = HashSet::new();

        while let Some((id, stats)) = map.next_entry::<PlayerId, PlayerStats>()? {
            if !seen.insert(id.clone()) {
                return Err(de::Error::custom(format!(
                    "duplicate player identifier `{}`",
                    id
                )));
            }
            players.push((id, stats));
        }

        Ok(Roster { players })
    }
}

/// Top-level save document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFile {
    pub players: Roster,
}

impl From<Roster> for SaveFile {
    fn from(players: Roster) -> Self {
        Self { players }
    }
}
