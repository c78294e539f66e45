//! Fresh roster generation for a new game session.

use crate::parser::schema::{PlayerId, PlayerStats, Roster};
use crate::utils::config::{DEFAULT_NAME_PREFIX, ID_ALPHABET, ID_LENGTH, ROSTER_SIZE};
use log::{debug, info};
use rand::Rng;

/// Draw one identifier: `ID_LENGTH` symbols of `ID_ALPHABET`, with replacement
pub fn generate_player_id<R: Rng + ?Sized>(rng: &mut R) -> PlayerId {
    let id: String = (0..ID_LENGTH)
        .map(|_| char::from(ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())]))
        .collect();
    PlayerId::from(id)
}

/// Generate a roster of `ROSTER_SIZE` players with zeroed statistics
///
/// **Public** - main entry point for `init`
///
/// Player `i` (1-based) is named `DEFAULT<i>`. Identifiers that collide with
/// an already generated one are drawn again, so every id is distinct.
pub fn generate_roster<R: Rng + ?Sized>(rng: &mut R) -> Roster {
    let mut roster = Roster::new();

    for i in 1..=ROSTER_SIZE {
        let mut id = generate_player_id(rng);
        while roster.contains(&id) {
            debug!("Identifier collision on {}, drawing again", id);
            id = generate_player_id(rng);
        }
        roster.insert(id, PlayerStats::new(format!("{}{}", DEFAULT_NAME_PREFIX, i)));
    }

    info!("Generated roster with {} players", roster.len());
    roster
}
