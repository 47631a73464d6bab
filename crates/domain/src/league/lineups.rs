//! Canned lineups for the team template catalog.

use crate::catalog::TemplateCatalog;
use crate::part::Part;

use super::{JerseyNumber, Player};

pub const GOALKEEPER: &str = "goalkeeper";
pub const STARTING_ELEVEN: &str = "starting-eleven";
pub const YOUTH_SEVEN: &str = "youth-seven";
pub const BENCH: &str = "bench";

const ELEVEN_POSITIONS: [&str; 11] = [
    "Portero",
    "Lateral derecho",
    "Defensa central",
    "Defensa central",
    "Lateral izquierdo",
    "Mediocentro",
    "Extremo derecho",
    "Interior",
    "Delantero centro",
    "Mediapunta",
    "Extremo izquierdo",
];

const SEVEN_POSITIONS: [&str; 7] = [
    "Portero",
    "Defensa derecho",
    "Defensa izquierdo",
    "Mediocentro",
    "Volante derecho",
    "Volante izquierdo",
    "Delantero",
];

fn numbered(positions: &[&str], first: u8) -> Vec<Player> {
    positions
        .iter()
        .zip(first..)
        .map(|(position, number)| Part::new(*position, JerseyNumber::new(number)))
        .collect()
}

/// Catalog preloaded with the standard lineups.
///
/// Lineups are numbered from 1, except the bench which uses 12 to 18 so it
/// can be combined with the starting eleven.
pub fn default_lineups() -> TemplateCatalog<JerseyNumber> {
    let mut catalog = TemplateCatalog::new();
    catalog.store(GOALKEEPER, Part::new("Portero", JerseyNumber::new(1)));
    catalog.store(STARTING_ELEVEN, numbered(&ELEVEN_POSITIONS, 1));
    catalog.store(YOUTH_SEVEN, numbered(&SEVEN_POSITIONS, 1));
    catalog.store(BENCH, numbered(&["Suplente"; 7], 12));
    catalog
}
