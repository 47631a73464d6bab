//! League domain: divisions, players and teams.

mod division;
mod lineups;
mod team;

pub use division::{Division, MatchRules};
pub use lineups::{BENCH, GOALKEEPER, STARTING_ELEVEN, YOUTH_SEVEN, default_lineups};
pub use team::{JerseyNumber, League, Player, Team, TeamBuilder, TeamDetails};
