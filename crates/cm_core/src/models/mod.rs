pub mod match_result;
pub mod player;
pub mod roster;
pub mod team;

pub use match_result::{BestPerformer, Margin, MarginUnit, MatchResult, TeamScore};
pub use player::Player;
pub use roster::{Roster, RosterPlayer, RosterTeam};
pub use team::{Team, MAX_PLAYERS};
