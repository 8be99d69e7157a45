//! Domain layer: pure scoring engines and the types they share.

pub mod bracket;
pub mod game_mode;
pub mod input;
pub mod player;
pub mod result;
pub mod scoring;
pub mod simple;
pub mod skull_king;

#[cfg(test)]
mod tests_props_bracket;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_simple;

// Re-exports for ergonomics
pub use bracket::{AdvanceOutcome, Bracket, BracketMatch, BracketPhase, Elimination, MatchId, Slot};
pub use game_mode::GameMode;
pub use player::Player;
pub use result::{RankedTeam, TournamentResult};
pub use simple::{RoundLimit, SimpleAdvance, SimpleScoring};
pub use skull_king::{BidEntry, RoundAdvance, SkullKingGame, SkullKingSettings};
