//! Error codes reported by the scorekeeper binary and session boundary.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input validation
    /// A required score field was blank
    MissingScore,
    /// A score field was not a whole number
    NotAnInteger,
    /// Tricks do not add up to the round number
    TrickTotal,
    /// A score or total would overflow
    ScoreOutOfRange,
    /// Player or entrant count outside the allowed range
    InvalidRoster,
    /// Round limit or round number outside the allowed range
    InvalidRound,
    /// Game already finished
    GameOver,
    /// Score entered against a bye
    ByeSlot,
    /// Accessor used against the wrong game mode
    WrongMode,
    /// Submitted scores don't match the roster size
    ScoreMismatch,
    /// General validation error
    ValidationError,

    // Not found
    PlayerNotFound,
    MatchNotFound,
    TournamentNotFound,
    NoActiveGame,
    NotFound,

    // System
    /// Tournament store I/O failure
    StoreIo,
    /// Tournament store contents could not be (de)serialized
    StoreCorrupt,
    /// Store lock could not be taken
    StoreLocked,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingScore => "MISSING_SCORE",
            Self::NotAnInteger => "NOT_AN_INTEGER",
            Self::TrickTotal => "TRICK_TOTAL",
            Self::ScoreOutOfRange => "SCORE_OUT_OF_RANGE",
            Self::InvalidRoster => "INVALID_ROSTER",
            Self::InvalidRound => "INVALID_ROUND",
            Self::GameOver => "GAME_OVER",
            Self::ByeSlot => "BYE_SLOT",
            Self::WrongMode => "WRONG_MODE",
            Self::ScoreMismatch => "SCORE_MISMATCH",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::MatchNotFound => "MATCH_NOT_FOUND",
            Self::TournamentNotFound => "TOURNAMENT_NOT_FOUND",
            Self::NoActiveGame => "NO_ACTIVE_GAME",
            Self::NotFound => "NOT_FOUND",

            Self::StoreIo => "STORE_IO",
            Self::StoreCorrupt => "STORE_CORRUPT",
            Self::StoreLocked => "STORE_LOCKED",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
