//! The game modes a session can host.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    SimpleScoring,
    SkullKing,
    Tournament,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [
        GameMode::SimpleScoring,
        GameMode::SkullKing,
        GameMode::Tournament,
    ];

    pub fn title(self) -> &'static str {
        match self {
            GameMode::SimpleScoring => "Simple Scoring",
            GameMode::SkullKing => "Skull King",
            GameMode::Tournament => "Tournament",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            GameMode::SimpleScoring => "Track points round by round",
            GameMode::SkullKing => "Bids, tricks and bonuses",
            GameMode::Tournament => "Single-elimination bracket",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
