#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod state;
pub mod store;

// Re-exports for public API
pub use config::engine::EngineConfig;
pub use domain::{
    Bracket, BracketPhase, GameMode, RankedTeam, RoundLimit, SimpleScoring, SkullKingGame,
    SkullKingSettings, TournamentResult,
};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use state::{ActiveGame, Session};
pub use store::{FileStore, MemoryStore, StoreError, TournamentStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    scorekeeper_test_support::logging::init();
}
