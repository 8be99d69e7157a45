//! The live session: which game is being played and where finished
//! tournaments go.

use tracing::{debug, info};

use crate::config::engine::EngineConfig;
use crate::domain::bracket::{Bracket, BracketPhase};
use crate::domain::game_mode::GameMode;
use crate::domain::result::TournamentResult;
use crate::domain::simple::{RoundLimit, SimpleScoring};
use crate::domain::skull_king::{SkullKingGame, SkullKingSettings};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::store::{FileStore, TournamentStore};

/// The game currently in progress, one variant per mode.
#[derive(Debug)]
pub enum ActiveGame {
    Simple(SimpleScoring),
    SkullKing(SkullKingGame),
    Tournament(Bracket),
}

impl ActiveGame {
    pub fn mode(&self) -> GameMode {
        match self {
            ActiveGame::Simple(_) => GameMode::SimpleScoring,
            ActiveGame::SkullKing(_) => GameMode::SkullKing,
            ActiveGame::Tournament(_) => GameMode::Tournament,
        }
    }
}

/// Owns the active game and the tournament store. Consumers borrow the
/// engine they need through the typed accessors.
pub struct Session {
    config: EngineConfig,
    active: Option<ActiveGame>,
    store: Box<dyn TournamentStore>,
}

impl Session {
    pub fn new(config: EngineConfig, store: Box<dyn TournamentStore>) -> Self {
        Self {
            config,
            active: None,
            store,
        }
    }

    /// Session backed by a [`FileStore`] in the configured data directory.
    pub fn with_file_store(config: EngineConfig) -> Self {
        let store = FileStore::new(config.data_dir.clone(), config.retention);
        Self::new(config, Box::new(store))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &dyn TournamentStore {
        self.store.as_ref()
    }

    pub fn active_mode(&self) -> Option<GameMode> {
        self.active.as_ref().map(ActiveGame::mode)
    }

    pub fn start_simple<S: AsRef<str>>(&mut self, names: &[S], limit: RoundLimit) -> Result<(), DomainError> {
        let game = SimpleScoring::new(names, limit)?;
        self.replace(ActiveGame::Simple(game));
        Ok(())
    }

    /// Start Skull King. `max_rounds` overrides the configured default.
    pub fn start_skull_king<S: AsRef<str>>(
        &mut self,
        names: &[S],
        max_rounds: Option<u32>,
    ) -> Result<(), DomainError> {
        let settings = SkullKingSettings {
            max_rounds: max_rounds.unwrap_or(self.config.skull_king_rounds),
            ..self.config.skull_king_settings()
        };
        let game = SkullKingGame::new(names, settings)?;
        self.replace(ActiveGame::SkullKing(game));
        Ok(())
    }

    pub fn start_tournament<S: AsRef<str>>(
        &mut self,
        title: &str,
        names: &[S],
        auto_generate: bool,
        seed: Option<u64>,
    ) -> Result<(), DomainError> {
        let mut bracket = Bracket::new(title, seed);
        bracket.seed(names, auto_generate)?;
        self.replace(ActiveGame::Tournament(bracket));
        Ok(())
    }

    pub fn simple_mut(&mut self) -> Result<&mut SimpleScoring, DomainError> {
        match self.active_mut(GameMode::SimpleScoring)? {
            ActiveGame::Simple(game) => Ok(game),
            other => Err(wrong_mode(other.mode(), GameMode::SimpleScoring)),
        }
    }

    pub fn skull_king_mut(&mut self) -> Result<&mut SkullKingGame, DomainError> {
        match self.active_mut(GameMode::SkullKing)? {
            ActiveGame::SkullKing(game) => Ok(game),
            other => Err(wrong_mode(other.mode(), GameMode::SkullKing)),
        }
    }

    pub fn bracket_mut(&mut self) -> Result<&mut Bracket, DomainError> {
        match self.active_mut(GameMode::Tournament)? {
            ActiveGame::Tournament(bracket) => Ok(bracket),
            other => Err(wrong_mode(other.mode(), GameMode::Tournament)),
        }
    }

    /// Snapshot the finished bracket, hand it to the store and end the game.
    ///
    /// Storage failures are logged by the store and do not fail this call.
    pub fn finish_tournament(&mut self, date: &str) -> Result<TournamentResult, DomainError> {
        let bracket = self.bracket_mut()?;
        if bracket.phase() != BracketPhase::Finished {
            return Err(DomainError::validation_other(format!(
                "Tournament '{}' still has matches to play.",
                bracket.title()
            )));
        }
        let result = bracket.result(date)?;
        self.store.save(&result);
        self.active = None;
        info!(tournament_id = %result.id, title = %result.title, "Tournament recorded");
        Ok(result)
    }

    /// Drop the active game, returning its mode.
    pub fn end_game(&mut self) -> Option<GameMode> {
        let mode = self.active.take().map(|g| g.mode());
        if let Some(mode) = mode {
            debug!(%mode, "Game ended");
        }
        mode
    }

    /// Saved tournaments, newest first. Empty when history can't be read.
    pub fn past_tournaments(&self) -> Vec<TournamentResult> {
        self.store.load_all_or_empty()
    }

    fn replace(&mut self, game: ActiveGame) {
        if let Some(previous) = self.active.replace(game) {
            debug!(mode = %previous.mode(), "Replacing unfinished game");
        }
    }

    fn active_mut(&mut self, wanted: GameMode) -> Result<&mut ActiveGame, DomainError> {
        self.active.as_mut().ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::ActiveGame,
                format!("No game in progress; start a {wanted} game first."),
            )
        })
    }
}

fn wrong_mode(active: GameMode, wanted: GameMode) -> DomainError {
    DomainError::validation(
        ValidationKind::WrongMode,
        format!("The active game is {active}, not {wanted}."),
    )
}
