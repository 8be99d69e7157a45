//! Skull King score sheet: round-by-round bidding scores for 2-8 players.

use tracing::{debug, info};

use crate::domain::input::{parse_count, parse_optional_points, try_points};
use crate::domain::player::{checked_totals, normalize_roster, require_index, standings, Player};
use crate::domain::scoring::{checked_round_score, skull_king_round_score, tricks_match_round};
use crate::errors::domain::{DomainError, ValidationKind};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 8;
/// Upper bound for the configured number of rounds.
pub const MAX_ROUNDS_LIMIT: u32 = 15;
pub const DEFAULT_MAX_ROUNDS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkullKingSettings {
    /// Rounds in a full game (1..=15).
    pub max_rounds: u32,
    /// Reject rounds whose tricks don't add up to the round number.
    pub enforce_trick_total: bool,
}

impl Default for SkullKingSettings {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            enforce_trick_total: true,
        }
    }
}

/// Raw per-player input for one round, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BidEntry {
    pub bid: String,
    pub tricks: String,
    /// Blank means no bonus.
    pub bonus: String,
}

impl BidEntry {
    pub fn new(bid: impl Into<String>, tricks: impl Into<String>, bonus: impl Into<String>) -> Self {
        Self {
            bid: bid.into(),
            tricks: tricks.into(),
            bonus: bonus.into(),
        }
    }
}

/// What happened to the round counter after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAdvance {
    NextRound(u32),
    GameOver,
}

#[derive(Debug, Clone)]
pub struct SkullKingGame {
    players: Vec<Player>,
    current_round: u32,
    settings: SkullKingSettings,
    game_over: bool,
}

impl SkullKingGame {
    pub fn new<S: AsRef<str>>(names: &[S], settings: SkullKingSettings) -> Result<Self, DomainError> {
        if !(1..=MAX_ROUNDS_LIMIT).contains(&settings.max_rounds) {
            return Err(DomainError::validation(
                ValidationKind::RoundLimit,
                format!(
                    "Number of rounds must be between 1 and {MAX_ROUNDS_LIMIT}, got {}.",
                    settings.max_rounds
                ),
            ));
        }
        let names = normalize_roster(names, MIN_PLAYERS..=MAX_PLAYERS, ValidationKind::PlayerCount)?;
        debug!(players = names.len(), max_rounds = settings.max_rounds, "Skull King game started");
        Ok(Self {
            players: names.into_iter().map(Player::new).collect(),
            current_round: 1,
            settings,
            game_over: false,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn max_rounds(&self) -> u32 {
        self.settings.max_rounds
    }

    pub fn settings(&self) -> SkullKingSettings {
        self.settings
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Round score for the current round. Pure; does not touch totals.
    pub fn calculate_round_score(&self, bid: i32, tricks_won: i32, bonus: i32) -> i32 {
        skull_king_round_score(self.current_round, bid, tricks_won, bonus)
    }

    /// Add one already-computed score per player and advance the round.
    ///
    /// Fails without touching any total when the game is over, when the
    /// number of scores differs from the number of players, or when a total
    /// would overflow.
    pub fn submit_round(&mut self, scores: &[i32]) -> Result<RoundAdvance, DomainError> {
        if self.game_over {
            return Err(DomainError::validation(
                ValidationKind::GameOver,
                "The game is over; reset to play again.",
            ));
        }
        if scores.len() != self.players.len() {
            return Err(DomainError::mismatch(self.players.len(), scores.len()));
        }

        let totals = checked_totals(&self.players, scores)?;
        for (player, total) in self.players.iter_mut().zip(totals) {
            player.total_score = total;
        }

        if self.current_round >= self.settings.max_rounds {
            self.game_over = true;
            info!(rounds = self.current_round, "Skull King game over");
            Ok(RoundAdvance::GameOver)
        } else {
            self.current_round += 1;
            debug!(round = self.current_round, "Moving to next round");
            Ok(RoundAdvance::NextRound(self.current_round))
        }
    }

    /// Parse raw bid/tricks/bonus input, score every player and submit.
    ///
    /// Returns the per-player round scores that were added.
    pub fn score_round(&mut self, entries: &[BidEntry]) -> Result<Vec<i32>, DomainError> {
        if entries.len() != self.players.len() {
            return Err(DomainError::mismatch(self.players.len(), entries.len()));
        }

        let mut parsed = Vec::with_capacity(entries.len());
        for (player, entry) in self.players.iter().zip(entries) {
            let bid = parse_count(&entry.bid, "bid", &player.name)?;
            let tricks = parse_count(&entry.tricks, "tricks won", &player.name)?;
            let bonus = parse_optional_points(&entry.bonus, "bonus", &player.name)?;
            parsed.push((bid, tricks, bonus));
        }

        if self.settings.enforce_trick_total {
            let tricks: Vec<i32> = parsed.iter().map(|&(_, t, _)| t).collect();
            if !tricks_match_round(self.current_round, &tricks) {
                let total: i64 = tricks.iter().map(|&t| i64::from(t)).sum();
                return Err(DomainError::validation(
                    ValidationKind::TrickTotal,
                    format!(
                        "Total tricks ({total}) must equal the round number ({}).",
                        self.current_round
                    ),
                ));
            }
        }

        let mut scores = Vec::with_capacity(parsed.len());
        for (player, &(bid, tricks, bonus)) in self.players.iter().zip(&parsed) {
            let score = checked_round_score(self.current_round, bid, tricks, bonus).ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::ScoreOutOfRange,
                    format!("The round score for {} is out of range.", player.name),
                )
            })?;
            scores.push(score);
        }
        self.submit_round(&scores)?;
        Ok(scores)
    }

    /// Zero every total, go back to round 1 and clear game over. The roster
    /// is kept. Built as a fresh roster and swapped in with one assignment.
    pub fn reset_game(&mut self) {
        let players = self
            .players
            .iter()
            .map(|p| Player {
                total_score: 0,
                ..p.clone()
            })
            .collect();
        *self = Self {
            players,
            current_round: 1,
            settings: self.settings,
            game_over: false,
        };
        debug!("Skull King game reset");
    }

    /// Rename a player. Names stay non-blank and unique, as at setup.
    pub fn rename_player(&mut self, index: usize, name: &str) -> Result<(), DomainError> {
        require_index(&self.players, index)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::BlankName,
                "Player names cannot be empty.",
            ));
        }
        let taken = self
            .players
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && p.name == name);
        if taken {
            return Err(DomainError::validation(
                ValidationKind::DuplicateName,
                format!("Name '{name}' is used more than once."),
            ));
        }
        self.players[index].name = name.to_string();
        Ok(())
    }

    /// Remove a player. The roster never drops below the two-player minimum.
    pub fn remove_player(&mut self, index: usize) -> Result<Player, DomainError> {
        require_index(&self.players, index)?;
        if self.players.len() <= MIN_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::PlayerCount,
                format!("Skull King needs at least {MIN_PLAYERS} players."),
            ));
        }
        Ok(self.players.remove(index))
    }

    /// Replace a total by hand. A non-number keeps the old total and
    /// returns `false`.
    pub fn override_total(&mut self, index: usize, raw: &str) -> Result<bool, DomainError> {
        require_index(&self.players, index)?;
        match try_points(raw) {
            Some(value) => {
                self.players[index].total_score = value;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Players ranked by total, highest first.
    pub fn leaderboard(&self) -> Vec<Player> {
        standings(&self.players)
    }
}
