//! Simple scoring: free-form point deltas per round, for a fixed number of
//! rounds or indefinitely.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::domain::input::{parse_points, try_points};
use crate::domain::player::{checked_totals, normalize_roster, standings, Player};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

pub const MAX_PLAYERS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundLimit {
    /// Game completes after this many rounds.
    Fixed(u32),
    Indefinite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleAdvance {
    NextRound(u32),
    Complete,
}

#[derive(Debug, Clone)]
pub struct SimpleScoring {
    players: Vec<Player>,
    pending: HashMap<String, String>,
    current_round: u32,
    limit: RoundLimit,
    complete: bool,
}

impl SimpleScoring {
    pub fn new<S: AsRef<str>>(names: &[S], limit: RoundLimit) -> Result<Self, DomainError> {
        if limit == RoundLimit::Fixed(0) {
            return Err(DomainError::validation(
                ValidationKind::RoundLimit,
                "A fixed-length game needs at least one round.",
            ));
        }
        let names = normalize_roster(names, 1..=MAX_PLAYERS, ValidationKind::PlayerCount)?;
        Ok(Self {
            players: names.into_iter().map(Player::new).collect(),
            pending: HashMap::new(),
            current_round: 1,
            limit,
            complete: false,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn limit(&self) -> RoundLimit {
        self.limit
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn total(&self, name: &str) -> Option<i32> {
        self.players
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.total_score)
    }

    /// Stash a participant's typed points for the round in progress.
    pub fn enter_points(&mut self, name: &str, raw: impl Into<String>) -> Result<(), DomainError> {
        self.require_player(name)?;
        self.pending.insert(name.to_string(), raw.into());
        Ok(())
    }

    pub fn pending_points(&self, name: &str) -> Option<&str> {
        self.pending.get(name).map(String::as_str)
    }

    /// Submit whatever has been entered via [`Self::enter_points`]. Pending
    /// input is cleared only when the submission succeeds.
    pub fn submit_pending(&mut self) -> Result<SimpleAdvance, DomainError> {
        let pending = std::mem::take(&mut self.pending);
        match self.submit_round(&pending) {
            Ok(advance) => Ok(advance),
            Err(e) => {
                self.pending = pending;
                Err(e)
            }
        }
    }

    /// Apply one raw delta per participant and advance the round.
    ///
    /// Every participant needs an integer entry; the first missing or
    /// non-numeric entry, or a total that would overflow, aborts the round
    /// with no total changed.
    pub fn submit_round(
        &mut self,
        deltas: &HashMap<String, String>,
    ) -> Result<SimpleAdvance, DomainError> {
        if self.complete {
            return Err(DomainError::validation(
                ValidationKind::GameOver,
                "All rounds have been completed.",
            ));
        }

        let mut parsed = Vec::with_capacity(self.players.len());
        for player in &self.players {
            let raw = deltas.get(&player.name).map(String::as_str).unwrap_or("");
            parsed.push(parse_points(raw, "score", &player.name)?);
        }

        let totals = checked_totals(&self.players, &parsed)?;
        for (player, total) in self.players.iter_mut().zip(totals) {
            player.total_score = total;
        }
        self.pending.clear();

        match self.limit {
            RoundLimit::Fixed(max) if self.current_round >= max => {
                self.complete = true;
                info!(rounds = self.current_round, "Simple scoring game complete");
                Ok(SimpleAdvance::Complete)
            }
            _ => {
                self.current_round += 1;
                debug!(round = self.current_round, "Moving to next round");
                Ok(SimpleAdvance::NextRound(self.current_round))
            }
        }
    }

    /// Replace a participant's total. A non-number keeps the old total and
    /// returns `false`.
    pub fn override_total(&mut self, name: &str, raw: &str) -> Result<bool, DomainError> {
        let index = self.require_player(name)?;
        match try_points(raw) {
            Some(value) => {
                self.players[index].total_score = value;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Correct the round counter. Rounds are 1-based and a fixed game cannot
    /// be moved past its last round.
    pub fn set_round(&mut self, round: u32) -> Result<(), DomainError> {
        let out_of_range = match self.limit {
            RoundLimit::Fixed(max) => round == 0 || round > max,
            RoundLimit::Indefinite => round == 0,
        };
        if out_of_range {
            return Err(DomainError::validation(
                ValidationKind::RoundNumber,
                format!("Round {round} is out of range."),
            ));
        }
        self.current_round = round;
        Ok(())
    }

    pub fn standings(&self) -> Vec<Player> {
        standings(&self.players)
    }

    fn require_player(&self, name: &str) -> Result<usize, DomainError> {
        self.players
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Player, format!("No player named '{name}'."))
            })
    }
}
