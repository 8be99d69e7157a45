//! Single-elimination tournament bracket.
//!
//! The bracket pairs consecutive entrants each round, gives an odd entrant
//! out a bye, and keeps going until one entrant remains. Scores arrive as
//! raw strings from the input layer and are only parsed when the round is
//! checked for completeness or advanced.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::domain::input::try_points;
use crate::domain::player::normalize_roster;
use crate::domain::result::{RankedTeam, TournamentResult, UNRANKED};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

pub const MIN_ENTRANTS: usize = 2;
pub const MAX_ENTRANTS: usize = 64;

/// Identifier of a match; unique for the lifetime of a bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    First,
    Second,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketMatch {
    pub id: MatchId,
    pub first: String,
    /// `None` is a bye.
    pub second: Option<String>,
    pub first_score: String,
    pub second_score: String,
}

impl BracketMatch {
    fn new(id: MatchId, first: String, second: Option<String>) -> Self {
        Self {
            id,
            first,
            second,
            first_score: String::new(),
            second_score: String::new(),
        }
    }

    pub fn is_bye(&self) -> bool {
        self.second.is_none()
    }

    /// Both scores, once both parse as integers.
    pub fn parsed_scores(&self) -> Option<(i32, i32)> {
        Some((try_points(&self.first_score)?, try_points(&self.second_score)?))
    }

    pub fn is_decided(&self) -> bool {
        self.is_bye() || self.parsed_scores().is_some()
    }
}

/// Lifecycle of a bracket. `RoundComplete` is derived: a round in progress
/// whose matches are all decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketPhase {
    Seeding,
    RoundInProgress,
    RoundComplete,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Seeding,
    InProgress,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elimination {
    pub name: String,
    /// Score the entrant lost with.
    pub score: i32,
    pub round: u32,
}

/// Ledger entry for every decided match, byes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Bye {
        round: u32,
        entrant: String,
    },
    Played {
        round: u32,
        first: String,
        first_score: i32,
        second: String,
        second_score: i32,
        winner: String,
        /// Tied scores, winner drawn at random.
        by_draw: bool,
    },
}

impl MatchOutcome {
    /// Points this entrant scored in the match, if they played in it.
    fn score_for(&self, name: &str) -> i64 {
        match self {
            MatchOutcome::Bye { .. } => 0,
            MatchOutcome::Played {
                first,
                first_score,
                second,
                second_score,
                ..
            } => {
                let mut total = 0;
                if first == name {
                    total += i64::from(*first_score);
                }
                if second == name {
                    total += i64::from(*second_score);
                }
                total
            }
        }
    }

    fn history_line(&self) -> String {
        match self {
            MatchOutcome::Bye { round, entrant } => {
                format!("Round {round}: {entrant} advances on a bye")
            }
            MatchOutcome::Played {
                round,
                first,
                first_score,
                second,
                second_score,
                winner,
                by_draw,
            } => {
                let mut line = format!(
                    "Round {round}: {first} {first_score} - {second_score} {second}, {winner} advances"
                );
                if *by_draw {
                    line.push_str(" (tie broken by draw)");
                }
                line
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Round not complete (or bracket not running); nothing changed.
    NotReady,
    NextRound { round: u32, survivors: usize },
    Finished,
}

#[derive(Debug, Clone)]
struct FinalStandings {
    winners: Vec<RankedTeam>,
    all_players: Vec<RankedTeam>,
}

#[derive(Debug)]
pub struct Bracket {
    title: String,
    stage: Stage,
    auto_generate: bool,
    round: u32,
    entrants: Vec<String>,
    survivors: Vec<String>,
    matches: Vec<BracketMatch>,
    eliminated: Vec<Elimination>,
    outcomes: Vec<MatchOutcome>,
    standings: Option<FinalStandings>,
    next_match_id: u32,
    rng: ChaCha8Rng,
}

impl Bracket {
    /// Create an empty bracket. A seed makes shuffles and tie draws
    /// reproducible; `None` draws one from the OS.
    pub fn new(title: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            title: title.into(),
            stage: Stage::Seeding,
            auto_generate: false,
            round: 0,
            entrants: Vec::new(),
            survivors: Vec::new(),
            matches: Vec::new(),
            eliminated: Vec::new(),
            outcomes: Vec::new(),
            standings: None,
            next_match_id: 0,
            rng,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn phase(&self) -> BracketPhase {
        match self.stage {
            Stage::Seeding => BracketPhase::Seeding,
            Stage::Finished => BracketPhase::Finished,
            Stage::InProgress if self.matches.iter().all(BracketMatch::is_decided) => {
                BracketPhase::RoundComplete
            }
            Stage::InProgress => BracketPhase::RoundInProgress,
        }
    }

    /// 1-based round number; 0 before seeding.
    pub fn current_round(&self) -> u32 {
        self.round
    }

    pub fn auto_generate(&self) -> bool {
        self.auto_generate
    }

    /// Entrants in seeding order (after the initial shuffle, if any).
    pub fn entrants(&self) -> &[String] {
        &self.entrants
    }

    pub fn survivors(&self) -> &[String] {
        &self.survivors
    }

    pub fn matches(&self) -> &[BracketMatch] {
        &self.matches
    }

    pub fn eliminated(&self) -> &[Elimination] {
        &self.eliminated
    }

    pub fn outcomes(&self) -> &[MatchOutcome] {
        &self.outcomes
    }

    /// Seed the first round. With `auto_generate` the entrants are shuffled
    /// first; otherwise consecutive entrants meet in the given order.
    pub fn seed<S: AsRef<str>>(&mut self, names: &[S], auto_generate: bool) -> Result<(), DomainError> {
        if self.stage != Stage::Seeding {
            return Err(DomainError::validation_other("Bracket has already been seeded."));
        }
        let mut names = normalize_roster(names, MIN_ENTRANTS..=MAX_ENTRANTS, ValidationKind::EntrantCount)?;
        if auto_generate {
            names.shuffle(&mut self.rng);
        }

        self.auto_generate = auto_generate;
        self.entrants = names.clone();
        self.survivors = names;
        self.round = 1;
        self.stage = Stage::InProgress;
        self.pair_survivors();
        debug!(
            title = %self.title,
            entrants = self.entrants.len(),
            auto_generate,
            "Bracket seeded"
        );
        Ok(())
    }

    /// Store a raw score for one side of a match. The value is not parsed
    /// here.
    pub fn record_match_score(
        &mut self,
        match_id: MatchId,
        slot: Slot,
        raw: impl Into<String>,
    ) -> Result<(), DomainError> {
        let m = self
            .matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Match,
                    format!("No match {} in the current round.", match_id.0),
                )
            })?;
        match slot {
            Slot::First => m.first_score = raw.into(),
            Slot::Second if m.is_bye() => {
                return Err(DomainError::validation(
                    ValidationKind::ByeSlot,
                    format!("{} has a bye; there is no opponent score.", m.first),
                ));
            }
            Slot::Second => m.second_score = raw.into(),
        }
        Ok(())
    }

    /// True when a round is running and every two-entrant match has two
    /// parseable scores.
    pub fn is_round_complete(&self) -> bool {
        self.phase() == BracketPhase::RoundComplete
    }

    /// Resolve the current round. Does nothing unless the round is complete.
    pub fn advance_round(&mut self) -> AdvanceOutcome {
        if !self.is_round_complete() {
            debug!(round = self.round, "Advance requested before round complete");
            return AdvanceOutcome::NotReady;
        }

        let matches = std::mem::take(&mut self.matches);
        let mut advancing = Vec::with_capacity(matches.len());
        for m in matches {
            let Some(second) = m.second else {
                self.outcomes.push(MatchOutcome::Bye {
                    round: self.round,
                    entrant: m.first.clone(),
                });
                advancing.push(m.first);
                continue;
            };
            let (Some(first_score), Some(second_score)) =
                (try_points(&m.first_score), try_points(&m.second_score))
            else {
                continue;
            };

            let by_draw = first_score == second_score;
            let first_wins = if by_draw {
                self.rng.random_bool(0.5)
            } else {
                first_score > second_score
            };
            let (winner, loser, loser_score) = if first_wins {
                (m.first.clone(), second.clone(), second_score)
            } else {
                (second.clone(), m.first.clone(), first_score)
            };

            self.eliminated.push(Elimination {
                name: loser,
                score: loser_score,
                round: self.round,
            });
            self.outcomes.push(MatchOutcome::Played {
                round: self.round,
                first: m.first,
                first_score,
                second,
                second_score,
                winner: winner.clone(),
                by_draw,
            });
            advancing.push(winner);
        }

        self.survivors = advancing;
        if self.survivors.len() == 1 {
            self.finish();
            return AdvanceOutcome::Finished;
        }

        self.round += 1;
        if self.auto_generate {
            self.survivors.shuffle(&mut self.rng);
        }
        self.pair_survivors();
        debug!(
            round = self.round,
            survivors = self.survivors.len(),
            "Bracket advanced"
        );
        AdvanceOutcome::NextRound {
            round: self.round,
            survivors: self.survivors.len(),
        }
    }

    /// Podium in placement order; empty until finished.
    pub fn winners(&self) -> &[RankedTeam] {
        self.standings.as_ref().map_or(&[], |s| s.winners.as_slice())
    }

    /// Every entrant in seeding order with placement (0 when unranked) and
    /// score; empty until finished.
    pub fn all_players(&self) -> &[RankedTeam] {
        self.standings
            .as_ref()
            .map_or(&[], |s| s.all_players.as_slice())
    }

    /// One log line per decided match and bye, in play order.
    pub fn round_history(&self) -> Vec<String> {
        self.outcomes.iter().map(MatchOutcome::history_line).collect()
    }

    /// Detached snapshot of a finished tournament.
    pub fn result(&self, date: impl Into<String>) -> Result<TournamentResult, DomainError> {
        let standings = self.standings.as_ref().ok_or_else(|| {
            DomainError::validation_other(format!("Tournament '{}' is not finished.", self.title))
        })?;
        Ok(TournamentResult::new(
            self.title.clone(),
            date,
            standings.winners.clone(),
            standings.all_players.clone(),
            self.round_history(),
        ))
    }

    fn pair_survivors(&mut self) {
        let mut matches = Vec::with_capacity(self.survivors.len().div_ceil(2));
        for pair in self.survivors.chunks(2) {
            let id = MatchId(self.next_match_id);
            self.next_match_id += 1;
            matches.push(BracketMatch::new(id, pair[0].clone(), pair.get(1).cloned()));
        }
        self.matches = matches;
    }

    /// Sum of an entrant's recorded match scores across all rounds plus any
    /// elimination entries filed under the same name, saturating at the
    /// `i32` bounds.
    fn accumulated_score(&self, name: &str) -> i32 {
        let played: i64 = self.outcomes.iter().map(|o| o.score_for(name)).sum();
        let eliminated: i64 = self
            .eliminated
            .iter()
            .filter(|e| e.name == name)
            .map(|e| i64::from(e.score))
            .sum();
        let total = played + eliminated;
        i32::try_from(total).unwrap_or(if total < 0 { i32::MIN } else { i32::MAX })
    }

    fn finish(&mut self) {
        self.stage = Stage::Finished;
        let Some(champion) = self.survivors.first().cloned() else {
            return;
        };

        let mut winners = vec![RankedTeam::new(
            champion.clone(),
            self.accumulated_score(&champion),
            1,
        )];

        if let Some((runner_up, earlier)) = self.eliminated.split_last() {
            winners.push(RankedTeam::new(runner_up.name.clone(), runner_up.score, 2));

            // Strictly greater keeps the first entrant eliminated on a tie.
            let mut third: Option<&Elimination> = None;
            for e in earlier {
                if third.map_or(true, |best| e.score > best.score) {
                    third = Some(e);
                }
            }
            if let Some(third) = third {
                winners.push(RankedTeam::new(third.name.clone(), third.score, 3));
            }
        }

        let all_players = self
            .entrants
            .iter()
            .map(|name| match winners.iter().find(|w| &w.name == name) {
                Some(w) => w.clone(),
                None => {
                    let score = self
                        .eliminated
                        .iter()
                        .rev()
                        .find(|e| &e.name == name)
                        .map_or(0, |e| e.score);
                    RankedTeam::new(name.clone(), score, UNRANKED)
                }
            })
            .collect();

        info!(
            title = %self.title,
            champion = %champion,
            rounds = self.round,
            "Tournament finished"
        );
        self.standings = Some(FinalStandings {
            winners,
            all_players,
        });
    }
}
