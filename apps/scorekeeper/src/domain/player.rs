//! Participants and roster validation shared by every engine.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// A participant in a live game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identity; survives renames.
    pub id: Uuid,
    pub name: String,
    /// Running total, mutated only by the owning engine.
    pub total_score: i32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            total_score: 0,
        }
    }
}

/// Trim and validate a roster of names.
///
/// Names must be non-blank and unique after trimming, and the count must fall
/// within `allowed`. `count_kind` selects which validation kind reports a bad
/// count (players for score sheets, entrants for brackets).
pub fn normalize_roster<S: AsRef<str>>(
    names: &[S],
    allowed: RangeInclusive<usize>,
    count_kind: ValidationKind,
) -> Result<Vec<String>, DomainError> {
    if !allowed.contains(&names.len()) {
        return Err(DomainError::validation(
            count_kind,
            format!(
                "Need between {} and {} names, got {}.",
                allowed.start(),
                allowed.end(),
                names.len()
            ),
        ));
    }

    let mut seen = HashSet::with_capacity(names.len());
    let mut out = Vec::with_capacity(names.len());
    for (i, raw) in names.iter().enumerate() {
        let name = raw.as_ref().trim();
        if name.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::BlankName,
                format!("Name #{} cannot be empty.", i + 1),
            ));
        }
        if !seen.insert(name.to_string()) {
            return Err(DomainError::validation(
                ValidationKind::DuplicateName,
                format!("Name '{name}' is used more than once."),
            ));
        }
        out.push(name.to_string());
    }
    Ok(out)
}

/// Players sorted by total, highest first. Ties keep roster order.
pub fn standings(players: &[Player]) -> Vec<Player> {
    let mut sorted = players.to_vec();
    sorted.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    sorted
}

/// New totals after adding one delta per player, in roster order.
///
/// Nothing is written back; callers commit the returned totals only when
/// every sum fits.
pub(crate) fn checked_totals(players: &[Player], deltas: &[i32]) -> Result<Vec<i32>, DomainError> {
    players
        .iter()
        .zip(deltas)
        .map(|(player, &delta)| {
            player.total_score.checked_add(delta).ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::ScoreOutOfRange,
                    format!(
                        "Adding {delta} to {}'s total of {} is out of range.",
                        player.name, player.total_score
                    ),
                )
            })
        })
        .collect()
}

pub(crate) fn require_index(players: &[Player], index: usize) -> Result<(), DomainError> {
    if index < players.len() {
        Ok(())
    } else {
        Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("No player at position {index} (roster has {}).", players.len()),
        ))
    }
}
