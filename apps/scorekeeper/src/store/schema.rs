//! On-disk record decoding.
//!
//! Current records are `{id, title, date, winners, allPlayers, roundHistory}`.
//! Older records only carried `{id, title, date, teams}`; those are upgraded
//! on read and written back in the current shape on the next save.

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::result::{RankedTeam, TournamentResult};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredRecord {
    Current(TournamentResult),
    Legacy(LegacyRecord),
}

#[derive(Debug, Deserialize)]
struct LegacyRecord {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    title: String,
    date: String,
    teams: Vec<LegacyTeam>,
}

#[derive(Debug, Deserialize)]
struct LegacyTeam {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    name: String,
    #[serde(default)]
    score: i32,
    #[serde(default)]
    placement: u32,
}

impl From<LegacyTeam> for RankedTeam {
    fn from(team: LegacyTeam) -> Self {
        RankedTeam {
            id: team.id,
            name: team.name,
            score: team.score,
            placement: team.placement,
        }
    }
}

impl From<LegacyRecord> for TournamentResult {
    fn from(legacy: LegacyRecord) -> Self {
        let mut teams: Vec<RankedTeam> = legacy.teams.into_iter().map(RankedTeam::from).collect();
        let all_players = teams.clone();
        teams.retain(RankedTeam::is_ranked);
        teams.sort_by_key(|t| t.placement);
        TournamentResult {
            id: legacy.id,
            title: legacy.title,
            date: legacy.date,
            winners: teams,
            all_players,
            round_history: Vec::new(),
        }
    }
}

/// Decode one stored record in either shape.
pub fn decode_record(value: Value) -> Result<TournamentResult, serde_json::Error> {
    Ok(match serde_json::from_value::<StoredRecord>(value)? {
        StoredRecord::Current(result) => result,
        StoredRecord::Legacy(legacy) => legacy.into(),
    })
}
