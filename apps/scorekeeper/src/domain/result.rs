//! Immutable tournament result snapshots handed to the store.

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::OffsetDateTime;
use uuid::Uuid;

/// Placement value for entrants outside the top three.
pub const UNRANKED: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedTeam {
    pub id: Uuid,
    pub name: String,
    pub score: i32,
    /// 1-based; [`UNRANKED`] when outside the podium.
    pub placement: u32,
}

impl RankedTeam {
    pub fn new(name: impl Into<String>, score: i32, placement: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            score,
            placement,
        }
    }

    pub fn is_ranked(&self) -> bool {
        self.placement != UNRANKED
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentResult {
    pub id: Uuid,
    pub title: String,
    pub date: String,
    /// Podium in placement order.
    pub winners: Vec<RankedTeam>,
    pub all_players: Vec<RankedTeam>,
    #[serde(default)]
    pub round_history: Vec<String>,
}

impl TournamentResult {
    /// Build a result, back-filling placements in `all_players` from
    /// `winners` by name so the two lists never disagree.
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        winners: Vec<RankedTeam>,
        mut all_players: Vec<RankedTeam>,
        round_history: Vec<String>,
    ) -> Self {
        for entry in &mut all_players {
            entry.placement = winners
                .iter()
                .find(|w| w.name == entry.name)
                .map_or(UNRANKED, |w| w.placement);
        }
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            date: date.into(),
            winners,
            all_players,
            round_history,
        }
    }

    pub fn placement_of(&self, name: &str) -> Option<u32> {
        self.all_players
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.placement)
    }

    pub fn champion(&self) -> Option<&RankedTeam> {
        self.winners.iter().find(|w| w.placement == 1)
    }
}

/// Today's date (UTC) as `YYYY-MM-DD`, the format stored with results.
pub fn today() -> String {
    let date = OffsetDateTime::now_utc().date();
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}
