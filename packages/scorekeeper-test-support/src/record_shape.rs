//! Assertions over the persisted tournament record JSON shape.
//!
//! These helpers operate on raw `serde_json::Value`s so that tests can pin
//! the on-disk contract without depending on scorekeeper types.

use serde::Deserialize;
use serde_json::Value;

/// Local mirror of a ranked entry as it appears on disk
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RankedLike {
    id: String,
    name: String,
    score: i64,
    placement: u32,
}

/// Assert that a JSON value is a canonical tournament record.
///
/// Checks the camelCase keys, that every winner carries placement 1..=3 in
/// order, and that every `allPlayers` entry sharing a winner's name carries
/// the same placement.
pub fn assert_canonical_record(value: &Value) {
    for key in ["id", "title", "date", "winners", "allPlayers", "roundHistory"] {
        assert!(value.get(key).is_some(), "{key} field should be present");
    }
    assert!(
        value.get("teams").is_none(),
        "canonical records must not carry the legacy teams field"
    );

    let winners: Vec<RankedLike> = serde_json::from_value(value["winners"].clone())
        .unwrap_or_else(|e| panic!("winners should deserialize: {e}. Raw: {value}"));
    let all_players: Vec<RankedLike> = serde_json::from_value(value["allPlayers"].clone())
        .unwrap_or_else(|e| panic!("allPlayers should deserialize: {e}. Raw: {value}"));

    for (i, winner) in winners.iter().enumerate() {
        assert_eq!(
            winner.placement as usize,
            i + 1,
            "winners must be ordered by placement"
        );
        assert!(!winner.id.is_empty(), "winner id should not be empty");
        let entry = all_players
            .iter()
            .find(|p| p.name == winner.name)
            .unwrap_or_else(|| panic!("winner {} missing from allPlayers", winner.name));
        assert_eq!(
            entry.placement, winner.placement,
            "allPlayers placement for {} must match winners",
            winner.name
        );
        assert_eq!(entry.score, winner.score);
    }

    for entry in &all_players {
        if !winners.iter().any(|w| w.name == entry.name) {
            assert_eq!(
                entry.placement, 0,
                "non-winning entry {} must be unranked",
                entry.name
            );
        }
    }

    assert!(
        value["roundHistory"].is_array(),
        "roundHistory should be an array"
    );
}
