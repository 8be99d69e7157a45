//! Property tests for bracket progression (pure domain).
//!
//! - Survivors strictly decrease every round.
//! - A bracket of N entrants finishes in exactly ceil(log2(N)) rounds.
//! - Exactly one champion; every other entrant is eliminated once.

use proptest::prelude::*;

use crate::domain::bracket::{AdvanceOutcome, Bracket, BracketPhase, Slot};
use crate::domain::test_prelude;

fn ceil_log2(n: usize) -> u32 {
    usize::BITS - (n - 1).leading_zeros()
}

/// Fill every open match from `scores`, cycling through the pool.
fn fill_round(bracket: &mut Bracket, scores: &[i32], cursor: &mut usize) {
    let open: Vec<_> = bracket
        .matches()
        .iter()
        .filter(|m| !m.is_bye())
        .map(|m| m.id)
        .collect();
    for id in open {
        for slot in [Slot::First, Slot::Second] {
            let value = scores[*cursor % scores.len()];
            *cursor += 1;
            bracket
                .record_match_score(id, slot, value.to_string())
                .unwrap();
        }
    }
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_bracket_terminates_in_log_rounds(
        entrants in 2usize..=64,
        seed in any::<u64>(),
        auto_generate in any::<bool>(),
        scores in prop::collection::vec(-5i32..20, 1..=32),
    ) {
        let names: Vec<String> = (1..=entrants).map(|i| format!("Team {i}")).collect();
        let mut bracket = Bracket::new("Prop Cup", Some(seed));
        bracket.seed(&names, auto_generate).unwrap();

        let mut cursor = 0;
        let mut rounds = 0u32;
        let mut last_survivors = bracket.survivors().len();
        loop {
            fill_round(&mut bracket, &scores, &mut cursor);
            prop_assert!(bracket.is_round_complete());
            rounds += 1;
            match bracket.advance_round() {
                AdvanceOutcome::Finished => break,
                AdvanceOutcome::NextRound { survivors, .. } => {
                    prop_assert!(survivors < last_survivors,
                        "survivors must shrink: {survivors} >= {last_survivors}");
                    prop_assert_eq!(survivors, last_survivors.div_ceil(2));
                    last_survivors = survivors;
                }
                AdvanceOutcome::NotReady => prop_assert!(false, "complete round was not advanced"),
            }
            prop_assert!(rounds <= 6, "bracket did not terminate");
        }

        prop_assert_eq!(rounds, ceil_log2(entrants));
        prop_assert_eq!(bracket.phase(), BracketPhase::Finished);
        prop_assert_eq!(bracket.survivors().len(), 1);
        prop_assert_eq!(bracket.eliminated().len(), entrants - 1);
        prop_assert_eq!(bracket.all_players().len(), entrants);
        prop_assert_eq!(bracket.winners()[0].placement, 1);

        let expected_podium = if entrants == 2 { 2 } else { 3 };
        prop_assert_eq!(bracket.winners().len(), expected_podium);

        let ranked = bracket.all_players().iter().filter(|p| p.is_ranked()).count();
        prop_assert_eq!(ranked, expected_podium);
    }
}
