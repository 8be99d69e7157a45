use crate::domain::scoring::{skull_king_round_score, tricks_match_round};
use crate::domain::skull_king::{BidEntry, RoundAdvance, SkullKingGame, SkullKingSettings};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

fn game(names: &[&str], max_rounds: u32) -> SkullKingGame {
    SkullKingGame::new(
        names,
        SkullKingSettings {
            max_rounds,
            enforce_trick_total: true,
        },
    )
    .expect("valid roster")
}

fn totals(game: &SkullKingGame) -> Vec<i32> {
    game.players().iter().map(|p| p.total_score).collect()
}

#[test]
fn zero_bid_made_scales_with_round() {
    assert_eq!(skull_king_round_score(1, 0, 0, 0), 10);
    assert_eq!(skull_king_round_score(7, 0, 0, 0), 70);
    assert_eq!(skull_king_round_score(7, 0, 0, 30), 100);
}

#[test]
fn exact_bid_scores_twenty_per_trick() {
    assert_eq!(skull_king_round_score(5, 3, 3, 0), 60);
    assert_eq!(skull_king_round_score(5, 1, 1, 20), 40);
}

#[test]
fn failed_zero_bid_uses_current_round() {
    assert_eq!(skull_king_round_score(1, 0, 1, 0), -10);
    assert_eq!(skull_king_round_score(6, 0, 2, 0), -60);
}

#[test]
fn general_miss_is_ten_per_trick_off() {
    assert_eq!(skull_king_round_score(4, 2, 3, 0), -10);
    assert_eq!(skull_king_round_score(4, 4, 1, 0), -30);
    assert_eq!(skull_king_round_score(4, 4, 1, 10), -20);
}

#[test]
fn trick_total_must_equal_round() {
    assert!(tricks_match_round(3, &[1, 2, 0]));
    assert!(!tricks_match_round(3, &[1, 1, 0]));
    assert!(tricks_match_round(1, &[1]));
}

#[test]
fn calculate_round_score_uses_current_round() {
    let mut g = game(&["Ann", "Bo"], 10);
    assert_eq!(g.calculate_round_score(0, 0, 0), 10);
    g.submit_round(&[0, 0]).unwrap();
    assert_eq!(g.calculate_round_score(0, 0, 0), 20);
    assert_eq!(g.calculate_round_score(0, 1, 0), -20);
}

#[test]
fn mismatched_submission_leaves_totals_untouched() {
    let mut g = game(&["Ann", "Bo", "Cy"], 10);
    g.submit_round(&[10, 20, 30]).unwrap();

    let err = g.submit_round(&[1, 2]).unwrap_err();
    assert_eq!(
        err,
        DomainError::Mismatch {
            expected: 3,
            actual: 2
        }
    );
    assert_eq!(totals(&g), vec![10, 20, 30]);
    assert_eq!(g.current_round(), 2);
}

#[test]
fn final_round_ends_the_game() {
    let mut g = game(&["Ann", "Bo"], 2);
    assert_eq!(g.submit_round(&[1, 1]).unwrap(), RoundAdvance::NextRound(2));
    assert_eq!(g.submit_round(&[1, 1]).unwrap(), RoundAdvance::GameOver);
    assert!(g.is_game_over());
    assert_eq!(g.current_round(), 2);

    let err = g.submit_round(&[1, 1]).unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::GameOver, _)));
    assert_eq!(totals(&g), vec![2, 2]);
}

#[test]
fn reset_zeroes_totals_and_keeps_roster() {
    let mut g = game(&["Ann", "Bo"], 1);
    let ids: Vec<_> = g.players().iter().map(|p| p.id).collect();
    g.submit_round(&[40, -10]).unwrap();
    assert!(g.is_game_over());

    g.reset_game();

    assert_eq!(totals(&g), vec![0, 0]);
    assert_eq!(g.current_round(), 1);
    assert!(!g.is_game_over());
    let after: Vec<_> = g.players().iter().map(|p| p.id).collect();
    assert_eq!(ids, after);
}

#[test]
fn score_round_parses_and_applies() {
    let mut g = game(&["Ann", "Bo"], 10);
    // Round 1: one card each hand, Ann bids 0 and takes none, Bo bids 1 and takes it.
    let deltas = g
        .score_round(&[BidEntry::new("0", "0", ""), BidEntry::new("1", "1", "10")])
        .unwrap();
    assert_eq!(deltas, vec![10, 30]);
    assert_eq!(totals(&g), vec![10, 30]);
    assert_eq!(g.current_round(), 2);
}

#[test]
fn score_round_rejects_bad_trick_total() {
    let mut g = game(&["Ann", "Bo"], 10);
    let err = g
        .score_round(&[BidEntry::new("0", "1", ""), BidEntry::new("1", "1", "")])
        .unwrap_err();
    assert_eq!(
        err,
        DomainError::Validation(
            ValidationKind::TrickTotal,
            "Total tricks (2) must equal the round number (1).".to_string()
        )
    );
    assert_eq!(totals(&g), vec![0, 0]);
    assert_eq!(g.current_round(), 1);
}

#[test]
fn trick_total_gate_can_be_disabled() {
    let mut g = SkullKingGame::new(
        &["Ann", "Bo"],
        SkullKingSettings {
            max_rounds: 10,
            enforce_trick_total: false,
        },
    )
    .unwrap();
    let deltas = g
        .score_round(&[BidEntry::new("0", "1", ""), BidEntry::new("1", "1", "")])
        .unwrap();
    assert_eq!(deltas, vec![-10, 20]);
}

#[test]
fn score_round_rejects_missing_and_garbage_input() {
    let mut g = game(&["Ann", "Bo"], 10);

    let err = g
        .score_round(&[BidEntry::new("", "0", ""), BidEntry::new("1", "1", "")])
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::MissingScore, _)));

    let err = g
        .score_round(&[BidEntry::new("0", "zero", ""), BidEntry::new("1", "1", "")])
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::NotAnInteger, _)));

    let err = g.score_round(&[BidEntry::new("0", "0", "")]).unwrap_err();
    assert!(matches!(err, DomainError::Mismatch { .. }));

    assert_eq!(totals(&g), vec![0, 0]);
}

#[test]
fn setup_validates_roster_and_rounds() {
    let err = SkullKingGame::new(&["Solo"], SkullKingSettings::default()).unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::PlayerCount, _)));

    let nine: Vec<String> = (1..=9).map(|i| format!("P{i}")).collect();
    let err = SkullKingGame::new(&nine, SkullKingSettings::default()).unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::PlayerCount, _)));

    for max_rounds in [0, 16] {
        let err = SkullKingGame::new(
            &["Ann", "Bo"],
            SkullKingSettings {
                max_rounds,
                enforce_trick_total: true,
            },
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(ValidationKind::RoundLimit, _)));
    }
}

#[test]
fn roster_edits_and_overrides() {
    let mut g = game(&["Ann", "Bo", "Cy"], 10);

    g.rename_player(1, "  Bob ").unwrap();
    assert_eq!(g.players()[1].name, "Bob");

    assert!(g.override_total(2, "45").unwrap());
    assert!(!g.override_total(2, "lots").unwrap());
    assert_eq!(g.players()[2].total_score, 45);

    let removed = g.remove_player(0).unwrap();
    assert_eq!(removed.name, "Ann");
    assert_eq!(g.players().len(), 2);

    let err = g.remove_player(5).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Player, _)));
    let err = g.rename_player(0, " ").unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::BlankName, _)));
}

#[test]
fn leaderboard_sorts_by_total() {
    let mut g = game(&["Ann", "Bo", "Cy"], 10);
    g.submit_round(&[10, 30, 20]).unwrap();
    let names: Vec<_> = g.leaderboard().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Bo", "Cy", "Ann"]);
}

#[test]
fn extreme_bid_is_rejected_without_panicking() {
    let mut g = SkullKingGame::new(
        &["Ann", "Bo"],
        SkullKingSettings {
            max_rounds: 10,
            enforce_trick_total: false,
        },
    )
    .unwrap();
    let err = g
        .score_round(&[
            BidEntry::new("1000000000", "1", ""),
            BidEntry::new("0", "0", ""),
        ])
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::ScoreOutOfRange, _)));
    assert_eq!(totals(&g), vec![0, 0]);
    assert_eq!(g.current_round(), 1);
}

#[test]
fn raw_round_score_saturates() {
    assert_eq!(skull_king_round_score(1, 1_000_000_000, 1, 0), i32::MIN);
    assert_eq!(skull_king_round_score(1, i32::MAX, i32::MAX, 0), i32::MAX);
    assert_eq!(skull_king_round_score(1, 0, 0, i32::MAX), i32::MAX);
}

#[test]
fn total_overflow_leaves_every_total_untouched() {
    let mut g = game(&["Ann", "Bo"], 10);
    assert!(g.override_total(1, &(i32::MAX - 5).to_string()).unwrap());
    g.submit_round(&[7, 5]).unwrap();

    let err = g.submit_round(&[3, 1]).unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::ScoreOutOfRange, _)));
    assert_eq!(totals(&g), vec![7, i32::MAX]);
    assert_eq!(g.current_round(), 2);
}

#[test]
fn roster_edits_keep_setup_rules() {
    let mut g = game(&["Ann", "Bo"], 10);

    let err = g.rename_player(1, " Ann ").unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::DuplicateName, _)));
    g.rename_player(0, "Ann").unwrap();

    let err = g.remove_player(0).unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::PlayerCount, _)));
    assert_eq!(g.players().len(), 2);
}
