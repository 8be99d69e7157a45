use std::collections::HashMap;

use crate::domain::simple::{RoundLimit, SimpleAdvance, SimpleScoring};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

fn deltas(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(name, raw)| (name.to_string(), raw.to_string()))
        .collect()
}

fn totals(game: &SimpleScoring) -> Vec<i32> {
    game.players().iter().map(|p| p.total_score).collect()
}

#[test]
fn submit_adds_deltas_and_advances() {
    let mut g = SimpleScoring::new(&["Ann", "Bo"], RoundLimit::Indefinite).unwrap();
    let advance = g.submit_round(&deltas(&[("Ann", "5"), ("Bo", "-3")])).unwrap();
    assert_eq!(advance, SimpleAdvance::NextRound(2));
    assert_eq!(totals(&g), vec![5, -3]);
    assert_eq!(g.total("Bo"), Some(-3));
}

#[test]
fn missing_score_changes_nothing() {
    let mut g = SimpleScoring::new(&["Ann", "Bo"], RoundLimit::Indefinite).unwrap();
    let err = g.submit_round(&deltas(&[("Ann", "5")])).unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::MissingScore, _)));

    let err = g.submit_round(&deltas(&[("Ann", "5"), ("Bo", "  ")])).unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::MissingScore, _)));

    assert_eq!(totals(&g), vec![0, 0]);
    assert_eq!(g.current_round(), 1);
}

#[test]
fn non_integer_score_changes_nothing() {
    let mut g = SimpleScoring::new(&["Ann", "Bo"], RoundLimit::Indefinite).unwrap();
    let err = g
        .submit_round(&deltas(&[("Ann", "5"), ("Bo", "2.5")]))
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::NotAnInteger, _)));
    assert_eq!(totals(&g), vec![0, 0]);
    assert_eq!(g.current_round(), 1);
}

#[test]
fn fixed_game_completes_after_max_rounds() {
    let mut g = SimpleScoring::new(&["Ann", "Bo"], RoundLimit::Fixed(3)).unwrap();
    let round = deltas(&[("Ann", "1"), ("Bo", "2")]);

    assert_eq!(g.submit_round(&round).unwrap(), SimpleAdvance::NextRound(2));
    assert_eq!(g.submit_round(&round).unwrap(), SimpleAdvance::NextRound(3));
    assert_eq!(g.submit_round(&round).unwrap(), SimpleAdvance::Complete);
    assert!(g.is_complete());
    assert_eq!(totals(&g), vec![3, 6]);

    let err = g.submit_round(&round).unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::GameOver, _)));
    assert_eq!(totals(&g), vec![3, 6]);
}

#[test]
fn indefinite_game_never_completes() {
    let mut g = SimpleScoring::new(&["Ann"], RoundLimit::Indefinite).unwrap();
    for _ in 0..50 {
        g.submit_round(&deltas(&[("Ann", "1")])).unwrap();
    }
    assert!(!g.is_complete());
    assert_eq!(g.current_round(), 51);
}

#[test]
fn pending_points_are_kept_on_failure_and_cleared_on_success() {
    let mut g = SimpleScoring::new(&["Ann", "Bo"], RoundLimit::Indefinite).unwrap();
    g.enter_points("Ann", "4").unwrap();

    assert!(g.submit_pending().is_err());
    assert_eq!(g.pending_points("Ann"), Some("4"));

    g.enter_points("Bo", "6").unwrap();
    g.submit_pending().unwrap();
    assert_eq!(g.pending_points("Ann"), None);
    assert_eq!(totals(&g), vec![4, 6]);

    let err = g.enter_points("Zed", "1").unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Player, _)));
}

#[test]
fn override_keeps_prior_total_on_garbage() {
    let mut g = SimpleScoring::new(&["Ann", "Bo"], RoundLimit::Indefinite).unwrap();
    assert!(g.override_total("Ann", "12").unwrap());
    assert!(!g.override_total("Ann", "twelve").unwrap());
    assert_eq!(g.total("Ann"), Some(12));
    assert!(g.override_total("Nobody", "1").is_err());
}

#[test]
fn set_round_respects_limits() {
    let mut g = SimpleScoring::new(&["Ann"], RoundLimit::Fixed(5)).unwrap();
    g.set_round(4).unwrap();
    assert_eq!(g.current_round(), 4);
    assert!(matches!(
        g.set_round(0),
        Err(DomainError::Validation(ValidationKind::RoundNumber, _))
    ));
    assert!(g.set_round(6).is_err());

    let mut open = SimpleScoring::new(&["Ann"], RoundLimit::Indefinite).unwrap();
    open.set_round(99).unwrap();
}

#[test]
fn setup_rejects_bad_configuration() {
    let empty: [&str; 0] = [];
    assert!(matches!(
        SimpleScoring::new(&empty, RoundLimit::Indefinite),
        Err(DomainError::Validation(ValidationKind::PlayerCount, _))
    ));
    assert!(matches!(
        SimpleScoring::new(&["Ann"], RoundLimit::Fixed(0)),
        Err(DomainError::Validation(ValidationKind::RoundLimit, _))
    ));
    assert!(matches!(
        SimpleScoring::new(&["Ann", "Ann"], RoundLimit::Indefinite),
        Err(DomainError::Validation(ValidationKind::DuplicateName, _))
    ));
}

#[test]
fn standings_rank_highest_first() {
    let mut g = SimpleScoring::new(&["Ann", "Bo", "Cy"], RoundLimit::Indefinite).unwrap();
    g.submit_round(&deltas(&[("Ann", "1"), ("Bo", "9"), ("Cy", "4")]))
        .unwrap();
    let names: Vec<_> = g.standings().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Bo", "Cy", "Ann"]);
}

#[test]
fn total_overflow_aborts_the_round() {
    let mut g = SimpleScoring::new(&["Ann", "Bo"], RoundLimit::Indefinite).unwrap();
    let round = deltas(&[("Ann", "1"), ("Bo", "2000000000")]);
    assert_eq!(g.submit_round(&round).unwrap(), SimpleAdvance::NextRound(2));

    let err = g.submit_round(&round).unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::ScoreOutOfRange, _)));
    assert_eq!(totals(&g), vec![1, 2_000_000_000]);
    assert_eq!(g.current_round(), 2);
}
