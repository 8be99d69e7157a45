//! Domain-level error type used across the scoring engines.
//!
//! This error type is I/O-agnostic. The binary and the session boundary
//! return `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation kinds for structured input/rule violations
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// A required per-participant field was left blank
    MissingScore,
    /// A field did not parse as a whole number
    NotAnInteger,
    /// Tricks won across all players do not add up to the round number
    TrickTotal,
    /// A score or running total would leave the `i32` range
    ScoreOutOfRange,
    PlayerCount,
    EntrantCount,
    BlankName,
    DuplicateName,
    /// Configured round limit outside the allowed range
    RoundLimit,
    /// Round counter edits must stay 1-based
    RoundNumber,
    /// The game already reached its terminal state
    GameOver,
    /// Score entry targeted the empty slot of a bye match
    ByeSlot,
    /// Session accessor used for a mode other than the active one
    WrongMode,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Player,
    Match,
    Tournament,
    ActiveGame,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Submitted per-player values don't line up with the roster
    Mismatch { expected: usize, actual: usize },
    /// Missing participant, match or record
    NotFound(NotFoundKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Mismatch { expected, actual } => {
                write!(f, "mismatch: expected {expected} scores, got {actual}")
            }
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn mismatch(expected: usize, actual: usize) -> Self {
        Self::Mismatch { expected, actual }
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    /// Human-readable message suitable for an alert in the presentation layer.
    pub fn detail(&self) -> String {
        match self {
            DomainError::Validation(_, d) | DomainError::NotFound(_, d) => d.clone(),
            DomainError::Mismatch { expected, actual } => {
                format!("Expected {expected} scores but received {actual}.")
            }
        }
    }
}
