use thiserror::Error;

use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::errors::ErrorCode;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Error code for any variant
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Store(StoreError::Io { .. }) => ErrorCode::StoreIo,
            AppError::Store(StoreError::Json { .. }) => ErrorCode::StoreCorrupt,
            AppError::Store(StoreError::Lock { .. }) => ErrorCode::StoreLocked,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Human-readable detail for any variant
    pub fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. } => detail.clone(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::Store(e) => e.to_string(),
            AppError::Config { detail } => detail.clone(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::MissingScore => ErrorCode::MissingScore,
                    ValidationKind::NotAnInteger => ErrorCode::NotAnInteger,
                    ValidationKind::TrickTotal => ErrorCode::TrickTotal,
                    ValidationKind::ScoreOutOfRange => ErrorCode::ScoreOutOfRange,
                    ValidationKind::PlayerCount
                    | ValidationKind::EntrantCount
                    | ValidationKind::BlankName
                    | ValidationKind::DuplicateName => ErrorCode::InvalidRoster,
                    ValidationKind::RoundLimit | ValidationKind::RoundNumber => {
                        ErrorCode::InvalidRound
                    }
                    ValidationKind::GameOver => ErrorCode::GameOver,
                    ValidationKind::ByeSlot => ErrorCode::ByeSlot,
                    ValidationKind::WrongMode => ErrorCode::WrongMode,
                    _ => ErrorCode::ValidationError,
                };
                AppError::Validation { code, detail }
            }
            e @ DomainError::Mismatch { .. } => AppError::Validation {
                code: ErrorCode::ScoreMismatch,
                detail: e.detail(),
            },
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Player => ErrorCode::PlayerNotFound,
                    NotFoundKind::Match => ErrorCode::MatchNotFound,
                    NotFoundKind::Tournament => ErrorCode::TournamentNotFound,
                    NotFoundKind::ActiveGame => ErrorCode::NoActiveGame,
                    _ => ErrorCode::NotFound,
                };
                AppError::NotFound { code, detail }
            }
        }
    }
}
