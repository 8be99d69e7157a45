use std::env;
use std::path::PathBuf;

use crate::domain::skull_king::{SkullKingSettings, DEFAULT_MAX_ROUNDS, MAX_ROUNDS_LIMIT};
use crate::error::AppError;
use crate::store::DEFAULT_RETENTION;

pub const DATA_DIR_VAR: &str = "SCOREKEEPER_DATA_DIR";
pub const RETENTION_VAR: &str = "SCOREKEEPER_RETENTION";
pub const SKULL_KING_ROUNDS_VAR: &str = "SCOREKEEPER_SKULL_KING_ROUNDS";
pub const ENFORCE_TRICK_TOTAL_VAR: &str = "SCOREKEEPER_ENFORCE_TRICK_TOTAL";

const DEFAULT_DATA_DIR: &str = "./scorekeeper-data";

/// Engine configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Directory holding the tournament history file.
    pub data_dir: PathBuf,
    /// Number of finished tournaments kept in history.
    pub retention: usize,
    /// Default round count for new Skull King games.
    pub skull_king_rounds: u32,
    pub enforce_trick_total: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            retention: DEFAULT_RETENTION,
            skull_king_rounds: DEFAULT_MAX_ROUNDS,
            enforce_trick_total: true,
        }
    }
}

impl EngineConfig {
    /// Build from environment variables, falling back to defaults for any
    /// that are unset.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        Ok(Self {
            data_dir: optional_var(DATA_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            retention: retention()?,
            skull_king_rounds: skull_king_rounds()?,
            enforce_trick_total: enforce_trick_total()?,
        })
    }

    pub fn skull_king_settings(&self) -> SkullKingSettings {
        SkullKingSettings {
            max_rounds: self.skull_king_rounds,
            enforce_trick_total: self.enforce_trick_total,
        }
    }
}

/// Read an optional variable; unset or blank yields `None`.
fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn retention() -> Result<usize, AppError> {
    let Some(raw) = optional_var(RETENTION_VAR) else {
        return Ok(DEFAULT_RETENTION);
    };
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(AppError::config(format!(
            "{RETENTION_VAR} must be a positive integer, but got: '{raw}'"
        ))),
    }
}

fn skull_king_rounds() -> Result<u32, AppError> {
    let Some(raw) = optional_var(SKULL_KING_ROUNDS_VAR) else {
        return Ok(DEFAULT_MAX_ROUNDS);
    };
    match raw.parse::<u32>() {
        Ok(n) if (1..=MAX_ROUNDS_LIMIT).contains(&n) => Ok(n),
        _ => Err(AppError::config(format!(
            "{SKULL_KING_ROUNDS_VAR} must be between 1 and {MAX_ROUNDS_LIMIT}, but got: '{raw}'"
        ))),
    }
}

fn enforce_trick_total() -> Result<bool, AppError> {
    let Some(raw) = optional_var(ENFORCE_TRICK_TOTAL_VAR) else {
        return Ok(true);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(AppError::config(format!(
            "{ENFORCE_TRICK_TOTAL_VAR} must be true/false/1/0, but got: '{raw}'"
        ))),
    }
}
