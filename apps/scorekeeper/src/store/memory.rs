use std::sync::{Mutex, PoisonError};

use super::{push_front, StoreError, TournamentStore, DEFAULT_RETENTION};
use crate::domain::result::TournamentResult;

/// In-process store with the same ordering and retention as [`super::FileStore`].
#[derive(Debug)]
pub struct MemoryStore {
    records: Mutex<Vec<TournamentResult>>,
    retention: usize,
}

impl MemoryStore {
    pub fn new(retention: usize) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            retention: retention.max(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_RETENTION)
    }
}

impl TournamentStore for MemoryStore {
    fn try_save(&self, result: &TournamentResult) -> Result<(), StoreError> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        push_front(&mut records, result, self.retention);
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<TournamentResult>, StoreError> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records.clone())
    }
}
