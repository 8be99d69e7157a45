//! Persistence for finished tournaments.

mod error;
pub mod file;
pub mod memory;
pub mod schema;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
use tracing::warn;
use uuid::Uuid;

use crate::domain::result::TournamentResult;

/// Default number of tournaments kept in history.
pub const DEFAULT_RETENTION: usize = 20;

/// Storage for finished tournament results, newest first.
///
/// Implementations only need [`try_save`](Self::try_save) and
/// [`load_all`](Self::load_all). Callers that must not fail on storage
/// problems use [`save`](Self::save) and
/// [`load_all_or_empty`](Self::load_all_or_empty), which log and carry on.
pub trait TournamentStore: Send + Sync {
    /// Insert a result at the front of history, pruning beyond retention.
    fn try_save(&self, result: &TournamentResult) -> Result<(), StoreError>;

    /// Stored results, most recent first, at most the retention limit.
    fn load_all(&self) -> Result<Vec<TournamentResult>, StoreError>;

    /// Fire-and-forget save. Failures are logged, never returned.
    fn save(&self, result: &TournamentResult) {
        if let Err(e) = self.try_save(result) {
            warn!(
                tournament_id = %result.id,
                title = %result.title,
                error = %e,
                "Failed to save tournament result"
            );
        }
    }

    fn load_all_or_empty(&self) -> Vec<TournamentResult> {
        self.load_all().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load tournament history");
            Vec::new()
        })
    }

    fn find(&self, id: Uuid) -> Result<Option<TournamentResult>, StoreError> {
        Ok(self.load_all()?.into_iter().find(|r| r.id == id))
    }
}

/// Put `result` first, drop any older copy with the same id, and cap at
/// `retention`.
pub(crate) fn push_front(records: &mut Vec<TournamentResult>, result: &TournamentResult, retention: usize) {
    records.retain(|r| r.id != result.id);
    records.insert(0, result.clone());
    records.truncate(retention);
}
