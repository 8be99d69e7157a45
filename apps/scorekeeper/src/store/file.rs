//! JSON file store: one array of records per data directory.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs4::fs_std::FileExt;
use serde_json::Value;
use tracing::{debug, warn};

use super::schema::decode_record;
use super::{push_front, StoreError, TournamentStore};
use crate::domain::result::TournamentResult;

const RECORDS_FILE: &str = "tournaments.json";
const LOCK_FILE: &str = "tournaments.lock";
const TEMP_FILE: &str = "tournaments.json.tmp";

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    retention: usize,
}

/// Holds the exclusive lock on the store's lock file until dropped.
struct StoreLock {
    file: File,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            warn!(error = %e, "Failed to release tournament store lock");
        }
    }
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>, retention: usize) -> Self {
        Self {
            dir: dir.into(),
            retention: retention.max(1),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn records_path(&self) -> PathBuf {
        self.dir.join(RECORDS_FILE)
    }

    fn lock(&self) -> Result<StoreLock, StoreError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| StoreError::io(format!("creating {}", self.dir.display()), e))?;
        let path = self.dir.join(LOCK_FILE);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|e| StoreError::io(format!("opening {}", path.display()), e))?;
        FileExt::lock_exclusive(&file).map_err(|e| StoreError::Lock {
            detail: format!("{}: {e}", path.display()),
        })?;
        Ok(StoreLock { file })
    }

    /// Read every decodable record. A missing file is empty history; an
    /// entry that decodes in neither shape is skipped with a warning.
    fn read_records(&self) -> Result<Vec<TournamentResult>, StoreError> {
        let path = self.records_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(format!("reading {}", path.display()), e)),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entries: Vec<Value> = serde_json::from_str(&raw)
            .map_err(|e| StoreError::json(format!("parsing {}", path.display()), e))?;

        let mut records = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            match decode_record(entry) {
                Ok(record) => records.push(record),
                Err(e) => warn!(index, error = %e, "Skipping unreadable tournament record"),
            }
        }
        Ok(records)
    }

    /// Write to a temp file in the same directory, then rename over the
    /// records file.
    fn write_records(&self, records: &[TournamentResult]) -> Result<(), StoreError> {
        let tmp = self.dir.join(TEMP_FILE);
        let file = File::create(&tmp)
            .map_err(|e| StoreError::io(format!("creating {}", tmp.display()), e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records)
            .map_err(|e| StoreError::json("serializing tournament history", e))?;
        writer
            .flush()
            .map_err(|e| StoreError::io(format!("writing {}", tmp.display()), e))?;

        let target = self.records_path();
        fs::rename(&tmp, &target)
            .map_err(|e| StoreError::io(format!("replacing {}", target.display()), e))
    }
}

impl TournamentStore for FileStore {
    fn try_save(&self, result: &TournamentResult) -> Result<(), StoreError> {
        let _lock = self.lock()?;
        let mut records = self.read_records()?;
        push_front(&mut records, result, self.retention);
        self.write_records(&records)?;
        debug!(
            tournament_id = %result.id,
            stored = records.len(),
            "Tournament result saved"
        );
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<TournamentResult>, StoreError> {
        let mut records = self.read_records()?;
        records.truncate(self.retention);
        Ok(records)
    }
}
