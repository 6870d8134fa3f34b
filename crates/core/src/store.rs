//! Flat record store.
//!
//! All records live in a single JSON array file (`patients.json`) in the data directory.
//! Every operation reads the whole file, and mutating operations rewrite it. Writes go to a
//! sibling temporary file which is then renamed over the original, so readers never observe
//! a partially written collection.
//!
//! A missing file is an empty store. The data directory is created on first write.

use crate::config::CoreConfig;
use crate::record::PatientRecord;
use crate::{VitalsError, VitalsResult};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use vitals_uuid::RecordId;

/// Append/list/delete access to the persisted record collection.
///
/// Clones share the same write lock, so read-modify-write cycles from one process never
/// interleave.
#[derive(Clone, Debug)]
pub struct RecordStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl RecordStore {
    pub fn new(cfg: &CoreConfig) -> Self {
        Self {
            path: cfg.records_file(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns every record in insertion order.
    pub fn list(&self) -> VitalsResult<Vec<PatientRecord>> {
        let _guard = self.guard();
        self.read_all()
    }

    /// Adds `record` to the end of the collection.
    pub fn append(&self, record: PatientRecord) -> VitalsResult<()> {
        let _guard = self.guard();
        let mut records = self.read_all()?;
        records.push(record);
        self.write_all(&records)
    }

    /// Removes the record with `id`. Returns `false` if no such record existed.
    pub fn delete(&self, id: &RecordId) -> VitalsResult<bool> {
        let _guard = self.guard();
        let mut records = self.read_all()?;
        let before = records.len();
        records.retain(|r| &r.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.write_all(&records)?;
        Ok(true)
    }

    /// Removes every record and returns how many were removed.
    ///
    /// An unreadable collection is still removed; it counts as zero records.
    pub fn clear(&self) -> VitalsResult<usize> {
        let _guard = self.guard();
        let removed = match self.read_all() {
            Ok(records) => records.len(),
            Err(e) => {
                tracing::warn!("clearing unreadable record store {}: {}", self.path.display(), e);
                0
            }
        };
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(removed),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
            Err(e) => Err(VitalsError::FileWrite(e)),
        }
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // The guarded value is `()`, so a poisoned lock carries no broken state.
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read_all(&self) -> VitalsResult<Vec<PatientRecord>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(VitalsError::FileRead(e)),
        };
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let de = &mut serde_json::Deserializer::from_str(&contents);
        serde_path_to_error::deserialize(de).map_err(|e| {
            tracing::warn!("failed to parse record store {}: {}", self.path.display(), e);
            VitalsError::StoreDecode(e)
        })
    }

    fn write_all(&self, records: &[PatientRecord]) -> VitalsResult<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).map_err(VitalsError::StorageDirCreation)?;
            }
        }

        let json = serde_json::to_string_pretty(records).map_err(VitalsError::Serialization)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(VitalsError::FileWrite)?;
        fs::rename(&tmp, &self.path).map_err(VitalsError::FileWrite)?;

        tracing::debug!("wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}
