//! JSON persistence for the record list.
//!
//! The persisted shape is the ordered record sequence from
//! [`RecordStore::all`]; loading rehydrates through [`RecordStore::add`] so
//! the identity index is rebuilt and a corrupted file that repeats a student
//! ID is rejected rather than silently deduplicated.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RollbookError};
use crate::model::Record;
use crate::store::RecordStore;

pub const DATA_FILENAME: &str = "records.json";

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Storage backed by `records.json` inside `data_dir`.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            path: data_dir.as_ref().join(DATA_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the record list. A missing file yields an empty store.
    pub fn load(&self) -> Result<RecordStore> {
        if !self.path.exists() {
            return Ok(RecordStore::new());
        }
        let content = fs::read_to_string(&self.path).map_err(RollbookError::Io)?;
        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(RollbookError::Serialization)?;

        let mut store = RecordStore::new();
        for record in records {
            store.add(record)?;
        }
        Ok(store)
    }

    pub fn save(&self, store: &RecordStore) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(RollbookError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(store.all()).map_err(RollbookError::Serialization)?;
        fs::write(&self.path, content).map_err(RollbookError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::RecordBuilder;
    use crate::model::AttendanceStatus;

    #[test]
    fn load_missing_file_yields_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path());
        let store = storage.load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn save_and_load_round_trips_order_and_fields() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path());

        let mut store = RecordStore::new();
        store
            .add(
                RecordBuilder::new()
                    .with_student_id("A7654321Y")
                    .with_name("Bob Choo")
                    .with_modules(&["CS2103T"])
                    .with_mark("2025-01-15", AttendanceStatus::Present)
                    .with_grade("Midterm", "85")
                    .with_remark("asks good questions")
                    .build(),
            )
            .unwrap();
        store
            .add(RecordBuilder::new().with_student_id("A1234567X").build())
            .unwrap();
        storage.save(&store).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.all(), store.all());
    }

    #[test]
    fn load_rejects_corrupt_json() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path());
        std::fs::write(storage.path(), "not json").unwrap();

        let err = storage.load().unwrap_err();
        assert!(matches!(err, RollbookError::Serialization(_)));
    }

    #[test]
    fn load_rejects_duplicate_identities_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path());

        let record = RecordBuilder::new().build();
        let doubled = serde_json::to_string(&vec![record.clone(), record]).unwrap();
        std::fs::write(storage.path(), doubled).unwrap();

        let err = storage.load().unwrap_err();
        assert!(matches!(err, RollbookError::DuplicateIdentity(_)));
    }
}
