//! # Record store
//!
//! [`RecordStore`] owns every record in the application: an insertion-ordered
//! `Vec<Record>` paired with a `StudentId -> index` map so identity lookups
//! and uniqueness checks stay O(1). The store hands out shared references
//! only; edits replace a whole record via [`RecordStore::update`].
//!
//! The store performs no I/O. Persistence lives in [`json`], which serializes
//! [`RecordStore::all`] and rehydrates through [`RecordStore::add`].
//!
//! Invariant: `by_id` maps exactly the student IDs of records currently in
//! `records`, each to that record's position. Contact records carry no
//! identity and are reachable only through [`RecordStore::all`] and queries.

use std::collections::HashMap;

use crate::error::{Result, RollbookError};
use crate::fields::StudentId;
use crate::model::Record;

pub mod json;

#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
    by_id: HashMap<StudentId, usize>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record, rejecting identity collisions. The store is
    /// unchanged on failure.
    pub fn add(&mut self, record: Record) -> Result<()> {
        if let Some(id) = record.student_id() {
            if self.by_id.contains_key(id) {
                return Err(RollbookError::DuplicateIdentity(id.clone()));
            }
            self.by_id.insert(id.clone(), self.records.len());
        }
        self.records.push(record);
        Ok(())
    }

    /// Removes and returns the record with the given identity.
    pub fn remove(&mut self, id: &StudentId) -> Result<Record> {
        let idx = *self
            .by_id
            .get(id)
            .ok_or_else(|| RollbookError::NotFound(id.clone()))?;
        self.by_id.remove(id);
        let record = self.records.remove(idx);
        for slot in self.by_id.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }
        Ok(record)
    }

    /// Replaces the record with identity `id` in place, keeping its position.
    ///
    /// Fails with `NotFound` if `id` is absent, and with `DuplicateIdentity`
    /// if the new record's identity belongs to a different existing record.
    /// Re-using the same identity is allowed. The store is unchanged on
    /// failure.
    pub fn update(&mut self, id: &StudentId, new_record: Record) -> Result<()> {
        let idx = *self
            .by_id
            .get(id)
            .ok_or_else(|| RollbookError::NotFound(id.clone()))?;
        if let Some(new_id) = new_record.student_id() {
            if let Some(&other) = self.by_id.get(new_id) {
                if other != idx {
                    return Err(RollbookError::DuplicateIdentity(new_id.clone()));
                }
            }
        }
        self.by_id.remove(id);
        if let Some(new_id) = new_record.student_id() {
            self.by_id.insert(new_id.clone(), idx);
        }
        self.records[idx] = new_record;
        Ok(())
    }

    pub fn find(&self, id: &StudentId) -> Result<&Record> {
        self.by_id
            .get(id)
            .map(|&idx| &self.records[idx])
            .ok_or_else(|| RollbookError::NotFound(id.clone()))
    }

    /// All records, insertion order preserved.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// Value-equality containment check.
    pub fn contains(&self, record: &Record) -> bool {
        self.records.contains(record)
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.by_id.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
