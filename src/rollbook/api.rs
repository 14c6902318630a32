//! # API facade
//!
//! [`RollbookApi`] is the single entry point for every operation, regardless
//! of the client driving it. It owns the [`RecordStore`], dispatches to the
//! command modules, and returns structured `Result<CmdResult>` values. It
//! performs no I/O and no presentation: loading, saving, and rendering are
//! the client's job (the CLI wires [`crate::store::json::JsonStorage`] around
//! it and renders through [`crate::feedback`]).

use crate::commands;
use crate::error::Result;
use crate::store::RecordStore;

pub use crate::commands::add::{NewContact, NewStudent};
pub use crate::commands::edit::RecordEdit;
pub use crate::commands::CmdResult;

#[derive(Default)]
pub struct RollbookApi {
    store: RecordStore,
}

impl RollbookApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-populated store (e.g. rehydrated from disk).
    pub fn from_store(store: RecordStore) -> Self {
        Self { store }
    }

    /// Read access for persistence and direct queries.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn add_student(&mut self, input: NewStudent) -> Result<commands::CmdResult> {
        commands::add::student(&mut self.store, input)
    }

    pub fn add_contact(&mut self, input: NewContact) -> Result<commands::CmdResult> {
        commands::add::contact(&mut self.store, input)
    }

    pub fn edit(&mut self, id: &str, edit: RecordEdit) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, id, edit)
    }

    pub fn delete(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view(&self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn find(&self, term: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.store, term)
    }

    pub fn filter(&self, tags: &[String]) -> Result<commands::CmdResult> {
        commands::filter::run(&self.store, tags)
    }

    pub fn mark_attendance(&mut self, id: &str, date: &str, status: &str) -> Result<commands::CmdResult> {
        commands::attendance::run(&mut self.store, id, date, status)
    }

    pub fn set_grade(&mut self, id: &str, assessment: &str, grade: &str) -> Result<commands::CmdResult> {
        commands::grade::set(&mut self.store, id, assessment, grade)
    }

    pub fn delete_grade(&mut self, id: &str, assessment: &str) -> Result<commands::CmdResult> {
        commands::grade::delete(&mut self.store, id, assessment)
    }

    pub fn remark(&mut self, id: &str, remark: Option<&str>) -> Result<commands::CmdResult> {
        commands::remark::run(&mut self.store, id, remark)
    }

    pub fn tag(&mut self, id: &str, tags: &[String]) -> Result<commands::CmdResult> {
        commands::tag::add(&mut self.store, id, tags)
    }

    pub fn untag(&mut self, id: &str, tags: &[String]) -> Result<commands::CmdResult> {
        commands::tag::remove(&mut self.store, id, tags)
    }

    pub fn clear(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amy() -> NewStudent {
        NewStudent {
            name: "Amy Bee".into(),
            student_id: "A1234567X".into(),
            email: "amy@u.nus.edu".into(),
            modules: vec![],
            tags: vec![],
        }
    }

    #[test]
    fn api_round_trip_through_commands() {
        let mut api = RollbookApi::new();
        api.add_student(amy()).unwrap();
        api.mark_attendance("A1234567X", "2025-01-15", "present").unwrap();
        api.set_grade("A1234567X", "Midterm", "85").unwrap();

        let listed = api.list().unwrap().listed;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].attendance_counts(), (1, 1));

        api.delete("A1234567X").unwrap();
        assert!(api.store().is_empty());
    }

    #[test]
    fn from_store_preserves_contents() {
        let mut api = RollbookApi::new();
        api.add_student(amy()).unwrap();
        let rehydrated = RollbookApi::from_store(api.store().clone());
        assert_eq!(rehydrated.store().len(), 1);
    }
}
