use crate::commands::CmdResult;
use crate::error::Result;
use crate::fields::{parse_date, StudentId};
use crate::model::{AttendanceMark, AttendanceStatus};
use crate::store::RecordStore;

/// Marks a student present or absent on a date. Re-marking a date replaces
/// the earlier entry for that date.
pub fn run(store: &mut RecordStore, id: &str, date: &str, status: &str) -> Result<CmdResult> {
    let id = StudentId::parse(id)?;
    let date = parse_date(date)?;
    let status = AttendanceStatus::parse(status)?;

    let updated = store
        .find(&id)?
        .clone()
        .with_mark(AttendanceMark { date, status });
    store.update(&id, updated.clone())?;

    let message = format!("\u{2713} Marked {} {} on {}", id, status, date);
    Ok(CmdResult::default()
        .with_affected(vec![updated])
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RollbookError;
    use crate::model::fixtures::RecordBuilder;

    fn store_with_amy() -> RecordStore {
        let mut store = RecordStore::new();
        store
            .add(RecordBuilder::new().with_student_id("A1234567X").build())
            .unwrap();
        store
    }

    #[test]
    fn appends_a_mark() {
        let mut store = store_with_amy();

        let result = run(&mut store, "A1234567X", "2025-01-15", "present").unwrap();

        assert_eq!(result.messages, ["✓ Marked A1234567X present on 2025-01-15"]);
        let id = StudentId::parse("A1234567X").unwrap();
        assert_eq!(store.find(&id).unwrap().attendance_counts(), (1, 1));
    }

    #[test]
    fn remarking_a_date_replaces_the_entry() {
        let mut store = store_with_amy();
        run(&mut store, "A1234567X", "2025-01-15", "absent").unwrap();
        run(&mut store, "A1234567X", "2025-01-15", "present").unwrap();

        let id = StudentId::parse("A1234567X").unwrap();
        let record = store.find(&id).unwrap();
        assert_eq!(record.attendance.len(), 1);
        assert_eq!(record.attendance[0].status, AttendanceStatus::Present);
    }

    #[test]
    fn bad_date_or_status_is_validation_error() {
        let mut store = store_with_amy();
        assert!(matches!(
            run(&mut store, "A1234567X", "15/01/2025", "present").unwrap_err(),
            RollbookError::Validation(_)
        ));
        assert!(matches!(
            run(&mut store, "A1234567X", "2025-01-15", "late").unwrap_err(),
            RollbookError::Validation(_)
        ));
    }

    #[test]
    fn unknown_identity_is_not_found() {
        let mut store = store_with_amy();
        let err = run(&mut store, "A0000000Z", "2025-01-15", "present").unwrap_err();
        assert!(matches!(err, RollbookError::NotFound(_)));
    }
}
