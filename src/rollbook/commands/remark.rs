use crate::commands::CmdResult;
use crate::error::Result;
use crate::fields::StudentId;
use crate::store::RecordStore;

/// Sets the free-text remark, or clears it when `remark` is `None` or blank.
pub fn run(store: &mut RecordStore, id: &str, remark: Option<&str>) -> Result<CmdResult> {
    let id = StudentId::parse(id)?;
    let remark = remark
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string);
    let cleared = remark.is_none();

    let updated = store.find(&id)?.clone().with_remark(remark);
    store.update(&id, updated.clone())?;

    let message = if cleared {
        format!("\u{2713} Removed remark for {}", id)
    } else {
        format!("\u{2713} Updated remark for {}", id)
    };
    Ok(CmdResult::default()
        .with_affected(vec![updated])
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::RecordBuilder;

    fn store_with_amy() -> RecordStore {
        let mut store = RecordStore::new();
        store
            .add(RecordBuilder::new().with_student_id("A1234567X").build())
            .unwrap();
        store
    }

    #[test]
    fn sets_a_remark() {
        let mut store = store_with_amy();
        let result = run(&mut store, "A1234567X", Some("quiet in tutorials")).unwrap();

        assert_eq!(result.messages, ["✓ Updated remark for A1234567X"]);
        let id = StudentId::parse("A1234567X").unwrap();
        assert_eq!(
            store.find(&id).unwrap().remark.as_deref(),
            Some("quiet in tutorials")
        );
    }

    #[test]
    fn blank_remark_clears() {
        let mut store = store_with_amy();
        run(&mut store, "A1234567X", Some("quiet in tutorials")).unwrap();
        let result = run(&mut store, "A1234567X", Some("  ")).unwrap();

        assert_eq!(result.messages, ["✓ Removed remark for A1234567X"]);
        let id = StudentId::parse("A1234567X").unwrap();
        assert!(store.find(&id).unwrap().remark.is_none());
    }
}
