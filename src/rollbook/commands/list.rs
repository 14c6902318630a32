use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordStore;

pub fn run(store: &RecordStore) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed(store.all().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::RecordBuilder;

    #[test]
    fn lists_all_records_in_store_order() {
        let mut store = RecordStore::new();
        store
            .add(RecordBuilder::new().with_student_id("A7654321Y").build())
            .unwrap();
        store
            .add(RecordBuilder::new().with_student_id("A1234567X").build())
            .unwrap();

        let result = run(&store).unwrap();

        let ids: Vec<_> = result
            .listed
            .iter()
            .map(|r| r.student_id().unwrap().as_str().to_string())
            .collect();
        assert_eq!(ids, ["A7654321Y", "A1234567X"]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = RecordStore::new();
        let result = run(&store).unwrap();
        assert!(result.listed.is_empty());
        assert!(result.messages.is_empty());
    }
}
