use crate::commands::CmdResult;
use crate::error::Result;
use crate::fields::Tag;
use crate::query;
use crate::store::RecordStore;
use std::collections::BTreeSet;

/// Lists records carrying every one of the given tags.
pub fn run<S: AsRef<str>>(store: &RecordStore, tags: &[S]) -> Result<CmdResult> {
    let wanted = tags
        .iter()
        .map(|t| Tag::parse(t.as_ref()))
        .collect::<Result<BTreeSet<_>>>()?;

    let listed: Vec<_> = query::filter_by_tags(store, wanted).cloned().collect();

    let message = if listed.len() == 1 {
        "1 record listed".to_string()
    } else {
        format!("{} records listed", listed.len())
    };
    Ok(CmdResult::default().with_listed(listed).with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RollbookError;
    use crate::model::fixtures::RecordBuilder;

    fn tagged_store() -> RecordStore {
        let mut store = RecordStore::new();
        store
            .add(
                RecordBuilder::new()
                    .with_student_id("A1111111A")
                    .with_tags(&["friends", "year2"])
                    .build(),
            )
            .unwrap();
        store
            .add(
                RecordBuilder::new()
                    .with_student_id("A2222222B")
                    .with_tags(&["friends"])
                    .build(),
            )
            .unwrap();
        store
    }

    #[test]
    fn requires_all_tags() {
        let store = tagged_store();
        let result = run(&store, &["friends", "year2"]).unwrap();
        assert_eq!(result.listed.len(), 1);
    }

    #[test]
    fn empty_tag_list_yields_everything() {
        let store = tagged_store();
        let result = run::<&str>(&store, &[]).unwrap();
        assert_eq!(result.listed.len(), 2);
    }

    #[test]
    fn malformed_tag_is_rejected() {
        let store = tagged_store();
        let err = run(&store, &["no spaces allowed"]).unwrap_err();
        assert!(matches!(err, RollbookError::Validation(_)));
    }
}
