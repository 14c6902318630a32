use crate::commands::CmdResult;
use crate::error::{Result, RollbookError};
use crate::fields::{StudentId, Tag};
use crate::store::RecordStore;

fn parse_tags<S: AsRef<str>>(tags: &[S]) -> Result<Vec<Tag>> {
    tags.iter().map(|t| Tag::parse(t.as_ref())).collect()
}

fn joined(tags: &[Tag]) -> String {
    tags.iter()
        .map(Tag::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Adds tags to a record. Already-present tags are absorbed by set semantics.
pub fn add(store: &mut RecordStore, id: &str, tags: &[String]) -> Result<CmdResult> {
    let id = StudentId::parse(id)?;
    let tags = parse_tags(tags)?;
    if tags.is_empty() {
        return Err(RollbookError::Validation(
            "Cannot tag: at least one tag must be given".to_string(),
        ));
    }

    let updated = store
        .find(&id)?
        .clone()
        .with_tags_added(tags.iter().cloned());
    store.update(&id, updated.clone())?;

    let message = format!("\u{2713} Tagged {} with {}", id, joined(&tags));
    Ok(CmdResult::default()
        .with_affected(vec![updated])
        .with_message(message))
}

/// Removes tags from a record. Tags the record does not carry are ignored.
pub fn remove(store: &mut RecordStore, id: &str, tags: &[String]) -> Result<CmdResult> {
    let id = StudentId::parse(id)?;
    let tags = parse_tags(tags)?;
    if tags.is_empty() {
        return Err(RollbookError::Validation(
            "Cannot untag: at least one tag must be given".to_string(),
        ));
    }

    let updated = store.find(&id)?.clone().with_tags_removed(&tags);
    store.update(&id, updated.clone())?;

    let message = format!("\u{2713} Untagged {} from {}", joined(&tags), id);
    Ok(CmdResult::default()
        .with_affected(vec![updated])
        .with_message(message))
}
