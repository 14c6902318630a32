//! Read-only queries over the store.
//!
//! Both queries return fresh lazy iterators over the store's records, in
//! store order, without mutating anything; calling a query again restarts it.

use std::collections::BTreeSet;

use crate::fields::Tag;
use crate::model::Record;
use crate::store::RecordStore;

/// Records whose name contains `query`, case-insensitively. An empty (or
/// all-whitespace) query yields every record.
pub fn find_by_name<'a>(
    store: &'a RecordStore,
    query: &str,
) -> impl Iterator<Item = &'a Record> + 'a {
    let needle = query.trim().to_lowercase();
    store
        .all()
        .iter()
        .filter(move |r| needle.is_empty() || r.name.as_str().to_lowercase().contains(&needle))
}

/// Records whose tag set contains every tag in `tags` (AND semantics). An
/// empty tag set yields every record.
pub fn filter_by_tags(
    store: &RecordStore,
    tags: BTreeSet<Tag>,
) -> impl Iterator<Item = &Record> + '_ {
    store
        .all()
        .iter()
        .filter(move |r| tags.iter().all(|t| r.tags.contains(t)))
}
