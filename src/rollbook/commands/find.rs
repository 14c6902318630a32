use crate::commands::CmdResult;
use crate::error::Result;
use crate::query;
use crate::store::RecordStore;

pub fn run(store: &RecordStore, term: &str) -> Result<CmdResult> {
    let listed: Vec<_> = query::find_by_name(store, term).cloned().collect();

    let message = if listed.len() == 1 {
        "1 record listed".to_string()
    } else {
        format!("{} records listed", listed.len())
    };
    Ok(CmdResult::default().with_listed(listed).with_message(message))
}
