use crate::commands::CmdResult;
use crate::error::Result;
use crate::fields::StudentId;
use crate::store::RecordStore;

pub fn run(store: &mut RecordStore, id: &str) -> Result<CmdResult> {
    let id = StudentId::parse(id)?;
    let removed = store.remove(&id)?;

    let message = format!("\u{2713} Deleted student {}: {}", id, removed.name);
    Ok(CmdResult::default()
        .with_affected(vec![removed])
        .with_message(message))
}
