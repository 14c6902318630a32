use crate::commands::CmdResult;
use crate::error::Result;
use crate::fields::StudentId;
use crate::store::RecordStore;

pub fn run(store: &RecordStore, id: &str) -> Result<CmdResult> {
    let id = StudentId::parse(id)?;
    let record = store.find(&id)?;
    Ok(CmdResult::default().with_listed(vec![record.clone()]))
}
