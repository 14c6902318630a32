use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordStore;

pub fn run(store: &mut RecordStore) -> Result<CmdResult> {
    let removed = store.len();
    store.clear();

    let message = if removed == 1 {
        "\u{2713} Cleared 1 record".to_string()
    } else {
        format!("\u{2713} Cleared {} records", removed)
    };
    Ok(CmdResult::default().with_message(message))
}
