use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

/// Raw fields for a new student record.
#[derive(Debug, Clone, Default)]
pub struct NewStudent {
    pub name: String,
    pub student_id: String,
    pub email: String,
    pub modules: Vec<String>,
    pub tags: Vec<String>,
}

/// Raw fields for a new generic contact record.
#[derive(Debug, Clone, Default)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub tags: Vec<String>,
}

pub fn student(store: &mut RecordStore, input: NewStudent) -> Result<CmdResult> {
    let record = Record::parse_student(
        &input.name,
        &input.student_id,
        &input.email,
        &input.modules,
        &input.tags,
    )?;
    let message = format!(
        "\u{2713} Added student {}: {}",
        record.student_id().expect("student record has an id"),
        record.name
    );
    store.add(record.clone())?;

    Ok(CmdResult::default()
        .with_affected(vec![record])
        .with_message(message))
}

pub fn contact(store: &mut RecordStore, input: NewContact) -> Result<CmdResult> {
    let record = Record::parse_contact(
        &input.name,
        &input.phone,
        &input.email,
        &input.address,
        &input.tags,
    )?;
    let message = format!("\u{2713} Added contact: {}", record.name);
    store.add(record.clone())?;

    Ok(CmdResult::default()
        .with_affected(vec![record])
        .with_message(message))
}
