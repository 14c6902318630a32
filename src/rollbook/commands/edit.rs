use crate::commands::CmdResult;
use crate::error::{Result, RollbookError};
use crate::fields::{Email, ModuleCode, Name, StudentId};
use crate::model::Profile;
use crate::store::RecordStore;
use std::collections::BTreeSet;

/// Optional replacement fields for an edit. Absent fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct RecordEdit {
    pub name: Option<String>,
    pub email: Option<String>,
    pub student_id: Option<String>,
    pub modules: Option<Vec<String>>,
}

impl RecordEdit {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.student_id.is_none()
            && self.modules.is_none()
    }
}

/// Replaces fields of the record with identity `id`. The whole edit is
/// validated before the store changes; an identity change that collides with
/// another record is rejected by the store.
pub fn run(store: &mut RecordStore, id: &str, edit: RecordEdit) -> Result<CmdResult> {
    let id = StudentId::parse(id)?;
    if edit.is_empty() {
        return Err(RollbookError::Validation(
            "Cannot edit: at least one field must be given".to_string(),
        ));
    }

    let mut updated = store.find(&id)?.clone();

    if let Some(raw) = &edit.name {
        updated = updated.with_name(Name::parse(raw)?);
    }
    if let Some(raw) = &edit.email {
        updated = updated.with_email(Email::parse(raw)?);
    }

    let profile = match updated.profile.clone() {
        Profile::Student {
            student_id,
            modules,
        } => {
            let student_id = match &edit.student_id {
                Some(raw) => StudentId::parse(raw)?,
                None => student_id,
            };
            let modules = match &edit.modules {
                Some(raw) => raw
                    .iter()
                    .map(|m| ModuleCode::parse(m))
                    .collect::<Result<BTreeSet<_>>>()?,
                None => modules,
            };
            Profile::Student {
                student_id,
                modules,
            }
        }
        // The store indexes students only, so an identity lookup cannot land
        // here; keep the match exhaustive rather than panicking.
        Profile::Contact { .. } => {
            return Err(RollbookError::Validation(
                "Cannot edit a contact record by student ID".to_string(),
            ));
        }
    };
    updated = updated.with_profile(profile);

    store.update(&id, updated.clone())?;

    let message = format!(
        "\u{2713} Updated student {}: {}",
        updated.student_id().expect("edited record is a student"),
        updated.name
    );
    Ok(CmdResult::default()
        .with_affected(vec![updated])
        .with_message(message))
}
