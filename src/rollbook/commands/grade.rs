use crate::commands::CmdResult;
use crate::error::{Result, RollbookError};
use crate::fields::{parse_assessment, Grade, StudentId};
use crate::store::RecordStore;

/// Sets (or overwrites) the grade for an assessment.
pub fn set(store: &mut RecordStore, id: &str, assessment: &str, grade: &str) -> Result<CmdResult> {
    let id = StudentId::parse(id)?;
    let assessment = parse_assessment(assessment)?;
    let grade = Grade::parse(grade)?;

    let updated = store
        .find(&id)?
        .clone()
        .with_grade(assessment.clone(), grade.clone());
    store.update(&id, updated.clone())?;

    let message = format!("\u{2713} Graded {} for {}: {}", assessment, id, grade);
    Ok(CmdResult::default()
        .with_affected(vec![updated])
        .with_message(message))
}

/// Removes the grade for an assessment.
pub fn delete(store: &mut RecordStore, id: &str, assessment: &str) -> Result<CmdResult> {
    let id = StudentId::parse(id)?;
    let assessment = parse_assessment(assessment)?;

    let current = store.find(&id)?;
    if !current.grades.contains_key(&assessment) {
        return Err(RollbookError::Validation(format!(
            "Grade for '{}' not found under {}",
            assessment, id
        )));
    }

    let updated = current.clone().without_grade(&assessment);
    store.update(&id, updated.clone())?;

    let message = format!("\u{2713} Removed grade {} for {}", assessment, id);
    Ok(CmdResult::default()
        .with_affected(vec![updated])
        .with_message(message))
}
