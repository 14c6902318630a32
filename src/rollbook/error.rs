use crate::fields::StudentId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollbookError {
    /// A field failed validation. The message is the constraint text and is
    /// surfaced to the user verbatim.
    #[error("{0}")]
    Validation(String),

    #[error("Cannot add: a record with student ID {0} already exists")]
    DuplicateIdentity(StudentId),

    #[error("Student ID {0} not found in the record list")]
    NotFound(StudentId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RollbookError>;
