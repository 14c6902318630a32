//! Validated field types.
//!
//! Every user-entered field is wrapped in a newtype whose only constructor is
//! `parse`. Parsing trims and canonicalizes the raw input, checks it against a
//! fixed shape, and fails with the field's constraint message. Once a value
//! exists it is known-good, so the rest of the crate never re-validates.
//!
//! The student-ID and module-code shapes are shared with the feedback
//! highlighter, which marks occurrences of either inside free text.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, RollbookError};

/// Unanchored shape of a student ID, e.g. `A1234567X`.
pub(crate) const STUDENT_ID_SHAPE: &str = r"[A-Z][0-9]{7}[A-Z]";

/// Unanchored shape of a module code, e.g. `CS2103T` or `GEA1000`.
pub(crate) const MODULE_CODE_SHAPE: &str = r"[A-Z]{2,3}[0-9]{4}[A-Z]?";

static STUDENT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{}$", STUDENT_ID_SHAPE)).unwrap());

static MODULE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{}$", MODULE_CODE_SHAPE)).unwrap());

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 .,'/-]*$").unwrap());

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]+([._%+-][A-Za-z0-9]+)*@[A-Za-z0-9]+([.-][A-Za-z0-9]+)*$").unwrap()
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").unwrap());

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

static LETTER_GRADE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-F][+-]?$").unwrap());

/// A student's matriculation ID: one letter, seven digits, one letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub const CONSTRAINT: &'static str =
        "Student IDs should be a letter, followed by 7 digits, followed by a letter (e.g. A1234567X)";

    pub fn parse(raw: &str) -> Result<Self> {
        let canonical = raw.trim().to_uppercase();
        if STUDENT_ID_RE.is_match(&canonical) {
            Ok(Self(canonical))
        } else {
            Err(RollbookError::Validation(Self::CONSTRAINT.to_string()))
        }
    }

    /// Whether `candidate` already has the exact student-ID shape (no
    /// canonicalization applied). Used by the feedback highlighter.
    pub fn is_valid(candidate: &str) -> bool {
        STUDENT_ID_RE.is_match(candidate)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A module code: 2-3 uppercase letters, 4 digits, optional trailing letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleCode(String);

impl ModuleCode {
    pub const CONSTRAINT: &'static str =
        "Module codes should be 2-3 letters, 4 digits, and an optional letter (e.g. CS2103T)";

    pub fn parse(raw: &str) -> Result<Self> {
        let canonical = raw.trim().to_uppercase();
        if MODULE_CODE_RE.is_match(&canonical) {
            Ok(Self(canonical))
        } else {
            Err(RollbookError::Validation(Self::CONSTRAINT.to_string()))
        }
    }

    pub fn is_valid(candidate: &str) -> bool {
        MODULE_CODE_RE.is_match(candidate)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A display name. Inner whitespace runs collapse to single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub const CONSTRAINT: &'static str =
        "Names should start with a letter or digit and may contain letters, digits, spaces, and .,'/- punctuation";

    pub fn parse(raw: &str) -> Result<Self> {
        let canonical = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if !canonical.is_empty() && NAME_RE.is_match(&canonical) {
            Ok(Self(canonical))
        } else {
            Err(RollbookError::Validation(Self::CONSTRAINT.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An email address of the `local@domain` shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub const CONSTRAINT: &'static str =
        "Emails should be of the form local@domain, e.g. amy@u.nus.edu";

    pub fn parse(raw: &str) -> Result<Self> {
        let canonical = raw.trim().to_string();
        if EMAIL_RE.is_match(&canonical) {
            Ok(Self(canonical))
        } else {
            Err(RollbookError::Validation(Self::CONSTRAINT.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number: digits only, at least three of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub const CONSTRAINT: &'static str = "Phone numbers should contain at least 3 digits";

    pub fn parse(raw: &str) -> Result<Self> {
        let canonical = raw.trim().to_string();
        if PHONE_RE.is_match(&canonical) {
            Ok(Self(canonical))
        } else {
            Err(RollbookError::Validation(Self::CONSTRAINT.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A postal address. Any non-blank text is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub const CONSTRAINT: &'static str = "Addresses should not be blank";

    pub fn parse(raw: &str) -> Result<Self> {
        let canonical = raw.trim().to_string();
        if canonical.is_empty() {
            Err(RollbookError::Validation(Self::CONSTRAINT.to_string()))
        } else {
            Ok(Self(canonical))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A free-form categorization tag: one alphanumeric word, case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub const CONSTRAINT: &'static str = "Tags should be a single alphanumeric word";

    pub fn parse(raw: &str) -> Result<Self> {
        let canonical = raw.trim().to_string();
        if TAG_RE.is_match(&canonical) {
            Ok(Self(canonical))
        } else {
            Err(RollbookError::Validation(Self::CONSTRAINT.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A grade: a letter grade `A`-`F` with optional `+`/`-`, or a score 0-100.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grade(String);

impl Grade {
    pub const CONSTRAINT: &'static str =
        "Grades should be a letter grade A-F (optionally with + or -) or a score from 0 to 100";

    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if let Ok(score) = trimmed.parse::<u32>() {
            if score <= 100 {
                return Ok(Self(score.to_string()));
            }
            return Err(RollbookError::Validation(Self::CONSTRAINT.to_string()));
        }
        let canonical = trimmed.to_uppercase();
        if LETTER_GRADE_RE.is_match(&canonical) {
            Ok(Self(canonical))
        } else {
            Err(RollbookError::Validation(Self::CONSTRAINT.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses an attendance date in ISO `YYYY-MM-DD` form.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        RollbookError::Validation("Dates should be in YYYY-MM-DD form, e.g. 2025-01-15".to_string())
    })
}

/// Parses an assessment name: any non-blank text, trimmed.
pub fn parse_assessment(raw: &str) -> Result<String> {
    let canonical = raw.trim().to_string();
    if canonical.is_empty() {
        Err(RollbookError::Validation(
            "Assessment names should not be blank".to_string(),
        ))
    } else {
        Ok(canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_id_canonicalizes_case_and_whitespace() {
        let id = StudentId::parse("  a1234567x ").unwrap();
        assert_eq!(id.as_str(), "A1234567X");
    }

    #[test]
    fn student_id_rejects_malformed_inputs() {
        for raw in ["", "A123456X", "A12345678X", "11234567X", "A1234567", "AB1234567X"] {
            let err = StudentId::parse(raw).unwrap_err();
            assert!(matches!(err, RollbookError::Validation(_)), "accepted {:?}", raw);
        }
    }

    #[test]
    fn module_code_accepts_optional_suffix() {
        assert_eq!(ModuleCode::parse("cs2103t").unwrap().as_str(), "CS2103T");
        assert_eq!(ModuleCode::parse("GEA1000").unwrap().as_str(), "GEA1000");
        assert!(ModuleCode::parse("C2103").is_err());
        assert!(ModuleCode::parse("CSSE2103").is_err());
    }

    #[test]
    fn name_collapses_inner_whitespace() {
        let name = Name::parse("  Amy   Bee ").unwrap();
        assert_eq!(name.as_str(), "Amy Bee");
    }

    #[test]
    fn name_rejects_blank_and_leading_punctuation() {
        assert!(Name::parse("   ").is_err());
        assert!(Name::parse("-Amy").is_err());
        assert!(Name::parse("O'Neil s/o Raj").is_ok());
    }

    #[test]
    fn email_requires_local_and_domain() {
        assert!(Email::parse("amy@u.nus.edu").is_ok());
        assert!(Email::parse("amy").is_err());
        assert!(Email::parse("@nus.edu").is_err());
        assert!(Email::parse("amy@").is_err());
        assert!(Email::parse("a my@nus.edu").is_err());
    }

    #[test]
    fn phone_requires_three_digits() {
        assert!(Phone::parse("999").is_ok());
        assert!(Phone::parse("91").is_err());
        assert!(Phone::parse("9123-4567").is_err());
    }

    #[test]
    fn tag_is_one_alphanumeric_word() {
        assert!(Tag::parse("friends").is_ok());
        assert!(Tag::parse("year2").is_ok());
        assert!(Tag::parse("needs help").is_err());
        assert!(Tag::parse("").is_err());
    }

    #[test]
    fn grade_accepts_letters_and_scores() {
        assert_eq!(Grade::parse("a+").unwrap().as_str(), "A+");
        assert_eq!(Grade::parse("085").unwrap().as_str(), "85");
        assert_eq!(Grade::parse("100").unwrap().as_str(), "100");
        assert!(Grade::parse("101").is_err());
        assert!(Grade::parse("G").is_err());
        assert!(Grade::parse("A++").is_err());
    }

    #[test]
    fn date_parses_iso_form_only() {
        assert!(parse_date("2025-01-15").is_ok());
        assert!(parse_date("15/01/2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
    }
}
