//! Core record types.
//!
//! A [`Record`] is an immutable value object: edits go through the `with_*`
//! methods, which return a new validated copy for the store to swap in. The
//! student/contact split is an explicit [`Profile`] sum type so that every
//! consumer matches exhaustively instead of probing nullable fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::{Result, RollbookError};
use crate::fields::{Address, Email, Grade, ModuleCode, Name, Phone, StudentId, Tag};

/// Present/absent status of a single attendance mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_lowercase().as_str() {
            "present" | "p" => Ok(Self::Present),
            "absent" | "a" => Ok(Self::Absent),
            _ => Err(RollbookError::Validation(
                "Attendance status should be 'present' or 'absent'".to_string(),
            )),
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => f.write_str("present"),
            Self::Absent => f.write_str("absent"),
        }
    }
}

/// One entry in a record's attendance log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceMark {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// The variant-specific half of a record.
///
/// Students carry an identity code and module enrollments; generic contacts
/// carry phone and address instead. A record is exactly one of the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Profile {
    Student {
        student_id: StudentId,
        modules: BTreeSet<ModuleCode>,
    },
    Contact {
        phone: Phone,
        address: Address,
    },
}

/// One student or contact entry in the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: Name,
    pub email: Email,
    pub profile: Profile,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
    #[serde(default)]
    pub attendance: Vec<AttendanceMark>,
    #[serde(default)]
    pub grades: BTreeMap<String, Grade>,
    #[serde(default)]
    pub remark: Option<String>,
}

impl Record {
    pub fn student(
        name: Name,
        student_id: StudentId,
        email: Email,
        modules: BTreeSet<ModuleCode>,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            email,
            profile: Profile::Student {
                student_id,
                modules,
            },
            tags,
            attendance: Vec::new(),
            grades: BTreeMap::new(),
            remark: None,
        }
    }

    pub fn contact(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            email,
            profile: Profile::Contact { phone, address },
            tags,
            attendance: Vec::new(),
            grades: BTreeMap::new(),
            remark: None,
        }
    }

    /// Builds a student record from raw field strings.
    ///
    /// Validation is all-or-nothing: the first malformed field aborts with its
    /// constraint message and nothing is constructed.
    pub fn parse_student<S: AsRef<str>>(
        name: &str,
        student_id: &str,
        email: &str,
        modules: &[S],
        tags: &[S],
    ) -> Result<Self> {
        let name = Name::parse(name)?;
        let student_id = StudentId::parse(student_id)?;
        let email = Email::parse(email)?;
        let modules = modules
            .iter()
            .map(|m| ModuleCode::parse(m.as_ref()))
            .collect::<Result<BTreeSet<_>>>()?;
        let tags = parse_tags(tags)?;
        Ok(Self::student(name, student_id, email, modules, tags))
    }

    /// Builds a generic contact record from raw field strings, with the same
    /// all-or-nothing validation as [`Record::parse_student`].
    pub fn parse_contact<S: AsRef<str>>(
        name: &str,
        phone: &str,
        email: &str,
        address: &str,
        tags: &[S],
    ) -> Result<Self> {
        let name = Name::parse(name)?;
        let phone = Phone::parse(phone)?;
        let email = Email::parse(email)?;
        let address = Address::parse(address)?;
        let tags = parse_tags(tags)?;
        Ok(Self::contact(name, phone, email, address, tags))
    }

    /// The identity code, present only on the student variant.
    pub fn student_id(&self) -> Option<&StudentId> {
        match &self.profile {
            Profile::Student { student_id, .. } => Some(student_id),
            Profile::Contact { .. } => None,
        }
    }

    pub fn is_student(&self) -> bool {
        matches!(self.profile, Profile::Student { .. })
    }

    pub fn with_name(mut self, name: Name) -> Self {
        self.name = name;
        self
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = email;
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_tags_added(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    pub fn with_tags_removed(mut self, tags: &[Tag]) -> Self {
        for tag in tags {
            self.tags.remove(tag);
        }
        self
    }

    /// Appends an attendance mark. Marking a date that is already in the log
    /// replaces that entry's status instead of adding a duplicate.
    pub fn with_mark(mut self, mark: AttendanceMark) -> Self {
        match self.attendance.iter_mut().find(|m| m.date == mark.date) {
            Some(existing) => existing.status = mark.status,
            None => self.attendance.push(mark),
        }
        self
    }

    pub fn with_grade(mut self, assessment: String, grade: Grade) -> Self {
        self.grades.insert(assessment, grade);
        self
    }

    pub fn without_grade(mut self, assessment: &str) -> Self {
        self.grades.remove(assessment);
        self
    }

    pub fn with_remark(mut self, remark: Option<String>) -> Self {
        self.remark = remark;
        self
    }

    /// (present, total) counts over the attendance log.
    pub fn attendance_counts(&self) -> (usize, usize) {
        let present = self
            .attendance
            .iter()
            .filter(|m| m.status == AttendanceStatus::Present)
            .count();
        (present, self.attendance.len())
    }
}

fn parse_tags<S: AsRef<str>>(tags: &[S]) -> Result<BTreeSet<Tag>> {
    tags.iter().map(|t| Tag::parse(t.as_ref())).collect()
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub const DEFAULT_NAME: &str = "Amy Bee";
    pub const DEFAULT_STUDENT_ID: &str = "A1234567X";
    pub const DEFAULT_EMAIL: &str = "amy@u.nus.edu";

    /// Fluent builder for records in tests. Defaults to a student; supplying
    /// a phone or address switches the build to the contact variant.
    pub struct RecordBuilder {
        name: String,
        student_id: String,
        email: String,
        phone: Option<String>,
        address: Option<String>,
        modules: Vec<String>,
        tags: Vec<String>,
        marks: Vec<AttendanceMark>,
        grades: Vec<(String, String)>,
        remark: Option<String>,
    }

    impl Default for RecordBuilder {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RecordBuilder {
        pub fn new() -> Self {
            Self {
                name: DEFAULT_NAME.to_string(),
                student_id: DEFAULT_STUDENT_ID.to_string(),
                email: DEFAULT_EMAIL.to_string(),
                phone: None,
                address: None,
                modules: Vec::new(),
                tags: Vec::new(),
                marks: Vec::new(),
                grades: Vec::new(),
                remark: None,
            }
        }

        pub fn with_name(mut self, name: &str) -> Self {
            self.name = name.to_string();
            self
        }

        pub fn with_student_id(mut self, student_id: &str) -> Self {
            self.student_id = student_id.to_string();
            self
        }

        pub fn with_email(mut self, email: &str) -> Self {
            self.email = email.to_string();
            self
        }

        pub fn with_phone(mut self, phone: &str) -> Self {
            self.phone = Some(phone.to_string());
            self
        }

        pub fn with_address(mut self, address: &str) -> Self {
            self.address = Some(address.to_string());
            self
        }

        pub fn with_modules(mut self, modules: &[&str]) -> Self {
            self.modules = modules.iter().map(|m| m.to_string()).collect();
            self
        }

        pub fn with_tags(mut self, tags: &[&str]) -> Self {
            self.tags = tags.iter().map(|t| t.to_string()).collect();
            self
        }

        pub fn with_mark(mut self, date: &str, status: AttendanceStatus) -> Self {
            self.marks.push(AttendanceMark {
                date: crate::fields::parse_date(date).unwrap(),
                status,
            });
            self
        }

        pub fn with_grade(mut self, assessment: &str, grade: &str) -> Self {
            self.grades.push((assessment.to_string(), grade.to_string()));
            self
        }

        pub fn with_remark(mut self, remark: &str) -> Self {
            self.remark = Some(remark.to_string());
            self
        }

        pub fn build(self) -> Record {
            let mut record = if self.phone.is_some() || self.address.is_some() {
                Record::parse_contact(
                    &self.name,
                    self.phone.as_deref().unwrap_or("91234567"),
                    &self.email,
                    self.address.as_deref().unwrap_or("13 Computing Drive"),
                    &self.tags,
                )
                .unwrap()
            } else {
                Record::parse_student(
                    &self.name,
                    &self.student_id,
                    &self.email,
                    &self.modules,
                    &self.tags,
                )
                .unwrap()
            };
            for mark in self.marks {
                record = record.with_mark(mark);
            }
            for (assessment, grade) in self.grades {
                record = record.with_grade(assessment, Grade::parse(&grade).unwrap());
            }
            record.with_remark(self.remark)
        }
    }
}
