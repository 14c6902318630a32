//! Outcome feedback formatting.
//!
//! Classifies a command outcome message as success, error, or info, and
//! splits it into spans so the display layer can highlight embedded student
//! IDs and module codes. Classification is a pure function of the message
//! text; the theme flag only changes which colors the display layer picks,
//! never the classification. Formatting never fails: unrecognized content
//! stays `Info` with plain spans.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::fields::{ModuleCode, StudentId, MODULE_CODE_SHAPE, STUDENT_ID_SHAPE};

/// Marker that promotes a message to [`FeedbackKind::Success`]. Inherited
/// from the command messages themselves, which prefix successes with it.
pub const SUCCESS_MARKER: char = '\u{2713}'; // ✓

const ERROR_KEYWORDS: [&str; 6] = ["error", "invalid", "unknown", "not found", "cannot", "failed"];

static HIGHLIGHT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("{}|{}", STUDENT_ID_SHAPE, MODULE_CODE_SHAPE)).unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Text,
    StudentId,
    ModuleCode,
}

/// A run of message text with uniform styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
}

/// A classified message, split into highlightable spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub spans: Vec<Span>,
}

/// Display theme. Selects the color table used when rendering feedback;
/// has no effect on classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("unknown theme '{}', expected 'dark' or 'light'", other)),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dark => f.write_str("dark"),
            Self::Light => f.write_str("light"),
        }
    }
}

/// Classifies a message by its content: a `✓` anywhere wins, then error
/// keywords, then `Info`.
pub fn classify(message: &str) -> FeedbackKind {
    if message.contains(SUCCESS_MARKER) {
        return FeedbackKind::Success;
    }
    let lower = message.to_lowercase();
    if ERROR_KEYWORDS.iter().any(|k| lower.contains(k)) {
        FeedbackKind::Error
    } else {
        FeedbackKind::Info
    }
}

/// Splits a message into spans, marking embedded student IDs and module
/// codes with the same shapes the validators enforce.
pub fn highlight(message: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for m in HIGHLIGHT_RE.find_iter(message) {
        if m.start() > cursor {
            spans.push(Span {
                kind: SpanKind::Text,
                text: message[cursor..m.start()].to_string(),
            });
        }
        let kind = if StudentId::is_valid(m.as_str()) {
            SpanKind::StudentId
        } else {
            debug_assert!(ModuleCode::is_valid(m.as_str()));
            SpanKind::ModuleCode
        };
        spans.push(Span {
            kind,
            text: m.as_str().to_string(),
        });
        cursor = m.end();
    }

    if cursor < message.len() {
        spans.push(Span {
            kind: SpanKind::Text,
            text: message[cursor..].to_string(),
        });
    }
    spans
}

pub fn format(message: &str) -> Feedback {
    Feedback {
        kind: classify(message),
        spans: highlight(message),
    }
}
