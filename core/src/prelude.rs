use std::fmt;

/// Describes what was wrong with a raw plan payload.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InputIssue {
    #[error("payload is not valid JSON: {reason}")]
    NotJson { reason: String },
    #[error("expected an object keyed by semester number, found {found}")]
    NotAMapping { found: JsonKind },
    #[error("semester {key:?} must map to a list of courses, found {found}")]
    NotASequence { key: String, found: JsonKind },
    #[error("semester key {key:?} is not a positive integer")]
    BadSemesterKey { key: String },
    #[error("semester {number} appears more than once")]
    DuplicateSemester { number: u32 },
    #[error("semester {key:?}, course {position}: {reason}")]
    MalformedCourse {
        key: String,
        position: usize,
        reason: String,
    },
    #[error("semester {number}, course {position}: credits must be a non-negative number, found {credits}")]
    InvalidCredits {
        number: u32,
        position: usize,
        credits: f64,
    },
}

/// Common error type for plan normalization.
///
/// The issue is part of the message rather than a separate source, so error
/// chains print it once.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("invalid input: {0}")]
    InvalidInput(InputIssue),
}

impl From<InputIssue> for PlanError {
    fn from(issue: InputIssue) -> Self {
        PlanError::InvalidInput(issue)
    }
}

pub type PlanResult<T> = Result<T, PlanError>;

/// Coarse JSON type name used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonKind::Null,
            serde_json::Value::Bool(_) => JsonKind::Bool,
            serde_json::Value::Number(_) => JsonKind::Number,
            serde_json::Value::String(_) => JsonKind::String,
            serde_json::Value::Array(_) => JsonKind::Array,
            serde_json::Value::Object(_) => JsonKind::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "a boolean",
            JsonKind::Number => "a number",
            JsonKind::String => "a string",
            JsonKind::Array => "an array",
            JsonKind::Object => "an object",
        };
        f.write_str(name)
    }
}
