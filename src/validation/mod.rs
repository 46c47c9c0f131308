//! Field validation verdicts and the per-field rule dispatch.
//!
//! Each field is checked by an ordered list of rules evaluated in priority
//! order, short-circuiting on the first violation. Validators are pure:
//! they never mutate input, never fail, and can be re-run on every edit.

pub mod rules;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one field of the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    FullName,
    Username,
    Bio,
    Email,
    Phone,
}

impl FieldId {
    /// All form fields, in display order.
    pub const ALL: [FieldId; 5] = [
        FieldId::FullName,
        FieldId::Username,
        FieldId::Bio,
        FieldId::Email,
        FieldId::Phone,
    ];

    /// The field's snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::FullName => "full_name",
            FieldId::Username => "username",
            FieldId::Bio => "bio",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
        }
    }

    /// Look up a field by its snake_case name.
    pub fn from_name(name: &str) -> Option<Self> {
        FieldId::ALL.iter().copied().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a field value failed validation.
///
/// Each field reports at most one kind per evaluation: the first rule
/// violated in that field's priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The field is empty but must be filled in
    Required,

    /// Full name has fewer than two words
    IncompleteName,

    /// A word of the full name is shorter than two characters
    WordTooShort,

    /// The value contains characters outside the field's allowed set
    InvalidCharacters,

    /// Username length is outside the 3..=20 range
    InvalidLength,

    /// Bio exceeds the maximum length
    TooLong,

    /// The value does not match the field's expected shape
    InvalidFormat,

    /// Phone number has fewer digits than country code + area code + number
    TooFewDigits,
}

/// Outcome of validating one field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Valid,
    Invalid(ErrorKind),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// The error kind, if the verdict is invalid.
    pub fn error(&self) -> Option<ErrorKind> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(kind) => Some(*kind),
        }
    }
}

/// Validate a single field value.
///
/// Phone values are expected to already carry the display mask; the form's
/// edit pipeline reformats phone input before validating it.
pub fn validate(field: FieldId, value: &str) -> Verdict {
    match field {
        FieldId::FullName => rules::full_name(value),
        FieldId::Username => rules::username(value),
        FieldId::Bio => rules::bio(value),
        FieldId::Email => rules::email(value),
        FieldId::Phone => rules::phone(value),
    }
}
