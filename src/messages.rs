//! Human-readable error messages.
//!
//! Presentation-only: a pure lookup from a field and its error kind to the
//! string shown next to the widget. The form gates display on touched
//! state; this table knows nothing about that.

use crate::validation::{ErrorKind, FieldId};

/// The display message for a field failing with the given kind.
pub fn message(field: FieldId, kind: ErrorKind) -> &'static str {
    use ErrorKind::*;
    use FieldId::*;

    match (field, kind) {
        (FullName, Required) => "Full name is required",
        (FullName, IncompleteName) => "Enter your first and last name",
        (FullName, WordTooShort) => "Each name must have at least 2 letters",
        (FullName, InvalidCharacters) => "Use only letters in your name",

        (Username, Required) => "Username is required",
        (Username, InvalidLength) => "Username must be between 3 and 20 characters",
        (Username, InvalidCharacters) => "Use only letters, numbers and underscore",

        (Bio, TooLong) => "Bio must be at most 250 characters",

        (Email, Required) => "Email is required",
        (Email, InvalidFormat) => "Enter a valid email address",

        (Phone, Required) => "Phone number is required",
        (Phone, TooFewDigits) => "The number needs an area code and at least 10 digits",
        (Phone, InvalidFormat) => "Invalid format. Use: +55 XX XXXXX-XXXX",

        // Kinds the field's rule table never produces
        _ => "Invalid value",
    }
}
