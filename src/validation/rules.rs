//! The per-field rule tables.
//!
//! Every field owns an ordered slice of `(predicate, ErrorKind)` pairs;
//! evaluation walks the slice and stops at the first violated predicate,
//! so each verdict carries at most one error kind.

use super::{ErrorKind, Verdict};
use once_cell::sync::Lazy;
use regex::Regex;

/// Latin letters (including accented ones) and whitespace.
static NAME_CHARSET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ\s]*$").expect("Failed to compile name charset regex")
});

/// Letters, digits and underscore.
static USERNAME_CHARSET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]*$").expect("Failed to compile username charset regex"));

/// The canonical display shape: `+55 DD DDDD(D)-DDDD`.
static PHONE_FORMAT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+55 \d{2} \d{4,5}-\d{4}$").expect("Failed to compile phone format regex"));

/// Maximum bio length in characters.
pub const MAX_BIO_LENGTH: usize = 250;

/// Minimum digit count for a phone value: country code + area code + number.
pub const MIN_PHONE_DIGITS: usize = 12;

/// One validation rule: a predicate that detects a violation, and the kind
/// reported when it fires.
struct Rule {
    violated: fn(&str) -> bool,
    kind: ErrorKind,
}

/// Walk the rules in priority order and report the first violation.
fn first_violation(rules: &[Rule], value: &str) -> Verdict {
    for rule in rules {
        if (rule.violated)(value) {
            return Verdict::Invalid(rule.kind);
        }
    }
    Verdict::Valid
}

fn is_empty(value: &str) -> bool {
    value.is_empty()
}

fn lacks_second_word(value: &str) -> bool {
    value.split_whitespace().count() < 2
}

fn has_short_word(value: &str) -> bool {
    value.split_whitespace().any(|word| word.chars().count() < 2)
}

fn has_non_name_chars(value: &str) -> bool {
    !NAME_CHARSET_REGEX.is_match(value)
}

fn has_bad_username_length(value: &str) -> bool {
    let len = value.chars().count();
    !(3..=20).contains(&len)
}

fn has_non_username_chars(value: &str) -> bool {
    !USERNAME_CHARSET_REGEX.is_match(value)
}

fn exceeds_bio_length(value: &str) -> bool {
    value.chars().count() > MAX_BIO_LENGTH
}

fn is_malformed_email(value: &str) -> bool {
    !has_email_shape(value)
}

/// Basic email shape check: a single `@` with a non-empty local part and a
/// dotted domain whose labels are all non-empty.
fn has_email_shape(email: &str) -> bool {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let (local, domain) = (parts[0], parts[1]);
    if local.is_empty() {
        return false;
    }
    if domain.is_empty() || !domain.contains('.') {
        return false;
    }

    domain.split('.').all(|label| !label.is_empty())
}

fn has_too_few_phone_digits(value: &str) -> bool {
    value.chars().filter(|c| c.is_ascii_digit()).count() < MIN_PHONE_DIGITS
}

fn is_malformed_phone(value: &str) -> bool {
    !PHONE_FORMAT_REGEX.is_match(value)
}

const FULL_NAME_RULES: &[Rule] = &[
    Rule { violated: is_empty, kind: ErrorKind::Required },
    Rule { violated: lacks_second_word, kind: ErrorKind::IncompleteName },
    Rule { violated: has_short_word, kind: ErrorKind::WordTooShort },
    Rule { violated: has_non_name_chars, kind: ErrorKind::InvalidCharacters },
];

const USERNAME_RULES: &[Rule] = &[
    Rule { violated: is_empty, kind: ErrorKind::Required },
    Rule { violated: has_bad_username_length, kind: ErrorKind::InvalidLength },
    Rule { violated: has_non_username_chars, kind: ErrorKind::InvalidCharacters },
];

const BIO_RULES: &[Rule] = &[
    // Bio is optional: an empty value violates nothing.
    Rule { violated: exceeds_bio_length, kind: ErrorKind::TooLong },
];

const EMAIL_RULES: &[Rule] = &[
    Rule { violated: is_empty, kind: ErrorKind::Required },
    Rule { violated: is_malformed_email, kind: ErrorKind::InvalidFormat },
];

const PHONE_RULES: &[Rule] = &[
    Rule { violated: is_empty, kind: ErrorKind::Required },
    Rule { violated: has_too_few_phone_digits, kind: ErrorKind::TooFewDigits },
    Rule { violated: is_malformed_phone, kind: ErrorKind::InvalidFormat },
];

/// Validate a full name: at least two words, each of two or more letters,
/// Latin letters and spaces only.
pub fn full_name(value: &str) -> Verdict {
    first_violation(FULL_NAME_RULES, value)
}

/// Validate a username: 3-20 characters, letters, digits and underscore.
pub fn username(value: &str) -> Verdict {
    first_violation(USERNAME_RULES, value)
}

/// Validate a bio: optional, at most [`MAX_BIO_LENGTH`] characters.
pub fn bio(value: &str) -> Verdict {
    first_violation(BIO_RULES, value)
}

/// Validate an email address shape.
pub fn email(value: &str) -> Verdict {
    first_violation(EMAIL_RULES, value)
}

/// Validate a phone number against its formatted display shape.
///
/// Expects the masked value, e.g. `+55 11 99999-9999`.
pub fn phone(value: &str) -> Verdict {
    first_violation(PHONE_RULES, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid(kind: ErrorKind) -> Verdict {
        Verdict::Invalid(kind)
    }

    #[test]
    fn test_full_name_valid() {
        assert_eq!(full_name("Ana Sha"), Verdict::Valid);
        assert_eq!(full_name("Maria da Silva"), Verdict::Valid);
        assert_eq!(full_name("José Péres"), Verdict::Valid);
    }

    #[test]
    fn test_full_name_priority_order() {
        assert_eq!(full_name(""), invalid(ErrorKind::Required));
        assert_eq!(full_name("Ana"), invalid(ErrorKind::IncompleteName));
        assert_eq!(full_name("A B"), invalid(ErrorKind::WordTooShort));
        assert_eq!(full_name("Ana3 Sha"), invalid(ErrorKind::InvalidCharacters));
    }

    #[test]
    fn test_full_name_short_word_beats_charset() {
        // "A" is both too short and fine charset-wise; "3" would also be an
        // invalid character, but the word-length rule fires first.
        assert_eq!(full_name("3 Sha"), invalid(ErrorKind::WordTooShort));
    }

    #[test]
    fn test_full_name_whitespace_only_is_incomplete() {
        assert_eq!(full_name("   "), invalid(ErrorKind::IncompleteName));
    }

    #[test]
    fn test_username_valid() {
        assert_eq!(username("anasha"), Verdict::Valid);
        assert_eq!(username("ana_sha_99"), Verdict::Valid);
        assert_eq!(username("abc"), Verdict::Valid);
        assert_eq!(username("a".repeat(20).as_str()), Verdict::Valid);
    }

    #[test]
    fn test_username_errors() {
        assert_eq!(username(""), invalid(ErrorKind::Required));
        assert_eq!(username("an"), invalid(ErrorKind::InvalidLength));
        assert_eq!(
            username("a".repeat(21).as_str()),
            invalid(ErrorKind::InvalidLength)
        );
        assert_eq!(username("ana sha"), invalid(ErrorKind::InvalidCharacters));
        assert_eq!(username("ana-sha"), invalid(ErrorKind::InvalidCharacters));
    }

    #[test]
    fn test_bio_optional() {
        assert_eq!(bio(""), Verdict::Valid);
        assert_eq!(bio("Apaixonada por tecnologia."), Verdict::Valid);
    }

    #[test]
    fn test_bio_length_boundary() {
        assert_eq!(bio("x".repeat(250).as_str()), Verdict::Valid);
        assert_eq!(bio("x".repeat(251).as_str()), invalid(ErrorKind::TooLong));
    }

    #[test]
    fn test_email_valid() {
        assert_eq!(email("ana@gmail.com"), Verdict::Valid);
        assert_eq!(email("user.name+tag@example.co.uk"), Verdict::Valid);
    }

    #[test]
    fn test_email_errors() {
        assert_eq!(email(""), invalid(ErrorKind::Required));
        assert_eq!(email("ana@gmail"), invalid(ErrorKind::InvalidFormat));
        assert_eq!(email("anagmail.com"), invalid(ErrorKind::InvalidFormat));
        assert_eq!(email("@gmail.com"), invalid(ErrorKind::InvalidFormat));
        assert_eq!(email("ana@@gmail.com"), invalid(ErrorKind::InvalidFormat));
        assert_eq!(email("ana@gmail..com"), invalid(ErrorKind::InvalidFormat));
    }

    #[test]
    fn test_phone_valid() {
        assert_eq!(phone("+55 11 99999-9999"), Verdict::Valid);
        assert_eq!(phone("+55 11 9999-9999"), Verdict::Valid);
    }

    #[test]
    fn test_phone_errors() {
        assert_eq!(phone(""), invalid(ErrorKind::Required));
        // 11 digits: one short of country + area + number
        assert_eq!(phone("+55 11 9999-999"), invalid(ErrorKind::TooFewDigits));
        // Enough digits, wrong shape
        assert_eq!(phone("5511999999999"), invalid(ErrorKind::InvalidFormat));
        assert_eq!(phone("+55 11 999999-999"), invalid(ErrorKind::InvalidFormat));
    }
}
