//! Progressive phone input masking.
//!
//! Rewrites free-form phone input into the canonical Brazilian display
//! `+55 DD DDDDD-DDDD` (or `+55 DD DDDD-DDDD` for 8-digit subscriber
//! numbers) on every keystroke. The transform is total and idempotent:
//! any input, including garbage pastes and overlong digit runs, is clamped
//! into the closest valid-shaped prefix, and re-applying the mask to its
//! own output changes nothing.

use std::fmt;

/// The fixed country code prefix.
pub const COUNTRY_CODE: &str = "55";

/// Maximum digits a phone value can carry: country code + area code + up to
/// 9 subscriber digits.
pub const MAX_PHONE_DIGITS: usize = 13;

const AREA_CODE_LEN: usize = 2;
const MAX_SUBSCRIBER_DIGITS: usize = 9;

/// The digit-only projection of a phone value.
///
/// This is the canonical intermediate representation the mask operates on:
/// non-digits stripped, the `55` country code ensured, and the total length
/// clamped to [`MAX_PHONE_DIGITS`]. Formatting is a pure function of this
/// digit string alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneDigits(String);

impl PhoneDigits {
    /// Project a raw input value onto its digits.
    ///
    /// Strips every non-digit character, prepends the country code when the
    /// result is non-empty and does not already start with it, and clamps
    /// the total to [`MAX_PHONE_DIGITS`]. Empty input stays empty: no
    /// prefix is invented for a value with no digits at all.
    pub fn extract(raw: &str) -> Self {
        let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

        if !digits.is_empty() && !digits.starts_with(COUNTRY_CODE) {
            digits.insert_str(0, COUNTRY_CODE);
        }

        // The prefix goes on before the clamp, so the subscriber part can
        // never exceed MAX_SUBSCRIBER_DIGITS.
        digits.truncate(MAX_PHONE_DIGITS);

        Self(digits)
    }

    /// Get the digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of digits, country code included.
    pub fn count(&self) -> usize {
        self.0.len()
    }

    /// The digits after the country code: area code plus subscriber number.
    fn rest(&self) -> &str {
        if self.0.is_empty() {
            ""
        } else {
            &self.0[COUNTRY_CODE.len()..]
        }
    }
}

impl fmt::Display for PhoneDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Render the display mask for a digit string.
///
/// The rendering grows progressively with the digits:
///
/// - no digits at all: empty string
/// - country code only: `+55`
/// - partial or full area code: `+55 D` / `+55 DD`
/// - up to four subscriber digits: `+55 DD DDDD`
/// - more: a hyphen splits the subscriber number, 5+4 when it has exactly
///   9 digits (mobile), 4 + remainder otherwise (landlines end at 4+4)
pub fn format(digits: &PhoneDigits) -> String {
    if digits.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(MAX_PHONE_DIGITS + 4);
    out.push('+');
    out.push_str(COUNTRY_CODE);

    let rest = digits.rest();
    if rest.is_empty() {
        return out;
    }

    out.push(' ');
    if rest.len() <= AREA_CODE_LEN {
        out.push_str(rest);
        return out;
    }
    out.push_str(&rest[..AREA_CODE_LEN]);

    out.push(' ');
    let subscriber = &rest[AREA_CODE_LEN..];
    let split = if subscriber.len() == MAX_SUBSCRIBER_DIGITS { 5 } else { 4 };
    if subscriber.len() <= split {
        out.push_str(subscriber);
    } else {
        out.push_str(&subscriber[..split]);
        out.push('-');
        out.push_str(&subscriber[split..]);
    }

    out
}

/// Apply the mask to a raw input value.
///
/// This is the whole engine: extract the digits, render the display shape.
/// The caller writes the result back into the field directly, without
/// re-entering the edit pipeline.
pub fn apply(raw: &str) -> String {
    let digits = PhoneDigits::extract(raw);
    let formatted = format(&digits);
    tracing::trace!(raw = %raw, formatted = %formatted, "phone mask applied");
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_strips_non_digits() {
        assert_eq!(PhoneDigits::extract("+55 11 99999-9999").as_str(), "5511999999999");
        assert_eq!(PhoneDigits::extract("abc!@#").as_str(), "");
    }

    #[test]
    fn test_extract_prepends_country_code() {
        assert_eq!(PhoneDigits::extract("119999").as_str(), "55119999");
        // Already prefixed: left alone
        assert_eq!(PhoneDigits::extract("5511").as_str(), "5511");
        // A single digit still gains the prefix
        assert_eq!(PhoneDigits::extract("1").as_str(), "551");
    }

    #[test]
    fn test_extract_empty_stays_empty() {
        assert!(PhoneDigits::extract("").is_empty());
        assert!(PhoneDigits::extract("()- +").is_empty());
    }

    #[test]
    fn test_extract_clamps_after_prefixing() {
        // 20 digits in: 13 digits out, never more
        let digits = PhoneDigits::extract("11999999999999999999");
        assert_eq!(digits.count(), MAX_PHONE_DIGITS);
        assert_eq!(digits.as_str(), "5511999999999");
    }

    #[test]
    fn test_format_progressive_stages() {
        assert_eq!(apply(""), "");
        assert_eq!(apply("55"), "+55");
        assert_eq!(apply("551"), "+55 1");
        assert_eq!(apply("5511"), "+55 11");
        assert_eq!(apply("55119"), "+55 11 9");
        assert_eq!(apply("55119999"), "+55 11 9999");
        assert_eq!(apply("551199999"), "+55 11 9999-9");
        assert_eq!(apply("551199999999"), "+55 11 9999-9999");
        assert_eq!(apply("5511999999999"), "+55 11 99999-9999");
    }

    #[test]
    fn test_format_mobile_vs_landline_split() {
        // 9 subscriber digits: 5+4
        assert_eq!(apply("5511987654321"), "+55 11 98765-4321");
        // 8 subscriber digits: 4+4
        assert_eq!(apply("551144445555"), "+55 11 4444-5555");
    }

    #[test]
    fn test_apply_auto_prefixes_bare_number() {
        assert_eq!(apply("119999999"), "+55 11 9999-999");
        assert_eq!(apply("11999999999"), "+55 11 99999-9999");
    }

    #[test]
    fn test_apply_idempotent() {
        for raw in [
            "",
            "5",
            "55",
            "5511",
            "551199",
            "119999999",
            "5511999999999",
            "+55 11 99999-9999",
            "garbage 123 paste!!",
            "11999999999999999999",
        ] {
            let once = apply(raw);
            assert_eq!(apply(&once), once, "mask not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_apply_overflow_is_silent() {
        let formatted = apply("99999999999999999999");
        let digit_count = formatted.chars().filter(|c| c.is_ascii_digit()).count();
        assert_eq!(digit_count, MAX_PHONE_DIGITS);
        assert_eq!(formatted, "+55 99 99999-9999");
    }
}
