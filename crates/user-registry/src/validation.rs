//! Field validation for user records
//!
//! Stateless validators for the user fields. Handlers collect the results;
//! nothing here touches the store or produces responses.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum accepted name length, in characters
pub const NAME_MIN_CHARS: usize = 2;

/// Maximum accepted name length, in characters
pub const NAME_MAX_CHARS: usize = 100;

/// Minimum accepted age
pub const AGE_MIN: i64 = 1;

/// Maximum accepted age
pub const AGE_MAX: i64 = 150;

/// Upper bound for a page size a client may request
pub const PAGE_SIZE_LIMIT: u64 = 100;

// Mailbox grammar: local-part, one '@', dotted domain with an alphabetic
// top-level label. Anchored so trailing garbage fails the match.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Check whether a name is acceptable: non-blank and between
/// [`NAME_MIN_CHARS`] and [`NAME_MAX_CHARS`] characters after trimming.
/// Length is counted in characters, not bytes.
pub fn is_valid_name(name: &str) -> bool {
    let trimmed = name.trim();
    let chars = trimmed.chars().count();
    !trimmed.is_empty() && (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars)
}

/// Check whether an age is within the accepted range.
pub fn is_valid_age(age: i64) -> bool {
    (AGE_MIN..=AGE_MAX).contains(&age)
}

/// Check whether a string is a well-formed mailbox address.
///
/// Blank input and strings that merely contain an address somewhere
/// (trailing garbage, embedded whitespace, a second `@`) are rejected.
pub fn is_valid_email(email: &str) -> bool {
    let trimmed = email.trim();
    !trimmed.is_empty() && EMAIL_RE.is_match(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("Jo"));
        assert!(is_valid_name("John Doe"));
        assert!(is_valid_name("  padded  "));
        assert!(is_valid_name(&"x".repeat(100)));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("   "));
        assert!(!is_valid_name("J"));
        assert!(!is_valid_name(&"x".repeat(101)));
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        // Two characters, six bytes
        assert!(is_valid_name("åö"));
        // 100 characters, 200 bytes
        assert!(is_valid_name(&"å".repeat(100)));
        assert!(!is_valid_name(&"å".repeat(101)));
    }

    #[test]
    fn test_age_bounds() {
        assert!(is_valid_age(1));
        assert!(is_valid_age(42));
        assert!(is_valid_age(150));
        assert!(!is_valid_age(0));
        assert!(!is_valid_age(-5));
        assert!(!is_valid_age(151));
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("john.doe@example.com"));
        assert!(is_valid_email("JOHN.DOE@EXAMPLE.COM"));
        assert!(is_valid_email("user+tag@sub.example.co.uk"));
        assert!(is_valid_email("  spaced@example.com  "));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   "));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("trailing@garbage."));
        assert!(!is_valid_email("user@example.com extra"));
    }
}
