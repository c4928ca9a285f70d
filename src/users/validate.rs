/**
 * Registration Validation
 *
 * Password-strength and email-format rules, applied only at registration
 * on the raw input strings. Rules are evaluated in a fixed order and the
 * first failing rule's message is returned; there is no aggregation.
 *
 * The messages, the 8/72 length bounds and the special-character set are
 * part of the external contract and must not drift.
 */

use std::sync::LazyLock;

use regex::Regex;

/// Characters that satisfy the "special character" complexity rule.
pub const SPECIAL_CHARS: &str = "!@#$%^&";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // local@domain.tld shape; compile failure would be a programming error
    // caught by the tests below.
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap_or_else(|_| unreachable!())
});

/// Check a password against the registration rules, in order.
///
/// Returns the contract message of the first failing rule, or `None` when
/// the password is acceptable.
pub fn validate_password(password: &str) -> Option<&'static str> {
    if password.chars().count() < 8 {
        return Some("Password must be at least 8 characters long");
    }
    if password.chars().count() > 72 {
        return Some("Password must be less than 72 characters");
    }
    if password.starts_with(' ') || password.ends_with(' ') {
        return Some("Password must not start or end with empty spaces");
    }

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(c));

    if !(has_upper && has_lower && has_digit && has_special) {
        return Some("Password must contain 1 upper case, lower case, number, and special character");
    }

    None
}

/// Check that an email has a `local@domain.tld` shape.
pub fn validate_email(email: &str) -> Option<&'static str> {
    if EMAIL_RE.is_match(email) {
        None
    } else {
        Some("Email is invalid")
    }
}
