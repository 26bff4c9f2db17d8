//! # Validation Utilities
//!
//! The two patterns the registration form is checked against, plus the password
//! length bounds. Both patterns use ASCII-only character classes.
//!
//! These are primitive checks. Which message a failure produces is decided by the
//! validator in `lib-core`, since the form variants word their messages differently.

use once_cell::sync::Lazy;
use regex::Regex;

/// Email shape: user name, `@`, one or more dot-terminated host labels, domain.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$";

/// Characters a password may consist of: Latin letters, digits and `` `~@!#$%&? ``.
pub const PASSWORD_PATTERN: &str = r"^[A-Za-z0-9`~@!#$%&?]+$";

/// Minimum password length, in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Maximum password length, in characters.
pub const PASSWORD_MAX_LEN: usize = 20;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("Invalid email regex pattern"));

static PASSWORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PASSWORD_PATTERN).expect("Invalid password regex pattern"));

/// Password length outside `[PASSWORD_MIN_LEN, PASSWORD_MAX_LEN]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthViolation {
    TooShort { min: usize },
    TooLong { max: usize },
}

/// True if the value contains anything at all.
///
/// Whitespace counts as content: the form compares raw input, it never trims.
pub fn validate_not_empty(value: &str) -> bool {
    !value.is_empty()
}

/// Validate email format against [`EMAIL_PATTERN`].
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validate that every password character is in the allowed set.
pub fn validate_password_charset(password: &str) -> bool {
    PASSWORD_REGEX.is_match(password)
}

/// Validate password length, counted in characters rather than bytes.
pub fn validate_password_length(password: &str) -> Result<(), LengthViolation> {
    let len = password.chars().count();
    if len < PASSWORD_MIN_LEN {
        Err(LengthViolation::TooShort { min: PASSWORD_MIN_LEN })
    } else if len > PASSWORD_MAX_LEN {
        Err(LengthViolation::TooLong { max: PASSWORD_MAX_LEN })
    } else {
        Ok(())
    }
}
