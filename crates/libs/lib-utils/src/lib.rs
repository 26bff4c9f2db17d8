//! # Utilities Library
//!
//! Field-level rule checks shared by every validation strategy.

pub mod validation;

// Re-export commonly used functions
pub use validation::{
    validate_email, validate_not_empty, validate_password_charset, validate_password_length,
    LengthViolation, EMAIL_PATTERN, PASSWORD_MAX_LEN, PASSWORD_MIN_LEN, PASSWORD_PATTERN,
};
