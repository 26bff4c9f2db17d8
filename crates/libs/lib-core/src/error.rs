//! # Centralized Error Handling
//!
//! This module defines [`FormError`], the error type for the few operations that can
//! actually fail. Field validation itself never fails: it produces messages, which
//! live in [`ValidationErrors`] and are shown inline to the user.
//!
//! ## Error Categories
//!
//! - [`Config`](FormError::Config) - configuration values out of range
//! - [`Json`](FormError::Json) - embedded configuration is not valid JSON
//! - [`Rejected`](FormError::Rejected) - submit attempted on a form that is not ready
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{FormError, Result};
//! use lib_core::FormConfig;
//!
//! fn load(raw: &str) -> Result<FormConfig> {
//!     let config = FormConfig::from_json(raw)?;
//!     Ok(config)
//! }
//!
//! assert!(matches!(load("{"), Err(FormError::Json(_))));
//! ```

use shared::ValidationErrors;
use thiserror::Error;

/// Convenience type alias for `Result<T, FormError>`.
pub type Result<T> = std::result::Result<T, FormError>;

#[derive(Debug, Error)]
pub enum FormError {
    /// Configuration values failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Submit on a form with blank or invalid fields. Carries the messages that
    /// were stored on the form.
    #[error("Form rejected: {0}")]
    Rejected(ValidationErrors),
}

impl FormError {
    /// Text suitable for showing to the user.
    ///
    /// Configuration problems are not the user's to fix, so they get a generic message.
    pub fn user_message(&self) -> String {
        match self {
            FormError::Rejected(errors) => errors.joined(),
            FormError::Config(_) | FormError::Json(_) => {
                "The form is misconfigured, default settings are used".to_string()
            }
        }
    }
}
