//! # Core Library
//!
//! Validation, form state and submission for the registration form.
//!
//! The render layer owns one [`RegistrationForm`] per mounted form, forwards input
//! events to it and hands it to a [`SubmissionHandler`] on submit.

pub mod config;
pub mod error;
pub mod form;

// Re-export commonly used types
pub use config::FormConfig;
pub use error::{FormError, Result};
pub use form::{
    FormPhase, FormSink, RegistrationForm, RuleSet, SubmissionHandler, TriggerMode,
    ValidationStrategy,
};
