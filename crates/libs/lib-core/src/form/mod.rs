//! # Registration Form
//!
//! - [`strategy`] - the three form variants: which rules apply and which events trigger them
//! - [`validator`] - pure field validation producing ordered messages
//! - [`state`] - per-form state machine driven by change, blur and submit
//! - [`submit`] - hands a ready field bundle to an injected sink and resets the form

pub mod state;
pub mod strategy;
pub mod submit;
pub mod validator;

pub use state::{FormPhase, RegistrationForm};
pub use strategy::{RuleSet, TriggerMode, ValidationStrategy};
pub use submit::{FormSink, SubmissionHandler};
pub use validator::FieldValidator;

#[cfg(test)]
mod tests;
