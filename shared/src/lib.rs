//! # Shared Registration Types
//!
//! This library defines the contract between the form logic (`lib-core`) and the
//! render layer (`register-web`).
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::registration`]**: the field bundle, field names and validation messages
//!
//! ## Wire Format
//!
//! The field bundle serializes to JSON with camelCase keys so the browser console
//! shows the same shape the form inputs use:
//!
//! ```text
//! {
//!   "email": "username@hostname.com",
//!   "password": "Abc12345!",
//!   "repeatPassword": "Abc12345!"
//! }
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::registration::{Field, RegistrationData, ValidationErrors};
//!
//! let mut data = RegistrationData::default();
//! data.set(Field::Email, "username@hostname.com");
//! assert_eq!(data.get(Field::Email), "username@hostname.com");
//!
//! let mut errors = ValidationErrors::new();
//! errors.insert(Field::Password, "Invalid password.");
//! assert_eq!(errors.joined(), "Invalid password.");
//! ```

pub mod dto;

// Re-export commonly used types for convenience
pub use dto::*;
