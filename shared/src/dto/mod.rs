//! # Data Transfer Objects (DTOs)
//!
//! - [`registration`] - Field bundle, field identifiers and ordered validation messages
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase (`repeatPassword`), matching the HTML input names
//! - **Enums**: serialize to the same camelCase names
//! - **All types**: implement both `Serialize` and `Deserialize`

pub mod registration;

pub use registration::*;
