//! UI Components

pub mod navbar;
pub mod registration_form;

pub use navbar::Navbar;
pub use registration_form::RegistrationCard;
