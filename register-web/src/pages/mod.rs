//! Page modules - one registration page per validation strategy

pub mod about;
pub mod register;

pub use about::AboutPage;
pub use register::{DefaultRegisterPage, HybridPage, ManualPage, SchemaPage};
