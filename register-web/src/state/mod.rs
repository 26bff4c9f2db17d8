//! Reactive state shared by form components

pub mod form;
