//! Application constants

use shared::Field;

/// Element holding the JSON form configuration.
pub const CONFIG_ELEMENT_ID: &str = "form-config";
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";

/// Query parameter overriding the strategy of the form at `/`.
pub const STRATEGY_QUERY_PARAM: &str = "strategy";

// UI text
pub const FORM_TITLE: &str = "New user registration";
pub const SUBMIT_LABEL: &str = "Register";

pub fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Email => "Email",
        Field::Password => "Password",
        Field::RepeatPassword => "Confirm password",
    }
}
