//! # Manual Strategy Tests

use super::*;
use crate::form::validator::messages;

#[test]
fn test_change_clears_messages_and_disables_submit() {
    let mut form = filled_form(ValidationStrategy::Manual);
    assert!(form.submit_enabled());

    form.change(Field::Email, "user@");
    assert!(!form.submit_enabled());

    form.blur(Field::Email);
    assert_eq!(form.error_text(), messages::EMAIL_INVALID);

    form.change(Field::Email, "user@h");
    assert_eq!(form.error_text(), "");
    assert!(!form.submit_enabled());
}

#[test]
fn test_matching_confirmation_validates_while_typing() {
    let mut form = RegistrationForm::new(ValidationStrategy::Manual);
    fill(&mut form, Field::Email, EMAIL);
    fill(&mut form, Field::Password, PASSWORD);

    form.change(Field::RepeatPassword, "Abc");
    assert!(!form.submit_enabled());

    // No blur: equality with the password is enough to run a pass.
    form.change(Field::RepeatPassword, PASSWORD);
    assert!(form.submit_enabled());
}

#[test]
fn test_matching_confirmation_still_reports_other_fields() {
    let mut form = RegistrationForm::new(ValidationStrategy::Manual);
    fill(&mut form, Field::Email, "broken");
    fill(&mut form, Field::Password, PASSWORD);

    form.change(Field::RepeatPassword, PASSWORD);
    assert_eq!(form.error_text(), messages::EMAIL_INVALID);
    assert!(!form.submit_enabled());
}

#[test]
fn test_combined_password_message() {
    let mut form = RegistrationForm::new(ValidationStrategy::Manual);
    for password in ["short1!", "Abcdefghij1234567890!", "pass word1"] {
        fill(&mut form, Field::Password, password);
        assert_eq!(form.error_text(), messages::PASSWORD_COMBINED, "{password}");
    }
}
