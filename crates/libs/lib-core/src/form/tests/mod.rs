//! # Form State Tests
//!
//! Event sequences against [`RegistrationForm`] for each strategy, and the
//! submission handler.

mod manual;

use super::*;
use shared::Field;

pub(crate) const EMAIL: &str = "user@host.com";
pub(crate) const PASSWORD: &str = "Abc12345!";

/// Type `value` into `field` and leave it, the way a user fills one input.
pub(crate) fn fill(form: &mut RegistrationForm, field: Field, value: &str) {
    form.change(field, value);
    form.blur(field);
}

/// A form with every field filled and valid.
pub(crate) fn filled_form(strategy: ValidationStrategy) -> RegistrationForm {
    let mut form = RegistrationForm::new(strategy);
    fill(&mut form, Field::Email, EMAIL);
    fill(&mut form, Field::Password, PASSWORD);
    fill(&mut form, Field::RepeatPassword, PASSWORD);
    form
}

#[test]
fn test_valid_triple_enables_submit_for_every_strategy() {
    for strategy in ValidationStrategy::all() {
        let form = filled_form(*strategy);
        assert!(form.errors().is_empty(), "{strategy}: {}", form.error_text());
        assert!(form.submit_enabled(), "{strategy}");
        assert_eq!(form.phase(), FormPhase::Ready);
    }
}

#[test]
fn test_new_form_is_empty_and_disabled() {
    for strategy in ValidationStrategy::all() {
        let form = RegistrationForm::new(*strategy);
        assert_eq!(form.values(), &shared::RegistrationData::default());
        assert_eq!(form.error_text(), "");
        assert!(!form.submit_enabled());
        assert_eq!(form.phase(), FormPhase::Editing);
    }
}

#[test]
fn test_blank_field_blocks_submit_without_message() {
    for strategy in ValidationStrategy::all() {
        let mut form = RegistrationForm::new(*strategy);
        fill(&mut form, Field::Password, PASSWORD);
        fill(&mut form, Field::RepeatPassword, PASSWORD);
        form.blur(Field::Email);

        assert!(form.errors().is_empty(), "{strategy}");
        assert!(!form.submit_enabled(), "{strategy}");
    }
}

#[test]
fn test_mismatch_reported_whichever_field_was_edited_last() {
    for strategy in ValidationStrategy::all() {
        let mut form = filled_form(*strategy);
        fill(&mut form, Field::Password, "Xyz12345!");
        assert_eq!(
            form.errors().get(Field::RepeatPassword),
            Some(validator::messages::REPEAT_MISMATCH),
            "{strategy}: password edited last"
        );

        let mut form = filled_form(*strategy);
        fill(&mut form, Field::RepeatPassword, "Xyz12345!");
        assert_eq!(
            form.errors().get(Field::RepeatPassword),
            Some(validator::messages::REPEAT_MISMATCH),
            "{strategy}: confirmation edited last"
        );
        assert!(!form.submit_enabled());
    }
}

#[test]
fn test_events_never_leave_form_validating() {
    for strategy in ValidationStrategy::all() {
        let mut form = RegistrationForm::new(*strategy);
        form.blur(Field::Email);
        assert_ne!(form.phase(), FormPhase::Validating, "{strategy}");

        for (field, value) in [
            (Field::Email, EMAIL),
            (Field::Password, PASSWORD),
            (Field::RepeatPassword, PASSWORD),
        ] {
            form.change(field, value);
            assert_ne!(form.phase(), FormPhase::Validating, "{strategy}: change {field}");
            form.blur(field);
            assert_ne!(form.phase(), FormPhase::Validating, "{strategy}: blur {field}");
        }

        form.validate();
        assert_eq!(form.phase(), FormPhase::Ready, "{strategy}");
    }
}

#[test]
fn test_reset_clears_everything() {
    let mut form = filled_form(ValidationStrategy::Schema);
    fill(&mut form, Field::Email, "broken");
    assert!(!form.errors().is_empty());

    form.reset();
    for field in Field::ALL {
        assert_eq!(form.value(field), "");
    }
    assert!(form.errors().is_empty());
    assert_eq!(form.phase(), FormPhase::Editing);
}
