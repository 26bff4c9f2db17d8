//! # Field Validator
//!
//! Pure validation of the field bundle. A pass never fails; it returns the
//! messages to show, ordered email, password, confirmation.
//!
//! ## Blank fields
//!
//! All variants share one policy: a blank field produces no message during a
//! validation pass, and any blank field keeps the form from becoming valid.
//! "Required" messages are only produced by [`FieldValidator::validate_for_submit`],
//! used when a submit is attempted on a form that is not ready.

use lib_utils::validation::{
    validate_email, validate_not_empty, validate_password_charset, validate_password_length,
    LengthViolation,
};
use shared::{Field, RegistrationData, ValidationErrors};

use super::strategy::RuleSet;

/// User-facing message texts.
pub mod messages {
    pub const EMAIL_INVALID: &str = "Invalid email. An email must contain a user name, the \"@\" sign, a host name, a \".\" separator and a domain name. Example: \"username@hostname.com\".";
    pub const PASSWORD_CHARSET: &str = "Invalid password. A password may contain Latin letters in upper and lower case, digits and the special characters \"`~@!#$%&?\".";
    pub const PASSWORD_TOO_SHORT: &str = "Invalid password. It must be at least 8 characters long.";
    pub const PASSWORD_TOO_LONG: &str = "Invalid password. It must be at most 20 characters long.";
    pub const PASSWORD_COMBINED: &str = "Invalid password. A password may contain Latin letters in upper and lower case, digits and the special characters \"`~@!#$%&?\", and must be 8 to 20 characters long.";
    pub const REPEAT_MISMATCH: &str = "Password confirmation does not match the password.";
    pub const EMAIL_REQUIRED: &str = "Enter an email.";
    pub const PASSWORD_REQUIRED: &str = "Enter a password.";
    pub const REPEAT_REQUIRED: &str = "Confirm the password.";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValidator {
    rules: RuleSet,
}

impl FieldValidator {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// One validation pass. Blank fields are skipped.
    pub fn validate(&self, data: &RegistrationData) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if validate_not_empty(&data.email) && !validate_email(&data.email) {
            errors.insert(Field::Email, messages::EMAIL_INVALID);
        }

        if validate_not_empty(&data.password) {
            if let Some(message) = self.password_message(&data.password) {
                errors.insert(Field::Password, message);
            }
        }

        if validate_not_empty(&data.repeat_password) && data.repeat_password != data.password {
            errors.insert(Field::RepeatPassword, messages::REPEAT_MISMATCH);
        }

        errors
    }

    /// A validation pass that also reports blank fields as required.
    pub fn validate_for_submit(&self, data: &RegistrationData) -> ValidationErrors {
        let mut errors = self.validate(data);
        for field in Field::ALL {
            if !validate_not_empty(data.get(field)) {
                errors.insert(field, required_message(field));
            }
        }
        errors
    }

    /// True if no field is blank.
    pub fn is_complete(&self, data: &RegistrationData) -> bool {
        !data.has_blank()
    }

    /// True if the bundle can be submitted: complete and without messages.
    pub fn is_valid(&self, data: &RegistrationData) -> bool {
        self.is_complete(data) && self.validate(data).is_empty()
    }

    fn password_message(&self, password: &str) -> Option<&'static str> {
        let charset_ok = validate_password_charset(password);
        let length = validate_password_length(password);

        match self.rules {
            // Length first: an out-of-range password always names the bound.
            RuleSet::Schema => match length {
                Err(LengthViolation::TooShort { .. }) => Some(messages::PASSWORD_TOO_SHORT),
                Err(LengthViolation::TooLong { .. }) => Some(messages::PASSWORD_TOO_LONG),
                Ok(()) => (!charset_ok).then_some(messages::PASSWORD_CHARSET),
            },
            RuleSet::Manual => {
                (!charset_ok || length.is_err()).then_some(messages::PASSWORD_COMBINED)
            }
        }
    }
}

fn required_message(field: Field) -> &'static str {
    match field {
        Field::Email => messages::EMAIL_REQUIRED,
        Field::Password => messages::PASSWORD_REQUIRED,
        Field::RepeatPassword => messages::REPEAT_REQUIRED,
    }
}
