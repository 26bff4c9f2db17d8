//! # Form State
//!
//! One [`RegistrationForm`] per mounted form. It owns the field bundle, the
//! messages of the last validation pass and the phase that decides whether
//! submit is enabled.
//!
//! ```text
//! Editing --change/blur--> Validating --> Editing | Ready
//! Ready   --submit-------> (sink) --reset--> Editing
//! ```

use shared::{Field, RegistrationData, ValidationErrors};

use super::strategy::{TriggerMode, ValidationStrategy};
use super::validator::FieldValidator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    /// A validation pass is running. Passes are synchronous and every public
    /// operation returns in `Editing` or `Ready`, so callers (and the web
    /// build's `data-phase` attribute) never see this phase.
    Validating,
    /// Every field is filled and valid; submit is enabled.
    Ready,
}

impl FormPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormPhase::Editing => "editing",
            FormPhase::Validating => "validating",
            FormPhase::Ready => "ready",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationForm {
    strategy: ValidationStrategy,
    validator: FieldValidator,
    values: RegistrationData,
    errors: ValidationErrors,
    phase: FormPhase,
}

impl RegistrationForm {
    pub fn new(strategy: ValidationStrategy) -> Self {
        Self {
            strategy,
            validator: FieldValidator::new(strategy.rules()),
            values: RegistrationData::default(),
            errors: ValidationErrors::new(),
            phase: FormPhase::Editing,
        }
    }

    pub fn strategy(&self) -> ValidationStrategy {
        self.strategy
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &RegistrationData {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Messages of the last pass joined with newlines; empty when there are none.
    pub fn error_text(&self) -> String {
        self.errors.joined()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn submit_enabled(&self) -> bool {
        self.phase == FormPhase::Ready
    }

    /// Input event on `field`.
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);

        match self.strategy.triggers() {
            TriggerMode::OnBlur => {
                // Messages stay until the next blur; only enablement follows typing.
                self.phase = if self.validator.is_valid(&self.values) {
                    FormPhase::Ready
                } else {
                    FormPhase::Editing
                };
            }
            TriggerMode::Manual => {
                self.errors.clear();
                self.phase = FormPhase::Editing;
                if field == Field::RepeatPassword && self.values.repeat_password == self.values.password {
                    self.validate();
                }
            }
        }
    }

    /// Focus left `field`.
    pub fn blur(&mut self, field: Field) {
        tracing::trace!("[FORM] blur {}", field);
        self.validate();
    }

    /// Run one validation pass over all fields.
    ///
    /// Returns true if the form is ready to submit.
    pub fn validate(&mut self) -> bool {
        self.phase = FormPhase::Validating;
        self.errors = self.validator.validate(&self.values);
        self.phase = if self.errors.is_empty() && self.validator.is_complete(&self.values) {
            FormPhase::Ready
        } else {
            FormPhase::Editing
        };
        tracing::debug!(
            "[FORM] {} pass: {} message(s), phase={}",
            self.strategy,
            self.errors.len(),
            self.phase.as_str()
        );
        self.submit_enabled()
    }

    /// Validation pass that also flags blank fields as required. Used to explain a
    /// rejected submit.
    pub(crate) fn validate_for_submit(&mut self) -> &ValidationErrors {
        self.errors = self.validator.validate_for_submit(&self.values);
        self.phase = FormPhase::Editing;
        &self.errors
    }

    /// Hand out the bundle, leaving the form reset.
    pub(crate) fn take_values(&mut self) -> RegistrationData {
        let values = std::mem::take(&mut self.values);
        self.reset();
        values
    }

    /// Empty all fields and messages.
    pub fn reset(&mut self) {
        self.values = RegistrationData::default();
        self.errors.clear();
        self.phase = FormPhase::Editing;
    }
}
