//! Form state management
//!
//! Wraps one [`RegistrationForm`] in a signal so inputs, the error block and the
//! submit button all re-render from the same state.

use leptos::prelude::*;
use lib_core::{FormError, FormPhase, RegistrationForm, SubmissionHandler, ValidationStrategy};
use shared::Field;

use crate::services::sink::send_form_data;

/// Context for the form mounted by the current page
#[derive(Clone, Copy)]
pub struct FormContext {
    pub form: RwSignal<RegistrationForm>,
}

impl FormContext {
    pub fn new(strategy: ValidationStrategy) -> Self {
        Self {
            form: RwSignal::new(RegistrationForm::new(strategy)),
        }
    }

    pub fn value(&self, field: Field) -> String {
        self.form.with(|form| form.value(field).to_string())
    }

    pub fn error_text(&self) -> String {
        self.form.with(|form| form.error_text())
    }

    pub fn submit_enabled(&self) -> bool {
        self.form.with(|form| form.submit_enabled())
    }

    pub fn phase(&self) -> FormPhase {
        self.form.with(|form| form.phase())
    }

    pub fn change(&self, field: Field, value: String) {
        self.form.update(|form| form.change(field, value));
    }

    pub fn blur(&self, field: Field) {
        self.form.update(|form| form.blur(field));
    }

    /// Submit through the console sink. A rejected submit leaves its messages on
    /// the form, so there is nothing more to show here.
    pub fn submit(&self) {
        let handler = SubmissionHandler::new(send_form_data);
        self.form.update(|form| match handler.submit(form) {
            Ok(()) => log::info!("[FORM] submitted, form reset"),
            Err(FormError::Rejected(errors)) => {
                log::warn!("[FORM] submit rejected with {} message(s)", errors.len())
            }
            Err(e) => log::error!("[FORM] submit failed: {}", e),
        });
    }
}

pub fn provide_form_context(strategy: ValidationStrategy) -> FormContext {
    let context = FormContext::new(strategy);
    provide_context(context);
    context
}

pub fn use_form_context() -> FormContext {
    expect_context::<FormContext>()
}
