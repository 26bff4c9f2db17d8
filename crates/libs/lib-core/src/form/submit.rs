//! # Submission Handler
//!
//! On submit the ready field bundle is handed to an injected [`FormSink`] and the
//! form is cleared. The render layer is responsible for preventing the browser's
//! default form navigation before calling [`SubmissionHandler::submit`].

use shared::RegistrationData;

use crate::error::{FormError, Result};
use super::state::RegistrationForm;

/// Receiver of submitted field bundles. Fire-and-forget: it cannot fail and
/// returns nothing.
pub trait FormSink {
    fn send(&self, data: RegistrationData);
}

impl<F> FormSink for F
where
    F: Fn(RegistrationData),
{
    fn send(&self, data: RegistrationData) {
        self(data)
    }
}

pub struct SubmissionHandler<S> {
    sink: S,
}

impl<S: FormSink> SubmissionHandler<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Submit `form`.
    ///
    /// A ready form is sent to the sink and reset. Any other form is left as is,
    /// apart from its messages, which now also flag blank fields as required.
    pub fn submit(&self, form: &mut RegistrationForm) -> Result<()> {
        if !form.submit_enabled() {
            let errors = form.validate_for_submit().clone();
            tracing::warn!("[SUBMIT] rejected: {} message(s)", errors.len());
            return Err(FormError::Rejected(errors));
        }

        let data = form.take_values();
        tracing::info!("[SUBMIT] sending registration for {}", data.email);
        self.sink.send(data);
        Ok(())
    }
}
