//! Destination for submitted registrations.
//!
//! There is no backend: the bundle is printed to the browser console as JSON.

use shared::RegistrationData;

/// Form sink used by every variant.
pub fn send_form_data(data: RegistrationData) {
    match serde_json::to_string(&data) {
        Ok(json) => web_sys::console::log_1(&json.into()),
        Err(e) => log::error!("[SINK] failed to serialize registration: {}", e),
    }
}
