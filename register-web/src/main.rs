//! Registration form frontend
//!
//! Three variants of the same sign-up form, one per validation strategy. Nothing
//! leaves the browser: submitted data is printed to the console.

use leptos::prelude::*;
use lib_core::FormConfig;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;
use utils::constants::{CONFIG_ELEMENT_ID, LOADING_ELEMENT_ID};

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("[APP] registration form starting");

    let config = load_config();
    hide_loading_screen();

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}

/// Read the JSON block embedded in the page, falling back to defaults.
fn load_config() -> FormConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        log::info!("[CONFIG] no embedded config, using defaults");
        return FormConfig::default();
    };

    match FormConfig::from_json(&raw) {
        Ok(config) => {
            log::info!("[CONFIG] default strategy: {}", config.default_strategy);
            config
        }
        Err(e) => {
            log::warn!("[CONFIG] {} ({})", e.user_message(), e);
            FormConfig::default()
        }
    }
}

/// Hide the loading screen element
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::error!("[APP] no document available");
        return;
    };

    match document.get_element_by_id(LOADING_ELEMENT_ID) {
        Some(loading_element) => {
            if let Err(e) = loading_element.class_list().add_1("hidden") {
                log::warn!("[APP] failed to hide loading screen: {:?}", e);
            }
        }
        None => log::debug!("[APP] loading element '{}' not found", LOADING_ELEMENT_ID),
    }
}
