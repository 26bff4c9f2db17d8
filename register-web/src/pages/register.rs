//! Registration pages

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use lib_core::{FormConfig, ValidationStrategy};

use crate::components::RegistrationCard;
use crate::utils::constants::STRATEGY_QUERY_PARAM;

/// Form at `/`: the configured default strategy, unless `?strategy=` names another.
/// Changing the query remounts the form with a fresh state.
#[component]
pub fn DefaultRegisterPage() -> impl IntoView {
    let default = use_context::<FormConfig>().unwrap_or_default().default_strategy;
    let query = use_query_map();
    let strategy = Memo::new(move |_| {
        let requested = query.with(|params| params.get(STRATEGY_QUERY_PARAM));
        resolve_strategy(requested.as_deref(), default)
    });

    move || view! { <RegistrationCard strategy=strategy.get()/> }
}

#[component]
pub fn SchemaPage() -> impl IntoView {
    view! { <RegistrationCard strategy=ValidationStrategy::Schema/> }
}

#[component]
pub fn ManualPage() -> impl IntoView {
    view! { <RegistrationCard strategy=ValidationStrategy::Manual/> }
}

#[component]
pub fn HybridPage() -> impl IntoView {
    view! { <RegistrationCard strategy=ValidationStrategy::Hybrid/> }
}

fn resolve_strategy(requested: Option<&str>, default: ValidationStrategy) -> ValidationStrategy {
    match requested.map(str::parse::<ValidationStrategy>) {
        None => default,
        Some(Ok(strategy)) => strategy,
        Some(Err(e)) => {
            log::warn!("[ROUTE] {}, using {}", e, default);
            default
        }
    }
}
