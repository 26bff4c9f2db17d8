//! Registration form: inputs bound to the form state, joined error text and a
//! submit button that is only enabled for a complete, valid bundle.

use leptos::html;
use leptos::prelude::*;
use lib_core::{FormConfig, ValidationStrategy};
use shared::Field;

use crate::state::form::{provide_form_context, use_form_context};
use crate::utils::constants::{placeholder, FORM_TITLE, SUBMIT_LABEL};

#[component]
pub fn RegistrationCard(strategy: ValidationStrategy) -> impl IntoView {
    let ctx = provide_form_context(strategy);
    let focus_submit_on_valid = use_context::<FormConfig>()
        .unwrap_or_default()
        .focus_submit_on_valid;
    let submit_ref = NodeRef::<html::Button>::new();

    // Only fires when readiness flips, so typing in a valid form keeps focus.
    let ready = Memo::new(move |_| ctx.submit_enabled());
    Effect::new(move || {
        if !(ready.get() && focus_submit_on_valid) {
            return;
        }
        if let Some(button) = submit_ref.get() {
            if let Err(e) = button.focus() {
                log::warn!("[FORM] failed to focus submit button: {:?}", e);
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <div class="app">
            // data-phase is only ever "editing" or "ready".
            <form class="form" data-strategy=strategy.as_str() data-phase=move || ctx.phase().as_str() on:submit=on_submit>
                <h1 class="label">{FORM_TITLE}</h1>
                <p class="strategy">{strategy.title()}</p>
                {Field::ALL.into_iter().map(|field| view! { <FieldInput field=field/> }).collect_view()}
                <button
                    node_ref=submit_ref
                    class="button"
                    type="submit"
                    disabled=move || !ctx.submit_enabled()
                >
                    {SUBMIT_LABEL}
                </button>
            </form>
            <ErrorPanel/>
        </div>
    }
}

#[component]
fn FieldInput(field: Field) -> impl IntoView {
    let ctx = use_form_context();

    view! {
        <input
            name=field.name()
            type=field.input_type()
            placeholder=placeholder(field)
            prop:value=move || ctx.value(field)
            on:input=move |ev| ctx.change(field, event_target_value(&ev))
            on:blur=move |_| ctx.blur(field)
        />
    }
}

/// Messages of the last validation pass, one per line.
#[component]
fn ErrorPanel() -> impl IntoView {
    let ctx = use_form_context();

    view! {
        <Show when=move || !ctx.error_text().is_empty()>
            <div class="error">{move || ctx.error_text()}</div>
        </Show>
    }
}
