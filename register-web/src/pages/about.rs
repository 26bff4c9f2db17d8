//! About Page - what differs between the form variants

use leptos::prelude::*;
use leptos_router::components::A;
use lib_core::{RuleSet, TriggerMode, ValidationStrategy};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="app">
            <div class="card about">
                <h1 class="label">"About"</h1>
                <p>
                    "The same registration form, validated three ways. Every variant checks the email
                    shape, the password characters and length, and that the confirmation matches.
                    Blank fields never show a message but keep the submit button disabled."
                </p>
                <ul>
                    {ValidationStrategy::all()
                        .iter()
                        .map(|strategy| {
                            view! {
                                <li>
                                    <A href=format!("/{}", strategy.as_str())>{strategy.title()}</A>
                                    ": "
                                    {describe_rules(strategy.rules())}
                                    " "
                                    {describe_triggers(strategy.triggers())}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

fn describe_rules(rules: RuleSet) -> &'static str {
    match rules {
        RuleSet::Schema => "one message per field, with separate minimum and maximum length messages.",
        RuleSet::Manual => "a single password message covering characters and length.",
    }
}

fn describe_triggers(triggers: TriggerMode) -> &'static str {
    match triggers {
        TriggerMode::OnBlur => "Messages appear when a field loses focus and stay while you type.",
        TriggerMode::Manual => {
            "Typing clears messages; leaving a field or typing a matching confirmation re-checks the form."
        }
    }
}
