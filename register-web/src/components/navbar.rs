//! Navigation Bar Component - one link per form variant

use leptos::prelude::*;
use leptos_router::components::A;
use lib_core::ValidationStrategy;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/">
                <span class="nav-title">"Registration"</span>
            </A>
            {ValidationStrategy::all()
                .iter()
                .map(|strategy| {
                    view! {
                        <A href=format!("/{}", strategy.as_str())>
                            <span class="nav-link">{strategy.title()}</span>
                        </A>
                    }
                })
                .collect_view()}
            <A href="/about">
                <span class="nav-link">"About"</span>
            </A>
        </nav>
    }
}
