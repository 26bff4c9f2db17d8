//! Registration Form App - Leptos Frontend
//!
//! One route per form variant; `/` follows the configured default strategy.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};
use lib_core::FormConfig;

use crate::components::Navbar;
use crate::pages::{AboutPage, DefaultRegisterPage, HybridPage, ManualPage, SchemaPage};

#[component]
pub fn App(config: FormConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=DefaultRegisterPage/>
                    <Route path=path!("/schema") view=SchemaPage/>
                    <Route path=path!("/manual") view=ManualPage/>
                    <Route path=path!("/hybrid") view=HybridPage/>
                    <Route path=path!("/about") view=AboutPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app">
            <div class="card">
                <h1 class="label">"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="button">"Go to registration"</span>
                </A>
            </div>
        </div>
    }
}
