//! Header Component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1>"Micro-Pods"</h1>
        </header>
    }
}
