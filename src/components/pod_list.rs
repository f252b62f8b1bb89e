//! Pod List Component
//!
//! Grid of pod cards with per-card delete buttons, reading the current
//! page from the pods store.

use leptos::prelude::*;

use crate::store::{use_pods_store, PodsStateStoreFields};

/// List of the pods on the current page
#[component]
pub fn PodList(#[prop(into)] on_delete: Callback<u32>) -> impl IntoView {
    let store = use_pods_store();

    view! {
        <ul class="pod-grid">
            <For
                each=move || store.pods().get()
                key=|pod| pod.id
                children=move |pod| {
                    let id = pod.id;
                    view! {
                        <li class="pod-card">
                            <button
                                class="pod-delete-btn"
                                aria-label="Delete pod"
                                on:click=move |_| on_delete.run(id)
                            >
                                "\u{00D7}"
                            </button>
                            <div class="pod-title">{pod.title.clone()}</div>
                        </li>
                    }
                }
            />
        </ul>
        <Show when=move || store.pods().read().is_empty()>
            <p class="empty-pods" data-testid="empty-pods">"No pods created yet."</p>
        </Show>
    }
}
