//! Pods Frontend App
//!
//! Root component holding the client state: current page, page size, sort
//! preference and the draft input, restored from localStorage before the
//! first fetch and persisted together after every change.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{Header, PaginationFooter, PodForm, PodList};
use crate::pagination;
use crate::storage::{self, Preferences};
use crate::store::{store_append_pod, store_remove_pod, store_replace_pods, PodsState};

#[component]
pub fn App() -> impl IntoView {
    // Restore persisted preferences before any fetch effect exists, so the
    // first List request already carries them.
    let prefs = storage::load_preferences();

    let (draft, set_draft) = signal(prefs.draft_input);
    let (page, set_page) = signal(prefs.current_page);
    let (sort_preference, set_sort_preference) = signal(prefs.sort_preference);
    let (page_size, set_page_size) = signal(prefs.page_size);

    let (fetching, set_fetching) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let store = Store::new(PodsState::default());
    provide_context(store);

    // Monotonic request counter; a response is dropped when a newer List
    // request has been issued since it went out.
    let fetch_seq = StoredValue::new(0u64);

    let fetch_pods = move |target_page: usize, sort: String, size: usize| {
        set_fetching.set(true);
        set_error.set(None);
        let seq = fetch_seq.get_value() + 1;
        fetch_seq.set_value(seq);

        spawn_local(async move {
            let result = api::list_pods(target_page, size, &sort).await;
            if fetch_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(data) => store_replace_pods(&store, data.pods, data.total),
                Err(message) => set_error.set(Some(message)),
            }
            set_fetching.set(false);
        });
    };

    // Reload whenever page, sort preference or page size change
    Effect::new(move |_| {
        let target = page.get();
        let sort = sort_preference.get();
        let size = page_size.get();
        fetch_pods(target, sort, size);
    });

    // Persist all preference fields together after every change
    Effect::new(move |_| {
        storage::save_preferences(&Preferences {
            draft_input: draft.get(),
            current_page: page.get(),
            sort_preference: sort_preference.get(),
            page_size: page_size.get(),
        });
    });

    let add_pod = move |_: ()| {
        let title = draft.get();
        set_error.set(None);
        spawn_local(async move {
            match api::create_pod(&title).await {
                Ok(data) => {
                    let sort = sort_preference.get();
                    let size = page_size.get();
                    let target = pagination::page_after_add(&sort, data.total, size);

                    store_append_pod(&store, data.pod, data.total);
                    set_draft.set(String::new());

                    if page.get() == target {
                        // Same page: reconcile the optimistic append, which
                        // did not resort the list.
                        fetch_pods(target, sort, size);
                    } else {
                        // Page change re-triggers the list effect.
                        set_page.set(target);
                    }
                }
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    let delete_pod = move |id: u32| {
        set_error.set(None);
        spawn_local(async move {
            match api::delete_pod(id).await {
                Ok(data) => {
                    let sort = sort_preference.get();
                    let size = page_size.get();
                    let target = pagination::page_after_delete(page.get(), data.total, size);

                    store_remove_pod(&store, id, data.total);

                    if page.get() == target {
                        fetch_pods(target, sort, size);
                    } else {
                        set_page.set(target);
                    }
                }
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    let on_page_change = move |target: usize| set_page.set(target);

    // Changing the page size always lands back on the first page
    let on_page_size_change = move |size: usize| {
        set_page_size.set(size);
        set_page.set(1);
    };

    view! {
        <div class="app-shell">
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <div class="error-banner" data-testid="error-banner">
                                {message}
                            </div>
                        }
                    })
            }}

            <Header />

            <PodForm draft=draft set_draft=set_draft on_add=add_pod />

            <main class="pod-area">
                <div class="pod-area-header">
                    <h2>"Your Pods"</h2>
                    <span>
                        <label for="sort">"Sort By:"</label>
                        <select
                            id="sort"
                            on:change=move |ev| set_sort_preference.set(event_target_value(&ev))
                        >
                            <option
                                value="newestFirst"
                                selected=move || sort_preference.get() == "newestFirst"
                            >
                                "Newest First"
                            </option>
                            <option
                                value="oldestFirst"
                                selected=move || sort_preference.get() == "oldestFirst"
                            >
                                "Oldest First"
                            </option>
                        </select>
                    </span>
                </div>

                <Show when=move || fetching.get()>
                    <div class="loading">
                        <div class="spinner"></div>
                        <p>"Loading pods..."</p>
                    </div>
                </Show>

                <PodList on_delete=delete_pod />
            </main>

            <PaginationFooter
                page=page
                page_size=page_size
                on_page_change=on_page_change
                on_page_size_change=on_page_size_change
            />
        </div>
    }
}
