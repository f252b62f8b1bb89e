//! Pod Form Component
//!
//! Draft textarea with a live character count and the add button. The
//! draft itself lives in the app state so it can be persisted with the
//! other preferences.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Form for creating new pods
#[component]
pub fn PodForm(
    draft: ReadSignal<String>,
    set_draft: WriteSignal<String>,
    #[prop(into)] on_add: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_add.run(());
    };

    view! {
        <section class="pod-form">
            <form on:submit=submit>
                <textarea
                    data-testid="pod-text-area"
                    placeholder="Define your pod here..."
                    rows=4
                    prop:value=move || draft.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                        set_draft.set(textarea.value());
                    }
                />
                <div class="char-count">
                    {move || format!("{} characters", draft.get().chars().count())}
                </div>
                <button type="submit">"Add Pod"</button>
            </form>
        </section>
    }
}
