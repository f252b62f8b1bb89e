//! Pagination Footer Component
//!
//! Page-size selector, results counter, four-way page navigation and the
//! page-jump control. Derived values come from the pure pagination math.

use leptos::prelude::*;

use crate::pagination;
use crate::store::{use_pods_store, PodsStateStoreFields};

/// Page size options
pub const PAGE_SIZES: &[usize] = &[5, 10, 25, 50, 100];

/// Footer with the pagination controls
#[component]
pub fn PaginationFooter(
    page: ReadSignal<usize>,
    page_size: ReadSignal<usize>,
    #[prop(into)] on_page_change: Callback<usize>,
    #[prop(into)] on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let store = use_pods_store();

    let total = move || store.total().get();
    let pages = move || pagination::total_pages(total(), page_size.get());
    let at_first = move || pagination::is_first_page(page.get());
    let at_last = move || pagination::is_last_page(page.get(), total(), page_size.get());

    let (jump_input, set_jump_input) = signal(String::new());
    let (jump_error, set_jump_error) = signal(false);

    let results_count = move || {
        let total = total();
        if total == 0 {
            "0 results".to_string()
        } else {
            format!(
                "{}-{} of {}",
                pagination::first_result(page.get(), page_size.get()),
                pagination::last_result(page.get(), page_size.get(), total),
                total
            )
        }
    };

    let jump = move |_| match jump_input.get().trim().parse::<usize>() {
        Ok(target) if (1..=pages()).contains(&target) => {
            on_page_change.run(target);
            set_jump_input.set(String::new());
        }
        _ => set_jump_error.set(true),
    };

    view! {
        <footer class="pagination-footer">
            <div class="page-size">
                "Result per page"
                <select
                    data-testid="page-size-select"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse() {
                            on_page_size_change.run(size);
                        }
                    }
                >
                    {PAGE_SIZES
                        .iter()
                        .map(|size| {
                            let size = *size;
                            view! {
                                <option
                                    value=size.to_string()
                                    selected=move || page_size.get() == size
                                >
                                    {size.to_string()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="page-jump">
                <input
                    type="number"
                    placeholder="Go to page"
                    prop:value=move || jump_input.get()
                    on:input=move |ev| set_jump_input.set(event_target_value(&ev))
                    on:focus=move |_| set_jump_error.set(false)
                />
                <button on:click=jump>"Go"</button>
                <Show when=move || jump_error.get()>
                    <span class="page-jump-error">
                        {move || format!("Page must be between 1 & {}", pages())}
                    </span>
                </Show>
            </div>

            <div class="page-nav">
                <span data-testid="results-count">{results_count}</span>
                <button
                    disabled=at_first
                    title="Go to first page"
                    on:click=move |_| on_page_change.run(1)
                >
                    "\u{00AB}"
                </button>
                <button
                    disabled=at_first
                    title="Go to previous page"
                    on:click=move |_| {
                        if !at_first() {
                            on_page_change.run(page.get() - 1);
                        }
                    }
                >
                    "\u{2039}"
                </button>
                <button
                    disabled=at_last
                    title="Go to next page"
                    on:click=move |_| {
                        if !at_last() {
                            on_page_change.run(page.get() + 1);
                        }
                    }
                >
                    "\u{203A}"
                </button>
                <button
                    disabled=move || at_last() || total() == 0
                    title="Go to last page"
                    on:click=move |_| {
                        if pages() > 0 {
                            on_page_change.run(pages());
                        }
                    }
                >
                    "\u{00BB}"
                </button>
            </div>
        </footer>
    }
}
