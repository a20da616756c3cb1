//! Todo Filters Component
//!
//! Remaining-count label, filter buttons and "Clear completed".

use leptos::prelude::*;

use crate::collection::TodoList;
use crate::models::TodoFilter;
use crate::store::{store_clear_completed, store_set_filter, use_todo_store, TodoStateStoreFields};

/// "item left" / "items left"
pub fn items_left_label(count: usize) -> &'static str {
    if count == 1 {
        "item left"
    } else {
        "items left"
    }
}

#[component]
pub fn TodoFilters() -> impl IntoView {
    let store = use_todo_store();
    let active_count = move || store.todos().with(TodoList::active_count);
    let has_completed = move || store.todos().with(TodoList::has_completed);

    view! {
        <div class="filters-container">
            <div class="counter">
                <span class="count">{active_count}</span>
                " "
                <span class="label">{move || items_left_label(active_count())}</span>
            </div>

            <div class="filter-buttons">
                {TodoFilter::ALL.into_iter().map(move |filter| {
                    let is_current = move || store.filter().get() == filter;
                    view! {
                        <button
                            class=move || if is_current() { "filter-button active" } else { "filter-button" }
                            aria-pressed=move || is_current().to_string()
                            on:click=move |_| store_set_filter(&store, filter)
                        >
                            {filter.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <Show when=has_completed>
                <button
                    class="clear-completed"
                    aria-label="Clear completed todos"
                    on:click=move |_| {
                        store_clear_completed(&store);
                    }
                >
                    "Clear completed"
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_left_label() {
        assert_eq!(items_left_label(0), "items left");
        assert_eq!(items_left_label(1), "item left");
        assert_eq!(items_left_label(2), "items left");
    }
}
