//! Todo Input Component
//!
//! Form for adding a todo.

use leptos::prelude::*;

use crate::store::{store_add_todo, use_todo_store};

#[component]
pub fn TodoInput() -> impl IntoView {
    let store = use_todo_store();
    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_add_todo(&store, &new_text.get_untracked()).is_some() {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="todo-input-form" on:submit=add_todo>
            <input
                type="text"
                class="todo-input"
                placeholder="What needs to be done?"
                aria-label="New todo"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button
                type="submit"
                class="add-button"
                disabled=move || new_text.get().trim().is_empty()
            >
                "Add Todo"
            </button>
        </form>
    }
}
