//! Todo Item Component
//!
//! A single row: completion checkbox, text and delete button.

use leptos::prelude::*;

use crate::models::Todo;
use crate::store::{store_delete_todo, store_toggle_todo, use_todo_store};

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let store = use_todo_store();

    let completed = todo.completed;
    let toggle_id = todo.id.clone();
    let delete_id = todo.id;
    let toggle_label = format!(
        "Mark \"{}\" as {}",
        todo.text,
        if completed { "active" } else { "completed" }
    );
    let delete_label = format!("Delete \"{}\"", todo.text);

    view! {
        <li class=if completed { "todo-item completed" } else { "todo-item" }>
            <label class="todo-label">
                <input
                    type="checkbox"
                    class="todo-checkbox"
                    checked=completed
                    aria-label=toggle_label
                    on:change=move |_| {
                        store_toggle_todo(&store, &toggle_id);
                    }
                />
                <span class="todo-text">{todo.text}</span>
            </label>
            <button
                class="delete-button"
                aria-label=delete_label
                on:click=move |_| {
                    store_delete_todo(&store, &delete_id);
                }
            >
                "✕"
            </button>
        </li>
    }
}
