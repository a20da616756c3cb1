//! Todo App Component
//!
//! Root of the todo feature. Loads the list at mount, provides the store to
//! children and writes the list back on every change.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TodoFilters, TodoInput, TodoListView};
use crate::persistence::{load_todos, save_todos, STORAGE_KEY};
use crate::storage::{open_default_store, SharedStore};
use crate::store::{TodoState, TodoStateStoreFields};

#[component]
pub fn TodoApp(
    /// Storage key, defaults to [`STORAGE_KEY`]
    #[prop(optional, into)]
    storage_key: Option<String>,
    /// Storage backend, defaults to local storage
    #[prop(optional)]
    backend: Option<SharedStore>,
) -> impl IntoView {
    let key = storage_key.unwrap_or_else(|| STORAGE_KEY.to_string());
    let backend = backend.unwrap_or_else(open_default_store);

    let store = Store::new(TodoState::new(load_todos(backend.as_ref(), &key)));
    provide_context(store);

    // Persist whenever the list changes
    Effect::new(move |_| {
        store
            .todos()
            .with(|todos| save_todos(backend.as_ref(), &key, todos));
    });

    view! {
        <div class="todo-container">
            <div class="todo-app">
                <header class="todo-header">
                    <h1 class="todo-title">"Todo App"</h1>
                    <p class="todo-subtitle">"Organize your tasks efficiently"</p>
                </header>

                <div class="todo-content">
                    <TodoInput />
                    <TodoListView />
                    <TodoFilters />
                </div>
            </div>
        </div>
    }
}
