//! Todo State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::collection::TodoList;
use crate::models::{now_millis, Todo, TodoFilter, TodoId};

/// Todo feature state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// All todos, in insertion order
    pub todos: TodoList,
    /// Active view filter
    pub filter: TodoFilter,
}

impl TodoState {
    pub fn new(todos: TodoList) -> Self {
        Self {
            todos,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a todo; blank text leaves the store untouched
pub fn store_add_todo(store: &TodoStore, text: &str) -> Option<Todo> {
    if text.trim().is_empty() {
        return None;
    }
    let added = store.todos().write().add(text, now_millis()).cloned();
    if let Some(todo) = &added {
        log::debug!("[TODOS] Added {}", todo.id);
    }
    added
}

/// Flip completion of a todo by ID
pub fn store_toggle_todo(store: &TodoStore, id: &TodoId) -> bool {
    store.todos().write().toggle(id)
}

/// Remove a todo by ID
pub fn store_delete_todo(store: &TodoStore, id: &TodoId) -> bool {
    store.todos().write().remove(id)
}

/// Remove all completed todos
pub fn store_clear_completed(store: &TodoStore) -> usize {
    if !store.todos().with_untracked(TodoList::has_completed) {
        return 0;
    }
    let removed = store.todos().write().clear_completed();
    log::debug!("[TODOS] Cleared {} completed", removed);
    removed
}

pub fn store_set_filter(store: &TodoStore, filter: TodoFilter) {
    store.filter().set(filter);
}

/// Todos matching the current filter (tracked)
pub fn visible_todos(store: &TodoStore) -> Vec<Todo> {
    let filter = store.filter().get();
    store
        .todos()
        .with(|todos| todos.filtered(filter).into_iter().cloned().collect())
}
