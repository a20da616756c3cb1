//! Todo Feature
//!
//! Todo list for the shop demo: records, filters, persistence to local
//! storage and the Leptos components that render them.

pub mod collection;
pub mod components;
pub mod models;
pub mod persistence;
pub mod storage;
pub mod store;

pub use collection::TodoList;
pub use components::{TodoApp, TodoFilters, TodoInput, TodoItem, TodoListView};
pub use models::{Todo, TodoFilter, TodoId};
pub use persistence::{load_todos, save_todos, STORAGE_KEY};
pub use storage::{KeyValueStore, LocalStorage, MemoryStore, SharedStore, StorageError};
pub use store::{use_todo_store, TodoState, TodoStore};
