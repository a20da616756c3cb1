//! UI Components
//!
//! Leptos views for the todo feature.

mod todo_app;
mod todo_filters;
mod todo_input;
mod todo_item;
mod todo_list_view;

pub use todo_app::TodoApp;
pub use todo_filters::{items_left_label, TodoFilters};
pub use todo_input::TodoInput;
pub use todo_item::TodoItem;
pub use todo_list_view::TodoListView;
