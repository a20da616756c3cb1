//! Todo List View Component
//!
//! Renders the todos that match the current filter.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::store::{use_todo_store, visible_todos};

#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_todo_store();
    let todos = Memo::new(move |_| visible_todos(&store));

    view! {
        <Show
            when=move || todos.with(|todos| !todos.is_empty())
            fallback=|| view! {
                <div class="empty-state">
                    <p class="empty-message">"No todos to display"</p>
                    <p class="empty-hint">"Add a new todo to get started!"</p>
                </div>
            }
        >
            <ul class="todo-list">
                <For
                    each=move || todos.get()
                    // Rows are keyed on (id, completed) so a toggled row re-renders
                    key=|todo| (todo.id.clone(), todo.completed)
                    children=|todo| view! { <TodoItem todo=todo /> }
                />
            </ul>
        </Show>
    }
}
