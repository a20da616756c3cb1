//! Todo Collection
//!
//! Ordered list of todos with unique ids. Order is insertion order.

use serde::{Deserialize, Serialize};

use crate::models::{Todo, TodoFilter, TodoId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored records, keeping the first occurrence of any id
    pub fn from_vec(todos: Vec<Todo>) -> Self {
        let mut list = Self::new();
        for todo in todos {
            let id = todo.id.clone();
            if !list.insert(todo) {
                log::warn!("[TODOS] Dropping duplicate todo id {}", id);
            }
        }
        list
    }

    /// Append a new todo. Text is trimmed; empty text is rejected.
    pub fn add(&mut self, text: &str, created_at: i64) -> Option<&Todo> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let mut todo = Todo::new(text, created_at);
        while self.contains(&todo.id) {
            todo.id = TodoId::generate(created_at);
        }
        self.todos.push(todo);
        self.todos.last()
    }

    /// Append an existing record. Returns false if its id is already present.
    pub fn insert(&mut self, todo: Todo) -> bool {
        if self.contains(&todo.id) {
            return false;
        }
        self.todos.push(todo);
        true
    }

    /// Flip the completed flag. Returns false if the id is unknown.
    pub fn toggle(&mut self, id: &TodoId) -> bool {
        match self.todos.iter_mut().find(|todo| &todo.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| &todo.id != id);
        self.todos.len() != before
    }

    /// Remove every completed todo, returning how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|todo| !todo.completed);
        before - self.todos.len()
    }

    pub fn filtered(&self, filter: TodoFilter) -> Vec<&Todo> {
        self.todos.iter().filter(|todo| filter.matches(todo)).collect()
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| &todo.id == id)
    }

    pub fn contains(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.len() - self.active_count()
    }

    pub fn has_completed(&self) -> bool {
        self.todos.iter().any(|todo| todo.completed)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.todos
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}
