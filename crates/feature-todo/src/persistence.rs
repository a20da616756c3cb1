//! Todo Persistence
//!
//! The whole list is stored as one JSON array under a single key.

use crate::collection::TodoList;
use crate::models::Todo;
use crate::storage::{KeyValueStore, StorageError, StorageResult};

/// Local storage key shared with the web build of the shop
pub const STORAGE_KEY: &str = "todos-app-data";

/// Read the stored list. A missing key is an empty list.
pub fn try_load(store: &dyn KeyValueStore, key: &str) -> StorageResult<TodoList> {
    let Some(raw) = store.get(key)? else {
        return Ok(TodoList::new());
    };
    let todos: Vec<Todo> = serde_json::from_str(&raw).map_err(StorageError::Deserialize)?;
    Ok(TodoList::from_vec(todos))
}

/// Read the stored list, falling back to an empty list on any error
pub fn load_todos(store: &dyn KeyValueStore, key: &str) -> TodoList {
    match try_load(store, key) {
        Ok(todos) => {
            log::debug!("[TODOS] Loaded {} todos from `{}`", todos.len(), key);
            todos
        }
        Err(e) => {
            log::error!("[TODOS] Error loading todos from storage: {}", e);
            TodoList::new()
        }
    }
}

pub fn try_save(store: &dyn KeyValueStore, key: &str, todos: &TodoList) -> StorageResult<()> {
    let raw = serde_json::to_string(todos).map_err(StorageError::Serialize)?;
    store.set(key, &raw)
}

/// Write the list, logging failures instead of returning them
pub fn save_todos(store: &dyn KeyValueStore, key: &str, todos: &TodoList) {
    if let Err(e) = try_save(store, key, todos) {
        log::error!("[TODOS] Error saving todos to storage: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoFilter;
    use crate::storage::MemoryStore;

    /// Store whose writes always fail, like a full quota
    struct FullStore;

    impl KeyValueStore for FullStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Write {
                key: key.to_string(),
                message: "QuotaExceededError".to_string(),
            })
        }

        fn remove(&self, _key: &str) -> StorageResult<()> {
            Ok(())
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Read {
                key: key.to_string(),
                message: "SecurityError".to_string(),
            })
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Ok(())
        }

        fn remove(&self, _key: &str) -> StorageResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let store = MemoryStore::new();
        let mut todos = TodoList::new();
        todos.add("Persistent todo", 100);
        let second = todos.add("Done already", 200).unwrap().id.clone();
        todos.toggle(&second);

        save_todos(&store, STORAGE_KEY, &todos);
        let loaded = load_todos(&store, STORAGE_KEY);

        assert_eq!(loaded, todos);
        assert_eq!(loaded.filtered(TodoFilter::Completed).len(), 1);
    }

    #[test]
    fn test_stored_value_is_json_array() {
        let store = MemoryStore::new();
        let mut todos = TodoList::new();
        todos.add("Persistent todo", 100);
        try_save(&store, STORAGE_KEY, &todos).unwrap();

        let raw = store.get(STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let array = value.as_array().expect("array");
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["text"], "Persistent todo");
        assert_eq!(array[0]["createdAt"], 100);
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let store = MemoryStore::new();
        assert!(try_load(&store, STORAGE_KEY).unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_value_falls_back_to_empty() {
        let store = MemoryStore::new();
        store.set(STORAGE_KEY, "{not json").unwrap();

        assert!(matches!(
            try_load(&store, STORAGE_KEY),
            Err(StorageError::Deserialize(_))
        ));
        assert!(load_todos(&store, STORAGE_KEY).is_empty());
    }

    #[test]
    fn test_wrong_shape_falls_back_to_empty() {
        let store = MemoryStore::new();
        store.set(STORAGE_KEY, r#"{"id":"1"}"#).unwrap();
        assert!(load_todos(&store, STORAGE_KEY).is_empty());
    }

    #[test]
    fn test_read_failure_falls_back_to_empty() {
        assert!(load_todos(&BrokenStore, STORAGE_KEY).is_empty());
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let mut todos = TodoList::new();
        todos.add("a", 0);

        assert!(try_save(&FullStore, STORAGE_KEY, &todos).is_err());
        save_todos(&FullStore, STORAGE_KEY, &todos);
    }

    #[test]
    fn test_removed_key_loads_empty() {
        let store = MemoryStore::new();
        let mut todos = TodoList::new();
        todos.add("a", 0);
        save_todos(&store, STORAGE_KEY, &todos);

        store.remove(STORAGE_KEY).unwrap();
        assert!(store.get(STORAGE_KEY).unwrap().is_none());
        assert!(try_load(&store, STORAGE_KEY).unwrap().is_empty());
    }

    #[test]
    fn test_keys_are_independent() {
        let store = MemoryStore::new();
        let mut todos = TodoList::new();
        todos.add("a", 0);
        save_todos(&store, "other-key", &todos);

        assert!(load_todos(&store, STORAGE_KEY).is_empty());
        assert_eq!(load_todos(&store, "other-key").len(), 1);
    }
}
