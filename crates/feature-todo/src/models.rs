//! Todo Models
//!
//! Records persisted to local storage and the filter applied to them.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the random part of a generated id
const ID_SUFFIX_LEN: usize = 9;
const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Opaque todo identifier, `"{millis}-{base36 suffix}"` when generated
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Build an id from the creation time plus a random suffix
    pub fn generate(created_at: i64) -> Self {
        let random = Uuid::new_v4().as_u128();
        Self(format!("{}-{}", created_at, base36(random, ID_SUFFIX_LEN)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TodoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn base36(mut n: u128, len: usize) -> String {
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        out.push(BASE36_DIGITS[(n % 36) as usize] as char);
        n /= 36;
    }
    out
}

/// Current time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// A single task record.
///
/// Field names are camelCase on the wire so stored arrays stay readable by
/// the JavaScript build of the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    /// Milliseconds since the Unix epoch
    pub created_at: i64,
}

impl Todo {
    /// Create an active todo with a freshly generated id
    pub fn new(text: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: TodoId::generate(created_at),
            text: text.into(),
            completed: false,
            created_at,
        }
    }
}

/// View predicate over the todo collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    /// Filters in button order
    pub const ALL: [TodoFilter; 3] = [TodoFilter::All, TodoFilter::Active, TodoFilter::Completed];

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => !todo.completed,
            TodoFilter::Completed => todo.completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TodoFilter::All => "All",
            TodoFilter::Active => "Active",
            TodoFilter::Completed => "Completed",
        }
    }
}
