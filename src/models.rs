//! Domain Models
//!
//! Data structures for the session user and grocery-list entries.

use serde::{Deserialize, Serialize};

/// Logged-in user, held only in memory (never persisted)
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub email: String,
    pub name: String,
}

/// A single grocery-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Creation timestamp in milliseconds; unique within the list
    pub id: i64,
    pub title: String,
    pub author: String,
    pub done: bool,
}

/// The slice of global state written to durable storage
///
/// The user is intentionally left out: sessions do not survive a reload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub todos: Vec<Todo>,
}
