//! Todo model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Newtype wrapper for todo ids, so they can't be mixed up with goal ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    pub fn new(value: u64) -> Self {
        TodoId(value)
    }

    /// Get the raw value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub name: String,
    pub complete: bool,
}

impl Todo {
    /// Create an open todo
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: TodoId(id),
            name: name.into(),
            complete: false,
        }
    }

    /// Copy of this todo with `complete` flipped
    pub fn toggled(&self) -> Self {
        Self {
            complete: !self.complete,
            ..self.clone()
        }
    }
}
