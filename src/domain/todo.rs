//! Todo Entity
//!
//! A todo's id is a positional alias, not an identity: `todo3` means "the
//! todo currently at index 3". Every structural change (delete, bulk delete)
//! renumbers the list, so ids captured before such a change are stale after it.

use serde::{Deserialize, Serialize};

use super::{DomainError, DomainResult};

const ID_PREFIX: &str = "todo";

/// Positional alias of a todo, also used as the DOM element id of its row
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn from_index(index: usize) -> Self {
        Self(format!("{}{}", ID_PREFIX, index))
    }

    /// Strip the prefix and parse the rest as the list index.
    ///
    /// Only the shape is checked; whether the index exists is up to the caller.
    pub fn index(&self) -> DomainResult<usize> {
        self.0
            .strip_prefix(ID_PREFIX)
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
            .ok_or_else(|| DomainError::MalformedId(self.0.clone()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TodoId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for TodoId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single todo, stored as `{"id":"todo0","title":"...","completed":false}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

impl TodoItem {
    /// New, not yet completed todo at `index`
    pub fn new(index: usize, title: impl Into<String>) -> Self {
        Self {
            id: TodoId::from_index(index),
            title: title.into(),
            completed: false,
        }
    }
}
