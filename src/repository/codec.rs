//! Stored Record Format
//!
//! A JSON array of todo objects, the same layout the list has always had in
//! localStorage, so existing saved lists keep loading.

use crate::domain::TodoItem;

use super::RepositoryResult;

pub fn encode(todos: &[TodoItem]) -> RepositoryResult<String> {
    Ok(serde_json::to_string(todos)?)
}

pub fn decode(raw: &str) -> RepositoryResult<Vec<TodoItem>> {
    Ok(serde_json::from_str(raw)?)
}
