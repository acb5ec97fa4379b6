//! Repository Layer - Core Trait
//!
//! The store writes the full list after every mutation and reads it once at
//! startup; nothing else is asked of a backend.

use crate::domain::TodoItem;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Backend cannot be reached at all (no window, storage disabled)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read {namespace:?}: {reason}")]
    Read { namespace: String, reason: String },

    /// Typically quota exceeded
    #[error("failed to write {namespace:?}: {reason}")]
    Write { namespace: String, reason: String },

    #[error("invalid stored data: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Key-value persistence for the todo list
pub trait TodoRepository {
    /// `Ok(None)` when nothing was ever saved under `namespace`
    fn load(&self, namespace: &str) -> RepositoryResult<Option<Vec<TodoItem>>>;

    /// Replace whatever is stored under `namespace` with `todos`
    fn save(&self, namespace: &str, todos: &[TodoItem]) -> RepositoryResult<()>;
}

impl<R: TodoRepository + ?Sized> TodoRepository for Box<R> {
    fn load(&self, namespace: &str) -> RepositoryResult<Option<Vec<TodoItem>>> {
        (**self).load(namespace)
    }

    fn save(&self, namespace: &str, todos: &[TodoItem]) -> RepositoryResult<()> {
        (**self).save(namespace, todos)
    }
}
