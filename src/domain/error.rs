//! Domain Errors

use crate::repository::RepositoryError;

/// Common result type for store operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Id does not have the `todo<index>` shape
    #[error("malformed todo id: {0:?}")]
    MalformedId(String),

    /// Id is well-formed but points past the end of the list
    #[error("no todo at {id} (list has {len} items)")]
    NotFound { id: String, len: usize },

    #[error("todo title must not be empty")]
    EmptyTitle,

    /// Mutation applied in memory but the write-through failed
    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),

    #[error("todo store is no longer available")]
    Disposed,
}

impl DomainError {
    /// The list changed even though the operation reported failure
    pub fn list_changed(&self) -> bool {
        matches!(self, DomainError::Storage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_storage_errors_leave_list_changed() {
        let write = RepositoryError::Write {
            namespace: "todos".to_string(),
            reason: "quota exceeded".to_string(),
        };
        assert!(DomainError::Storage(write).list_changed());

        assert!(!DomainError::EmptyTitle.list_changed());
        assert!(!DomainError::MalformedId("x".to_string()).list_changed());
        assert!(!DomainError::NotFound { id: "todo3".to_string(), len: 1 }.list_changed());
        assert!(!DomainError::Disposed.list_changed());
    }
}
