//! Browser localStorage Repository

use web_sys::Storage;

use crate::domain::TodoItem;

use super::{decode, encode, RepositoryError, RepositoryResult, TodoRepository};

pub struct WebStorageRepository {
    storage: Storage,
}

impl WebStorageRepository {
    /// Open `window.localStorage`
    pub fn open() -> RepositoryResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| RepositoryError::Unavailable("no global window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| RepositoryError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| RepositoryError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl TodoRepository for WebStorageRepository {
    fn load(&self, namespace: &str) -> RepositoryResult<Option<Vec<TodoItem>>> {
        let raw = self.storage.get_item(namespace).map_err(|e| RepositoryError::Read {
            namespace: namespace.to_string(),
            reason: format!("{:?}", e),
        })?;
        raw.as_deref().map(decode).transpose()
    }

    fn save(&self, namespace: &str, todos: &[TodoItem]) -> RepositoryResult<()> {
        let raw = encode(todos)?;
        self.storage
            .set_item(namespace, &raw)
            .map_err(|e| RepositoryError::Write {
                namespace: namespace.to_string(),
                reason: format!("{:?}", e),
            })
    }
}
