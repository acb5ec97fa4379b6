//! In-Memory Repository
//!
//! Holds the encoded JSON text per namespace. Clones share the same map, so a
//! test can keep a handle and inspect what the store wrote. Also used as the
//! session-only fallback when the browser refuses localStorage.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::domain::TodoItem;

use super::{decode, encode, RepositoryResult, TodoRepository};

#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    entries: Rc<RefCell<HashMap<String, String>>>,
    saves: Rc<Cell<usize>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed raw text under `namespace`, bypassing the codec
    #[cfg(test)]
    pub fn insert_raw(&self, namespace: &str, raw: impl Into<String>) {
        self.entries.borrow_mut().insert(namespace.to_string(), raw.into());
    }

    /// Raw text currently stored under `namespace`
    #[cfg(test)]
    pub fn raw(&self, namespace: &str) -> Option<String> {
        self.entries.borrow().get(namespace).cloned()
    }

    /// Number of successful `save` calls so far
    #[cfg(test)]
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl TodoRepository for MemoryRepository {
    fn load(&self, namespace: &str) -> RepositoryResult<Option<Vec<TodoItem>>> {
        self.entries
            .borrow()
            .get(namespace)
            .map(|raw| decode(raw))
            .transpose()
    }

    fn save(&self, namespace: &str, todos: &[TodoItem]) -> RepositoryResult<()> {
        let raw = encode(todos)?;
        self.entries.borrow_mut().insert(namespace.to_string(), raw);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
