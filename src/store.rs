//! Todo Store
//!
//! Owns the ordered todo list and writes it through to a repository after
//! every mutation. Ids are positional (`todo<index>`): operations resolve an
//! id to an index, mutate by index, and renumber after anything that removes
//! items. Callers must treat ids they hold as stale after `destroy` or
//! `destroy_completed`.

use crate::domain::{DomainError, DomainResult, TodoId, TodoItem};
use crate::repository::TodoRepository;

pub struct TodoStore<R> {
    list: Vec<TodoItem>,
    repository: R,
    namespace: String,
}

impl<R: TodoRepository> TodoStore<R> {
    /// Load the list saved under `namespace`.
    ///
    /// Missing, unreadable and corrupt data all start an empty list.
    pub fn initialize(repository: R, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let list = match repository.load(&namespace) {
            Ok(Some(list)) => list,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(namespace = %namespace, error = %e, "could not load todos, starting empty");
                Vec::new()
            }
        };

        let mut store = Self {
            list,
            repository,
            namespace,
        };
        // Stored ids may predate a renumber; realign without writing back
        store.renumber();
        tracing::debug!(namespace = %store.namespace, count = store.list.len(), "todo store initialized");
        store
    }

    pub fn list(&self) -> &[TodoItem] {
        &self.list
    }

    #[cfg(test)]
    pub fn repository(&self) -> &R {
        &self.repository
    }

    #[cfg(test)]
    pub fn get(&self, id: &TodoId) -> DomainResult<&TodoItem> {
        let index = self.resolve(id)?;
        Ok(&self.list[index])
    }

    /// Append an active todo at the end of the list
    pub fn create(&mut self, title: impl Into<String>) -> DomainResult<TodoId> {
        let title = title.into();
        if title.is_empty() {
            return Err(DomainError::EmptyTitle);
        }

        let item = TodoItem::new(self.list.len(), title);
        let id = item.id.clone();
        self.list.push(item);
        tracing::debug!(id = %id, "todo created");

        self.persist()?;
        Ok(id)
    }

    /// Remove one todo; every later todo moves up one position and id
    pub fn destroy(&mut self, id: &TodoId) -> DomainResult<TodoItem> {
        let index = self.resolve(id)?;
        let removed = self.list.remove(index);
        self.renumber();
        tracing::debug!(id = %id, remaining = self.list.len(), "todo destroyed");

        self.persist()?;
        Ok(removed)
    }

    /// Flip completion; returns the new state
    pub fn toggle(&mut self, id: &TodoId) -> DomainResult<bool> {
        let index = self.resolve(id)?;
        let todo = &mut self.list[index];
        todo.completed = !todo.completed;
        let completed = todo.completed;
        tracing::debug!(id = %id, completed, "todo toggled");

        self.persist()?;
        Ok(completed)
    }

    pub fn set_completeness_of_all(&mut self, completed: bool) -> DomainResult<()> {
        for todo in &mut self.list {
            todo.completed = completed;
        }
        tracing::debug!(completed, count = self.list.len(), "set completeness of all todos");

        self.persist()
    }

    /// Remove every completed todo; returns how many were removed
    pub fn destroy_completed(&mut self) -> DomainResult<usize> {
        let before = self.list.len();
        self.list.retain(|todo| !todo.completed);
        self.renumber();
        let removed = before - self.list.len();
        tracing::debug!(removed, remaining = self.list.len(), "completed todos destroyed");

        self.persist()?;
        Ok(removed)
    }

    pub fn update_title(&mut self, id: &TodoId, title: impl Into<String>) -> DomainResult<()> {
        let title = title.into();
        if title.is_empty() {
            return Err(DomainError::EmptyTitle);
        }

        let index = self.resolve(id)?;
        self.list[index].title = title;
        tracing::debug!(id = %id, "todo title updated");

        self.persist()
    }

    /// Id -> index, rejecting malformed ids and positions past the end
    fn resolve(&self, id: &TodoId) -> DomainResult<usize> {
        let index = id.index()?;
        if index >= self.list.len() {
            return Err(DomainError::NotFound {
                id: id.to_string(),
                len: self.list.len(),
            });
        }
        Ok(index)
    }

    fn renumber(&mut self) {
        for (index, todo) in self.list.iter_mut().enumerate() {
            todo.id = TodoId::from_index(index);
        }
    }

    fn persist(&self) -> DomainResult<()> {
        self.repository.save(&self.namespace, &self.list)?;
        Ok(())
    }
}
