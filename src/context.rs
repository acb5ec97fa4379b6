//! Application Context
//!
//! Shared state provided via Leptos Context API. The store itself is not
//! reactive; a revision counter is bumped after every mutation and the render
//! model depends on it, so each change triggers one full re-render.

use leptos::prelude::*;

use crate::domain::{DomainError, DomainResult, Filter};
use crate::repository::TodoRepository;
use crate::store::TodoStore;
use crate::view::{RenderModel, ViewController};

pub type AppStore = TodoStore<Box<dyn TodoRepository>>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Todo data; web storage handles are not `Send`, hence the local arena
    store: StoredValue<AppStore, LocalStorage>,
    view: RwSignal<ViewController>,
    /// Bumped after every mutation - read
    pub revision: ReadSignal<u32>,
    /// Bumped after every mutation - write
    set_revision: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(store: AppStore, view: ViewController) -> Self {
        let (revision, set_revision) = signal(0u32);
        Self {
            store: StoredValue::new_local(store),
            view: RwSignal::new(view),
            revision,
            set_revision,
        }
    }

    /// Run a store operation, log a failure, then re-render.
    ///
    /// Re-renders even on failure: a failed write still changed the list
    /// (see `DomainError::list_changed`).
    pub fn mutate<T>(
        &self,
        action: &'static str,
        op: impl FnOnce(&mut AppStore) -> DomainResult<T>,
    ) -> DomainResult<T> {
        let result = self
            .store
            .try_update_value(op)
            .unwrap_or(Err(DomainError::Disposed));
        self.set_revision.update(|v| *v += 1);

        if let Err(e) = &result {
            tracing::error!(action, error = %e, list_changed = e.list_changed(), "todo operation failed");
        }
        result
    }

    pub fn filter(&self) -> Filter {
        self.view.with(|view| view.filter())
    }

    pub fn set_filter(&self, filter: Filter) {
        self.view.update(|view| view.set_filter(filter));
    }

    /// Current render model; tracks the revision and the filter
    pub fn render(&self) -> RenderModel {
        self.revision.track();
        let view = self.view.get();
        self.store.with_value(|store| view.render(store.list()))
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TodoId;
    use crate::repository::MemoryRepository;

    fn context() -> AppContext {
        let store = TodoStore::initialize(
            Box::new(MemoryRepository::new()) as Box<dyn TodoRepository>,
            "todos-test",
        );
        AppContext::new(store, ViewController::default())
    }

    #[test]
    fn test_every_mutation_bumps_revision() {
        let ctx = context();
        assert_eq!(ctx.revision.get_untracked(), 0);

        assert!(ctx.mutate("create", |store| store.create("A")).is_ok());
        assert_eq!(ctx.revision.get_untracked(), 1);

        let _ = ctx.mutate("toggle", |store| store.toggle(&TodoId::from_index(0)));
        assert_eq!(ctx.revision.get_untracked(), 2);

        // Rejected operations re-render too, which also returns focus to the header input
        let rejected = ctx.mutate("destroy", |store| store.destroy(&TodoId::from_index(5)));
        assert!(matches!(rejected, Err(DomainError::NotFound { .. })));
        assert_eq!(ctx.revision.get_untracked(), 3);
    }

    #[test]
    fn test_render_follows_filter() {
        let ctx = context();
        let _ = ctx.mutate("create", |store| store.create("A"));
        let _ = ctx.mutate("create", |store| store.create("B"));
        let _ = ctx.mutate("toggle", |store| store.toggle(&TodoId::from_index(1)));

        ctx.set_filter(Filter::Completed);
        assert_eq!(ctx.filter(), Filter::Completed);
        let model = ctx.render();
        assert_eq!(model.visible.len(), 1);
        assert_eq!(model.visible[0].title, "B");
        assert_eq!(model.footer.active_todo_count, 1);
    }
}
