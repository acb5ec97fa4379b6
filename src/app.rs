//! TodoMVC App
//!
//! Builds the store, provides the context, starts the router and lays out
//! header, list and footer.

use leptos::prelude::*;

use crate::components::{Footer, NewTodoInput, TodoList, ToggleAll};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::repository::{MemoryRepository, TodoRepository, WebStorageRepository};
use crate::router;
use crate::store::TodoStore;
use crate::view::ViewController;

/// localStorage when the browser allows it, else a list that lasts one session
fn open_repository() -> Box<dyn TodoRepository> {
    match WebStorageRepository::open() {
        Ok(repo) => Box::new(repo),
        Err(e) => {
            tracing::warn!(error = %e, "localStorage unavailable, todos will not survive a reload");
            Box::new(MemoryRepository::new())
        }
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = TodoStore::initialize(open_repository(), config.storage_namespace);
    let ctx = AppContext::new(store, ViewController::new(config.default_filter));
    provide_context(ctx);

    if let Err(e) = router::start(config.default_filter, move |filter| ctx.set_filter(filter)) {
        tracing::error!(error = %e, "router failed to start, filter stays at {}", ctx.filter());
    }

    let model = Memo::new(move |_| ctx.render());

    view! {
        <section class="todoapp">
            <NewTodoInput />
            <Show when=move || model.with(|m| m.show_main)>
                <section id="main" class="main">
                    <ToggleAll model=model />
                    <TodoList model=model />
                </section>
            </Show>
            <Show when=move || model.with(|m| m.show_footer)>
                <Footer model=model />
            </Show>
        </section>
        <footer class="info">
            <p>"Double-click to edit a todo"</p>
        </footer>
    }
}
