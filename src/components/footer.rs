//! Footer Component
//!
//! Remaining count, filter links and "Clear completed".

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::domain::Filter;
use crate::router::{self, route_href};
use crate::view::RenderModel;

#[component]
pub fn Footer(model: Memo<RenderModel>) -> impl IntoView {
    let ctx = use_app_context();
    let footer = move || model.with(|m| m.footer.clone());

    let clear_completed = move |_| {
        let _ = ctx.mutate("destroy_completed", |store| store.destroy_completed());
        // Back to the full list, in the URL too
        ctx.set_filter(Filter::All);
        if let Err(e) = router::navigate(Filter::All) {
            tracing::warn!(error = %e, "could not update route");
        }
    };

    view! {
        <footer id="footer" class="footer">
            <span class="todo-count">
                <strong>{move || footer().active_todo_count}</strong>
                " " {move || footer().active_todo_word} " left"
            </span>
            <ul class="filters">
                {Filter::ALL.iter().map(move |&filter| view! {
                    <li>
                        <a
                            href=route_href(filter)
                            class=move || if footer().filter == filter { "selected" } else { "" }
                        >
                            {filter.label()}
                        </a>
                    </li>
                }).collect_view()}
            </ul>
            <Show when=move || { footer().completed_todos > 0 }>
                <button id="clear-completed" class="clear-completed" on:click=clear_completed>
                    "Clear completed"
                </button>
            </Show>
        </footer>
    }
}
