//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::view::RenderModel;

/// Visible todos for the current filter
#[component]
pub fn TodoList(model: Memo<RenderModel>) -> impl IntoView {
    view! {
        <ul id="todo-list" class="todo-list">
            <For
                each=move || model.with(|m| m.visible.clone())
                // Ids shift on delete, so key on every field a row displays
                key=|todo| (todo.id.clone(), todo.title.clone(), todo.completed)
                children=move |todo| view! { <TodoRow todo=todo /> }
            />
        </ul>
    }
}
