//! New Todo Input Component
//!
//! Header input; Enter with a non-blank value appends a todo. Focus returns
//! here after every re-render.

use leptos::html;
use leptos::prelude::*;

use crate::config::ENTER_KEY;
use crate::context::use_app_context;
use crate::view::{clears_new_todo, new_todo_title};

#[component]
pub fn NewTodoInput() -> impl IntoView {
    let ctx = use_app_context();
    let (new_text, set_new_text) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        ctx.revision.track();
        ctx.filter();
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let on_keyup = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != ENTER_KEY {
            return;
        }
        let Some(title) = new_todo_title(&new_text.get_untracked()) else {
            return;
        };
        let result = ctx.mutate("create", |store| store.create(title));
        if clears_new_todo(&result) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <header class="header">
            <h1>"todos"</h1>
            <input
                id="new-todo"
                node_ref=input_ref
                class="new-todo"
                placeholder="What needs to be done?"
                autofocus=true
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
                on:keyup=on_keyup
            />
        </header>
    }
}
