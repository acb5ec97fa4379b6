//! Todo Row Component
//!
//! One list entry: checkbox, label, destroy button, and the inline editor
//! opened by double-clicking the label.

use leptos::html;
use leptos::prelude::*;

use crate::config::{ENTER_KEY, ESCAPE_KEY};
use crate::context::use_app_context;
use crate::domain::TodoItem;
use crate::view::{resolve_edit, EditOutcome};

/// `li` class for a row
fn row_class(completed: bool, editing: bool) -> &'static str {
    match (completed, editing) {
        (false, false) => "",
        (true, false) => "completed",
        (false, true) => "editing",
        (true, true) => "completed editing",
    }
}

/// A single todo row.
///
/// `todo.id` is only valid until the next structural change; the list is
/// keyed so any such change rebuilds the rows with fresh ids.
#[component]
pub fn TodoRow(todo: TodoItem) -> impl IntoView {
    let ctx = use_app_context();

    let (editing, set_editing) = signal(false);
    // Set by Escape so the following focusout discards the edit
    let aborted = StoredValue::new(false);
    let edit_ref = NodeRef::<html::Input>::new();

    let TodoItem { id, title, completed } = todo;

    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = edit_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let on_toggle = {
        let id = id.clone();
        move |_| {
            let _ = ctx.mutate("toggle", |store| store.toggle(&id));
        }
    };

    let on_destroy = {
        let id = id.clone();
        move |_| {
            let _ = ctx.mutate("destroy", |store| store.destroy(&id));
        }
    };

    let on_edit_keyup = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        if key == ESCAPE_KEY {
            aborted.set_value(true);
        } else if key != ENTER_KEY {
            return;
        }
        // Blurring fires focusout, which commits or discards
        if let Some(input) = edit_ref.get() {
            let _ = input.blur();
        }
    };

    let on_edit_focusout = {
        let id = id.clone();
        let original = title.clone();
        move |ev: web_sys::FocusEvent| {
            let outcome = resolve_edit(&event_target_value(&ev), aborted.get_value());
            aborted.set_value(false);
            set_editing.set(false);

            match outcome {
                EditOutcome::Discard => {
                    if let Some(input) = edit_ref.get() {
                        input.set_value(&original);
                    }
                }
                EditOutcome::Destroy => {
                    let _ = ctx.mutate("destroy", |store| store.destroy(&id));
                }
                EditOutcome::Rename(new_title) => {
                    let _ = ctx.mutate("update_title", |store| store.update_title(&id, new_title));
                }
            }
        }
    };

    view! {
        <li id=id.as_str().to_owned() class=move || row_class(completed, editing.get())>
            <div class="view">
                <input
                    class="toggle"
                    type="checkbox"
                    prop:checked=completed
                    on:change=on_toggle
                />
                <label on:dblclick=move |_| set_editing.set(true)>{title.clone()}</label>
                <button class="destroy" on:click=on_destroy></button>
            </div>
            <input
                class="edit"
                node_ref=edit_ref
                prop:value=title
                on:keyup=on_edit_keyup
                on:focusout=on_edit_focusout
            />
        </li>
    }
}
