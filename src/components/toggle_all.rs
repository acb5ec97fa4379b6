//! Toggle-All Checkbox Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::view::RenderModel;

/// Checked when nothing is left active; changing it completes or reopens everything
#[component]
pub fn ToggleAll(model: Memo<RenderModel>) -> impl IntoView {
    let ctx = use_app_context();

    let on_change = move |ev: web_sys::Event| {
        let completed = event_target_checked(&ev);
        let _ = ctx.mutate("set_completeness_of_all", |store| store.set_completeness_of_all(completed));
    };

    view! {
        <input
            id="toggle-all"
            class="toggle-all"
            type="checkbox"
            prop:checked=move || model.with(|m| m.all_completed)
            on:change=on_change
        />
        <label for="toggle-all">"Mark all as complete"</label>
    }
}
