//! TodoMVC Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod domain;
mod repository;
mod router;
mod store;
mod view;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_location();
    if let Err(e) = console_logger::init_logger("todos-leptos", config.log_level) {
        web_sys::console::warn_1(&e.to_string().into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
