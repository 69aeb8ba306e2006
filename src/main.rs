//! Site Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod format;
mod load_state;
mod logger;
mod models;
mod pages;
mod routes;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::load();
    logger::init(config.log_level);
    mount_to_body(move || view! { <App config=config /> });
}
