//! Board Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod form;
mod models;
mod pages;
mod query;
mod router;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = config::config();
    if let Err(err) = browser_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {}", err).into());
    }
    log::info!("[APP] starting, api at {}", config.api_base_url);
    mount_to_body(App);
}
