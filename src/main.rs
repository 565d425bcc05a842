//! Boscov Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod logging;
mod pages;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::log_level());
    log::info!("boscov ui starting, api at {}", config::api_base());
    mount_to_body(App);
}
