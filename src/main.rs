//! Shop Frontend Entry Point

mod app;
mod components;
mod products;
mod routes;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = console_logger::init(level) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    log::info!("[APP] Starting shop frontend");

    mount_to_body(App);
}
