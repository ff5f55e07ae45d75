mod app;
mod auth;
mod auth_guard;
mod components;
mod config;
mod hooks;
mod pages;

use app::App;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time() // no system clock on wasm32
        .with_writer(MakeWebConsoleWriter::new());

    let level = if cfg!(debug_assertions) {
        tracing::level_filters::LevelFilter::DEBUG
    } else {
        tracing::level_filters::LevelFilter::INFO
    };

    let _ = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(level)
        .try_init();
}

fn main() {
    console_error_panic_hook::set_once();
    init_tracing();
    yew::Renderer::<App>::new().render();
}
