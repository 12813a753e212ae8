//! webook-web - Main Entry Point
//!
//! Launches the Dioxus router shell with the platform renderer picked by
//! the `web` / `desktop` features.

use webook_web::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    web_sys::console::log_1(&"[WASM] webook-web initialized".into());
    dioxus::launch(App);
}

// Native client (desktop)
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting webook-web...");
    dioxus::launch(App);
}
