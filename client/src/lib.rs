//! # client
//!
//! Leptos + WASM frontend for the EliteAuction marketplace.
//!
//! This crate contains pages, components, application state, REST types and
//! the HTTP client for the auction backend. The `ssr` feature renders it
//! inside the host server; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
