//! # client
//!
//! Leptos + WASM frontend for the university lodgement portal.
//!
//! This crate contains pages, components, application state, the backend DTOs
//! and the REST client. The `portal` server renders it with the `ssr` feature;
//! the browser bundle is built with `hydrate`.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the reactive app to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
