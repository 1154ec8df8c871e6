//! # companion-chat
//!
//! Leptos + WASM chat widget for an assistant endpoint. Each submission is
//! echoed into the message log, posted to `/chat` with the current
//! conversation identifier, and answered by exactly one reply or error entry.
//!
//! This crate contains the page, the chat component, the session state, and
//! the HTTP transport. The server behind `/chat` is not part of it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    log::info!("hydrating companion chat");
    leptos::mount::hydrate_body(app::App);
}
