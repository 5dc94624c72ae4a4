//! # portal-client
//!
//! Leptos + WASM front-end for the Roblox services portal: a landing page
//! with four service tabs and the login, registration and profile screens
//! backed by the remote auth API.
//!
//! Built with `hydrate` for the browser bundle and `ssr` for the host
//! server's render pass.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("portal client hydrating");
    leptos::mount::hydrate_body(app::App);
}
