//! # blog-client
//!
//! Leptos + WASM browser client for a small blogging backend: session-cookie
//! authentication, a paginated post feed, post pages with comments, and user
//! profiles.
//!
//! The crate splits into `net` (HTTP resource clients and wire types),
//! `state` (session store and per-page view models), `util` (route gating,
//! dates, browser dialogs), and the Leptos `components`/`pages` on top.
//! Everything outside the `csr` feature builds natively for tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: logging, panic hook, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
