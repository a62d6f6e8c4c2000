//! # admin-ui
//!
//! Leptos + WASM frontend for the course-platform administration dashboard.
//!
//! This crate contains pages, components, application state, the REST client
//! and the remote-data cache. The `academy-admin` host renders it on the
//! server and the `hydrate` build takes over in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod query;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    leptos::mount::hydrate_body(app::App);
}
