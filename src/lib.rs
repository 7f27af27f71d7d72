//! # storefront
//!
//! Leptos + WASM frontend for the coffee shop storefront. Renders the
//! product catalog on the default route and an admin upload form on
//! `/admin`; both talk to separately deployed product and upload services
//! whose base locations come from runtime configuration.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log plumbing, then hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    init_logging();
    leptos::mount::hydrate_body(crate::app::App);
}

/// Route `log` output to the browser console.
#[cfg(feature = "hydrate")]
fn init_logging() {
    if console_log::init_with_level(log::Level::Info).is_err() {
        // A logger was already installed; keep using it.
        log::warn!("console logger was already initialized");
    }
}
