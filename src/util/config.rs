//! Runtime endpoint configuration.
//!
//! The deployed page defines a `window.global` object with the service
//! locations (`api_location`, `files_location`); both are re-read on every
//! request so the page can be repointed without a rebuild. Missing or empty
//! entries fall back to the development ports the services bind locally.
//!
//! TRADE-OFFS
//! ==========
//! Configuration lives in the hosting page rather than the binary, so the
//! SSR/native path only ever sees the defaults; that keeps server rendering
//! deterministic.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Product API base used when the page defines no `api_location`.
pub const DEFAULT_API_BASE: &str = "http://localhost:9090";

/// Upload service base used when the page defines no `files_location`.
pub const DEFAULT_UPLOAD_BASE: &str = "http://localhost:9091";

/// Base URL of the product API, read from `window.global.api_location`.
pub fn api_base() -> String {
    read_global("api_location").unwrap_or_else(|| DEFAULT_API_BASE.to_owned())
}

/// Base URL of the file upload service, read from `window.global.files_location`.
pub fn upload_base() -> String {
    read_global("files_location").unwrap_or_else(|| DEFAULT_UPLOAD_BASE.to_owned())
}

/// Read one string entry from the page's `window.global` config object.
#[cfg(feature = "hydrate")]
fn read_global(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let global = match js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str("global")) {
        Ok(value) => value,
        Err(_) => return None,
    };
    if global.is_undefined() || global.is_null() {
        return None;
    }
    let value = match js_sys::Reflect::get(&global, &wasm_bindgen::JsValue::from_str(key)) {
        Ok(value) => value,
        Err(_) => return None,
    };
    value.as_string().filter(|entry| !entry.is_empty())
}

#[cfg(not(feature = "hydrate"))]
fn read_global(_key: &str) -> Option<String> {
    None
}
