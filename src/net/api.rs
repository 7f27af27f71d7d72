//! REST API helpers for the product and upload services.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since both services are only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics: the catalog
//! logs and keeps its last list, the upload form surfaces the message in
//! the toast. Failure strings carry the response's status text verbatim so
//! the server's own wording reaches the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Product;
#[cfg(feature = "hydrate")]
use crate::util::config;

#[cfg(any(test, feature = "hydrate"))]
fn products_endpoint(base: &str) -> String {
    format!("{base}/products")
}

#[cfg(any(test, feature = "hydrate"))]
fn products_request_failed_message(status: u16, status_text: &str) -> String {
    if status_text.is_empty() {
        format!("products request failed: {status}")
    } else {
        format!("products request failed: {status} {status_text}")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn upload_request_failed_message(status: u16, status_text: &str) -> String {
    if status_text.is_empty() {
        format!("upload request failed: {status}")
    } else {
        format!("upload request failed: {status} {status_text}")
    }
}

/// Fetch the full product collection from `GET {api_base}/products`.
///
/// The response order is preserved; the catalog renders rows exactly as
/// received.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body cannot be decoded.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = products_endpoint(&config::api_base());
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(products_request_failed_message(resp.status(), &resp.status_text()));
        }
        resp.json::<Vec<Product>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Upload an image for a product as one `multipart/form-data` POST with
/// fields `id` and `file`.
///
/// The browser sets the multipart boundary itself, so no content-type
/// header is attached here.
///
/// # Errors
///
/// Returns an error string if the payload cannot be built, the request
/// fails in transit, or the server responds with a non-OK status.
#[cfg(feature = "hydrate")]
pub async fn upload_product_image(product_id: &str, file: &web_sys::File) -> Result<(), String> {
    let form = build_upload_form(product_id, file)?;
    let resp = gloo_net::http::Request::post(&config::upload_base())
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(upload_request_failed_message(resp.status(), &resp.status_text()));
    }
    Ok(())
}

/// Assemble the transient multipart payload for one upload attempt.
#[cfg(feature = "hydrate")]
fn build_upload_form(product_id: &str, file: &web_sys::File) -> Result<web_sys::FormData, String> {
    let form = web_sys::FormData::new().map_err(|_| "could not create form data".to_owned())?;
    form.append_with_str("id", product_id)
        .map_err(|_| "could not attach product id".to_owned())?;
    form.append_with_blob("file", file)
        .map_err(|_| "could not attach file".to_owned())?;
    Ok(form)
}
