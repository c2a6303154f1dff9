//! REST helpers for the items API.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning a transport error, so state and views can be
//! compiled and tested without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a `FetchError`. Bodies are read as text and
//! decoded separately so status and decode handling stay testable off-browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use serde::de::DeserializeOwned;

use super::error::FetchError;
use super::types::{ItemDetail, ItemId, ItemSummary};

#[cfg(any(test, feature = "csr"))]
fn items_endpoint(api_base: &str) -> String {
    format!("{api_base}/api/items")
}

#[cfg(any(test, feature = "csr"))]
fn item_endpoint(api_base: &str, id: ItemId) -> String {
    format!("{api_base}/api/items/{id}")
}

/// Turn a status code and raw body into `T`.
///
/// Any non-2xx status is a failure regardless of body; a 2xx body that does
/// not match `T` is a decode failure.
#[cfg(any(test, feature = "csr"))]
fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(not(feature = "csr"))]
fn not_in_browser() -> FetchError {
    FetchError::Transport("not available outside the browser".to_owned())
}

#[cfg(feature = "csr")]
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    decode_body(status, &body)
}

/// Fetch the item list from `/api/items`.
///
/// # Errors
///
/// Returns a `FetchError` on transport failure, non-2xx status, or a body
/// that is not a JSON array of summaries.
pub async fn fetch_items(api_base: &str) -> Result<Vec<ItemSummary>, FetchError> {
    #[cfg(feature = "csr")]
    {
        get_json(&items_endpoint(api_base)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = api_base;
        Err(not_in_browser())
    }
}

/// Fetch one item's details from `/api/items/{id}`.
///
/// # Errors
///
/// Returns a `FetchError` on transport failure, non-2xx status (including 404
/// for an unknown id), or a malformed body.
pub async fn fetch_item(api_base: &str, id: ItemId) -> Result<ItemDetail, FetchError> {
    #[cfg(feature = "csr")]
    {
        get_json(&item_endpoint(api_base, id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (api_base, id);
        Err(not_in_browser())
    }
}
