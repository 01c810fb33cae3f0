//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and decoding
//! responses into the client's error taxonomy.

use crate::shared::crud::SyncError;
use contracts::shared::api_error::ApiErrorBody;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/transactions/1");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Build a full API URL with a single encoded query parameter
pub fn api_url_with_query(path: &str, key: &str, value: &str) -> String {
    format!(
        "{}?{}={}",
        api_url(path),
        urlencoding::encode(key),
        urlencoding::encode(value)
    )
}

/// Send the request and map a network failure to `SyncError::Transport`
pub async fn send(request: Request) -> Result<Response, SyncError> {
    request
        .send()
        .await
        .map_err(|e| SyncError::Transport(format!("Request failed: {}", e)))
}

/// Reject non-2xx responses, preferring the server's `{"error": ...}` message
pub async fn ensure_ok(response: Response) -> Result<Response, SyncError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.json::<ApiErrorBody>().await {
        Ok(body) if !body.error.trim().is_empty() => body.error,
        _ => format!("HTTP error: {}", status),
    };
    Err(SyncError::Transport(message))
}

/// Decode a 2xx JSON body
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, SyncError> {
    let response = ensure_ok(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| SyncError::Malformed(format!("Failed to parse response: {}", e)))
}

/// `GET` a JSON document
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, SyncError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| SyncError::Transport(format!("Request failed: {}", e)))?;
    read_json(response).await
}
