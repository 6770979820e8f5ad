//! HTTP helpers for talking to the catalog feed
//!
//! The feed is a public spreadsheet endpoint, so requests carry no
//! credentials and responses are read as plain text (the JSON inside is
//! wrapped, see `contracts::shared::feed`).

use gloo_net::http::Request;

/// Fetch a response body as text
///
/// # Returns
/// - body text on any 2xx response
/// - `Err` with a readable message on network failure or error status
pub async fn fetch_text(url: &str) -> Result<String, String> {
    log::debug!("Loading feed: {}", url);

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Feed responded with status {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}
