//! Response decoder for the search endpoint
//!
//! Turns a response body into a [`SearchPage`]. A populated `errorMessage`
//! is reported as [`SearchError::Application`] before the page shape is
//! checked, so a service-side error is never mistaken for a malformed body.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Result, SearchError};
use crate::types::SearchPage;

/// Extract a populated `errorMessage` from a decoded body.
///
/// Only a missing field, `null` or the empty string count as "no error".
/// String messages are returned as sent; other values as their JSON text.
///
/// # Examples
/// ```
/// use bygningsreglement_core::decode::error_message;
///
/// let body: serde_json::Value = serde_json::json!({"errorMessage": "Ingen adgang"});
/// assert_eq!(error_message(&body).as_deref(), Some("Ingen adgang"));
/// assert_eq!(error_message(&serde_json::json!({"errorMessage": 42})).as_deref(), Some("42"));
/// assert_eq!(error_message(&serde_json::json!({"errorMessage": ""})), None);
/// assert_eq!(error_message(&serde_json::json!({"errorMessage": null})), None);
/// ```
pub fn error_message(body: &Value) -> Option<String> {
    match body.get("errorMessage")? {
        Value::Null => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

/// Decode a search response body.
///
/// # Arguments
/// * `body` - Raw response text
///
/// # Returns
/// * `Ok(SearchPage)` with results in body order
/// * `Err(SearchError::Application)` if the body carries an `errorMessage`
/// * `Err(SearchError::Decode)` if the body is not JSON or lacks `data`/`pagination`
pub fn decode_search_page(body: &str) -> Result<SearchPage> {
    let value: Value = serde_json::from_str(body)?;

    if let Some(message) = error_message(&value) {
        warn!(error = %message, "search endpoint reported an error");
        return Err(SearchError::Application(message));
    }

    let page: SearchPage = serde_json::from_value(value)?;
    debug!(
        page = page.pagination.page_number,
        results = page.results.len(),
        has_next = page.has_next_page(),
        "decoded search page"
    );
    Ok(page)
}
