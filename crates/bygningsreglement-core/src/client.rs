//! HTTP client for the Bygningsreglementet.dk search endpoint
//!
//! This module issues single GET requests with a bounded timeout and maps
//! transport failures to [`SearchError`] variants. Requests are never
//! retried; every failure surfaces to the caller immediately.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{Result, SearchError};

/// Search endpoint of Bygningsreglementet.dk
pub const DEFAULT_BASE_URL: &str = "https://www.bygningsreglementet.dk/api/search";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent identifying this client
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Configuration for the search HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the search endpoint
    pub base_url: String,
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at another endpoint
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// HTTP client bound to one search endpoint
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Parsed endpoint URL
    base_url: reqwest::Url,
}

impl ApiClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `SearchError::InvalidUrl` - `base_url` is not an absolute URL
    /// - `SearchError::Connection` - the HTTP client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = reqwest::Url::parse(&config.base_url)
            .map_err(|e| SearchError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Endpoint this client talks to
    pub fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }

    /// Send one GET with the given query parameters and return the body.
    ///
    /// # Errors
    /// - `SearchError::HttpStatus` - server returned a non-2xx status
    /// - `SearchError::Timeout` - no response within the configured timeout
    /// - `SearchError::Connection` - connection or other transport failure
    pub async fn get(&self, params: &[(&str, String)]) -> Result<String> {
        debug!(url = %self.base_url, ?params, "sending search request");

        let response = self
            .client
            .get(self.base_url.clone())
            .query(params)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            warn!(status = status.as_u16(), url = %response.url(), "search request failed");
            return Err(SearchError::HttpStatus(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 10);
        assert!(config.user_agent.starts_with("bygningsreglement-core/"));
    }

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_custom_config() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:8080/api/search".to_string(),
            timeout_secs: 2,
            user_agent: "test-agent".to_string(),
        };
        let client = ApiClient::with_config(config).unwrap();
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8080/api/search");
    }

    #[test]
    fn test_client_rejects_relative_base_url() {
        let result = ApiClient::with_config(ClientConfig::with_base_url("/api/search"));
        match result {
            Err(SearchError::InvalidUrl(msg)) => assert!(msg.contains("/api/search")),
            _ => panic!("Expected InvalidUrl error"),
        }
    }
}
