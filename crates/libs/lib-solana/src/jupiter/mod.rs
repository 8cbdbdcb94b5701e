//! # Jupiter Routing Client
//!
//! Integration with the Jupiter routing service for swap orders and token metadata.

// region: --- Modules
pub mod types;
pub mod client;
pub mod quote;
// endregion: --- Modules

// region: --- Main Client
use client::JupiterHttpClient;

/// Default base URL of the order (quote) API.
pub const DEFAULT_QUOTE_API_BASE: &str = "https://lite-api.jup.ag/ultra/v1";
/// Default base URL of the token API.
pub const DEFAULT_TOKEN_API_BASE: &str = "https://token.jup.ag";

/// Builder for configuring JupiterClient.
///
/// Allows fluent configuration of client settings before building.
#[derive(Debug, Clone)]
pub struct JupiterClientBuilder {
    timeout: Option<std::time::Duration>,
    quote_api_base: Option<String>,
    token_api_base: Option<String>,
}

impl Default for JupiterClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Some(std::time::Duration::from_secs(10)),
            quote_api_base: Some(DEFAULT_QUOTE_API_BASE.to_string()),
            token_api_base: Some(DEFAULT_TOKEN_API_BASE.to_string()),
        }
    }
}

impl JupiterClientBuilder {
    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the order (quote) API base URL.
    pub fn quote_api_base(mut self, url: impl Into<String>) -> Self {
        self.quote_api_base = Some(url.into());
        self
    }

    /// Set the token API base URL.
    pub fn token_api_base(mut self, url: impl Into<String>) -> Self {
        self.token_api_base = Some(url.into());
        self
    }

    /// Build the JupiterClient with configured settings.
    pub fn build(self) -> anyhow::Result<JupiterClient> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout.unwrap_or_else(|| std::time::Duration::from_secs(10)))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        let inner = JupiterHttpClient {
            http,
            quote_api_base: trim_base(self.quote_api_base.unwrap_or_else(|| DEFAULT_QUOTE_API_BASE.to_string())),
            token_api_base: trim_base(self.token_api_base.unwrap_or_else(|| DEFAULT_TOKEN_API_BASE.to_string())),
        };

        Ok(JupiterClient { inner })
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Client for the Jupiter routing service
#[derive(Clone)]
pub struct JupiterClient {
    inner: JupiterHttpClient,
}

impl JupiterClient {
    /// Create a new Jupiter client with default settings.
    pub fn new() -> anyhow::Result<Self> {
        Self::builder().build()
    }

    /// Create a new Jupiter client using a builder for configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use lib_solana::jupiter::JupiterClient;
    ///
    /// let client = JupiterClient::builder()
    ///     .timeout(std::time::Duration::from_secs(30))
    ///     .quote_api_base("https://lite-api.jup.ag/ultra/v1")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn builder() -> JupiterClientBuilder {
        JupiterClientBuilder::default()
    }

    /// Base URL the order API is reached at.
    pub fn quote_api_base(&self) -> &str {
        &self.inner.quote_api_base
    }

    /// Fetch complete token list with metadata.
    pub async fn get_token_list(&self) -> anyhow::Result<Vec<types::TokenInfo>> {
        self.inner.get_token_list().await
    }

    /// Request an executable swap order (quote).
    pub async fn get_order(&self, request: &types::OrderRequest) -> anyhow::Result<types::OrderResponse> {
        self.inner.get_order(request).await
    }
}
// endregion: --- Main Client

// Re-export commonly used types
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = JupiterClient::builder()
            .quote_api_base("http://127.0.0.1:9000/ultra/v1/")
            .build()
            .unwrap();
        assert_eq!(client.quote_api_base(), "http://127.0.0.1:9000/ultra/v1");
    }

    #[test]
    fn test_default_client_uses_public_endpoint() {
        let client = JupiterClient::new().unwrap();
        assert_eq!(client.quote_api_base(), DEFAULT_QUOTE_API_BASE);
    }
}
