//! # Jupiter HTTP Client
//!
//! HTTP client wrapper for the Jupiter API.

use super::types::TokenInfo;
use reqwest::Client;
use tracing::debug;

/// HTTP client wrapper for the Jupiter API
#[derive(Clone)]
pub struct JupiterHttpClient {
    pub http: Client,
    pub quote_api_base: String,
    pub token_api_base: String,
}

impl JupiterHttpClient {
    /// Fetch complete token list with metadata from Jupiter
    pub async fn get_token_list(&self) -> anyhow::Result<Vec<TokenInfo>> {
        let url = format!("{}/strict", self.token_api_base);
        debug!("Jupiter token list request: {}", url);

        self.http
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Jupiter token list request failed: {}", e))?
            .error_for_status()
            .map_err(|e| anyhow::anyhow!("Jupiter token list request failed: {}", e))?
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Jupiter token list parse failed: {}", e))
    }
}
