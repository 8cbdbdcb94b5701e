//! # API Client
//!
//! Main HTTP client for backend API communication.

use async_trait::async_trait;
use reqwest::Client;
use shared::{PrepareSwapRequest, PrepareSwapResponse, SubmitSwapRequest, SubmitSwapResponse, WalletBalances};
use std::time::Duration;

use crate::core::service::{BalanceService, SwapExecutor};

/// Default backend address for local development.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3001";

/// HTTP client for communicating with the backend API server.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, Duration::from_secs(10))
    }
}

#[async_trait]
impl SwapExecutor for ApiClient {
    async fn prepare_swap(
        &self,
        request: &PrepareSwapRequest,
        jwt_token: &str,
    ) -> Result<PrepareSwapResponse, String> {
        crate::services::api::swap::prepare_swap(self, request, jwt_token).await
    }

    async fn submit_swap(
        &self,
        request: &SubmitSwapRequest,
        jwt_token: &str,
    ) -> Result<SubmitSwapResponse, String> {
        crate::services::api::swap::submit_swap(self, request, jwt_token).await
    }
}

#[async_trait]
impl BalanceService for ApiClient {
    async fn get_balances(&self, address: &str, jwt_token: &str) -> Result<WalletBalances, String> {
        crate::services::api::wallet::get_balances(self, address, jwt_token).await
    }
}
