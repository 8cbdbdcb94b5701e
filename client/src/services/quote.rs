//! Routing service adapter.

use async_trait::async_trait;
use lib_solana::jupiter::{JupiterClient, OrderRequest, OrderResponse};

use crate::core::service::QuoteService;

#[async_trait]
impl QuoteService for JupiterClient {
    async fn fetch_order(&self, request: &OrderRequest) -> Result<OrderResponse, String> {
        self.get_order(request)
            .await
            .map_err(|e| format!("Network error: {}", e))
    }
}
