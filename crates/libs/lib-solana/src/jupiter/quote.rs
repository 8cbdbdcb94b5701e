//! # Jupiter Order API
//!
//! Order (quote) requests against the Jupiter routing service.

use super::client::JupiterHttpClient;
use super::types::{OrderRequest, OrderResponse};
use tracing::debug;

impl JupiterHttpClient {
    /// Get an executable swap order from Jupiter
    ///
    /// Error-coded bodies are returned as `Ok` so the caller can decide; only
    /// transport failures and unparseable bodies are `Err`.
    #[tracing::instrument(skip(self), fields(
        input_mint = %request.input_mint,
        output_mint = %request.output_mint,
        amount = request.amount,
    ))]
    pub async fn get_order(&self, request: &OrderRequest) -> anyhow::Result<OrderResponse> {
        let url = format!("{}/order", self.quote_api_base);

        debug!("Jupiter order request: {}", url);

        let response = self
            .http
            .get(&url)
            .query(&request.query_pairs())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<OrderResponse>(&body) {
            Ok(order) => {
                debug!(
                    status = status.as_u16(),
                    "Jupiter order: {} -> {} (impact: {:.4}%)",
                    order.in_amount, order.out_amount, order.price_impact_pct
                );
                Ok(order)
            }
            Err(_) if !status.is_success() => {
                Err(anyhow::anyhow!("Jupiter order failed ({}): {}", status, body))
            }
            Err(e) => Err(anyhow::anyhow!("Jupiter order parse failed: {}", e)),
        }
    }
}
