//! # Swap Endpoints
//!
//! Handles swap preparation and submission.

use shared::{ErrorResponse, PrepareSwapRequest, PrepareSwapResponse, SubmitSwapRequest, SubmitSwapResponse};
use super::client::ApiClient;

/// Prepare swap - get unsigned transaction.
#[tracing::instrument(skip(client, request, jwt_token), fields(
    input_mint = %request.input_mint,
    output_mint = %request.output_mint,
    amount = request.amount,
    platform_fee = request.platform_fee,
    user = %request.taker
))]
pub async fn prepare_swap(
    client: &ApiClient,
    request: &PrepareSwapRequest,
    jwt_token: &str,
) -> Result<PrepareSwapResponse, String> {
    tracing::info!("Preparing swap");
    let start = std::time::Instant::now();

    let response = client
        .client
        .post(format!("{}/api/swap/prepare", client.base_url()))
        .header("Authorization", format!("Bearer {}", jwt_token))
        .json(request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Swap prepare network error");
            format!("Network error: {}", e)
        })?;

    let duration = start.elapsed();
    let status = response.status();

    if status.is_success() {
        let prepared = response
            .json::<PrepareSwapResponse>()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Swap prepare parse error");
                format!("Failed to parse response: {}", e)
            })?;

        if prepared.transaction.trim().is_empty() {
            tracing::warn!("Backend returned an empty transaction");
            return Err("Backend returned an empty transaction".to_string());
        }

        tracing::info!(duration_ms = duration.as_millis(), "Swap prepared");
        Ok(prepared)
    } else {
        let error = error_message(response).await;
        tracing::warn!(
            status = status.as_u16(),
            error = %error,
            duration_ms = duration.as_millis(),
            "Swap prepare failed"
        );
        Err(error)
    }
}

/// Submit signed transaction.
///
/// A router-side failure is still `Ok` with a failed `status`; only transport
/// and HTTP errors are `Err`.
#[tracing::instrument(skip(client, request, jwt_token), fields(request_id = %request.request_id))]
pub async fn submit_swap(
    client: &ApiClient,
    request: &SubmitSwapRequest,
    jwt_token: &str,
) -> Result<SubmitSwapResponse, String> {
    let start = std::time::Instant::now();

    let response = client
        .client
        .post(format!("{}/api/swap/submit", client.base_url()))
        .header("Authorization", format!("Bearer {}", jwt_token))
        .json(request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Swap submit network error");
            format!("Network error: {}", e)
        })?;

    let status = response.status();
    if status.is_success() {
        let result = response
            .json::<SubmitSwapResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        tracing::info!(
            status = %result.status,
            signature = ?result.signature,
            duration_ms = start.elapsed().as_millis(),
            "Swap submitted"
        );
        Ok(result)
    } else {
        let error = error_message(response).await;
        tracing::warn!(status = status.as_u16(), error = %error, "Swap submit failed");
        Err(error)
    }
}

/// Pull a readable message out of a non-success response.
pub(crate) async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error_text(status, &body)
}

/// Error text for a failed request; router details are kept so failures can be classified.
fn error_text(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(error) => error.message(),
        Err(_) if body.trim().is_empty() => format!("Request failed: {}", status),
        Err(_) => format!("Request failed ({}): {}", status, body.trim()),
    }
}
