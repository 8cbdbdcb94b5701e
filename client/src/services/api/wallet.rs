//! # Wallet Endpoints
//!
//! Balance lookup for the active wallet address.

use shared::WalletBalances;
use super::client::ApiClient;
use super::swap::error_message;

/// Get native and token balances for an address.
#[tracing::instrument(skip(client, jwt_token))]
pub async fn get_balances(
    client: &ApiClient,
    address: &str,
    jwt_token: &str,
) -> Result<WalletBalances, String> {
    let url = format!("{}/api/wallet/balances", client.base_url());

    let response = client
        .client
        .get(&url)
        .query(&[("address", address)])
        .header("Authorization", format!("Bearer {}", jwt_token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        response
            .json::<WalletBalances>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(error_message(response).await)
    }
}
