//! # Jupiter API Types
//!
//! Type definitions for Jupiter routing API requests and responses.

use serde::{Deserialize, Deserializer, Serialize};

/// Token information from the Jupiter token list
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenInfo {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    #[serde(rename = "logoURI", default)]
    pub logo_uri: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Parameters of an order (quote) request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub input_mint: String,
    pub output_mint: String,
    /// Exact input amount in the input token's smallest unit
    pub amount: u64,
    /// Wallet that will sign; enables balance-aware routing
    pub taker: Option<String>,
    pub slippage_bps: u16,
    /// Let the router pay network fees out of the swap
    pub gasless: bool,
}

impl OrderRequest {
    /// Query string pairs in the order the API documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("inputMint", self.input_mint.clone()),
            ("outputMint", self.output_mint.clone()),
            ("amount", self.amount.to_string()),
        ];
        if let Some(taker) = &self.taker {
            pairs.push(("taker", taker.clone()));
        }
        pairs.push(("slippageBps", self.slippage_bps.to_string()));
        pairs.push(("gasless", self.gasless.to_string()));
        pairs
    }
}

/// Response from the Jupiter order API
///
/// Amounts are decimal strings in the smallest unit. A response carrying
/// `errorCode` or `error` is not tradeable even when amounts are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    #[serde(rename = "inputMint", default)]
    pub input_mint: String,
    #[serde(rename = "outputMint", default)]
    pub output_mint: String,
    #[serde(rename = "inAmount", default)]
    pub in_amount: String,
    #[serde(rename = "outAmount", default)]
    pub out_amount: String,
    #[serde(rename = "slippageBps", default)]
    pub slippage_bps: u16,
    #[serde(rename = "priceImpactPct", default, deserialize_with = "lenient_f64")]
    pub price_impact_pct: f64,
    #[serde(rename = "requestId", default)]
    pub request_id: String,
    /// Unsigned transaction, present only when a taker was supplied
    #[serde(default)]
    pub transaction: Option<String>,
    #[serde(rename = "errorCode", default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl OrderResponse {
    /// Input amount as an integer.
    pub fn in_amount_units(&self) -> Option<u64> {
        self.in_amount.parse().ok()
    }

    /// Output amount as an integer.
    pub fn out_amount_units(&self) -> Option<u64> {
        self.out_amount.parse().ok()
    }

    /// Whether this order can be executed.
    pub fn is_tradeable(&self) -> bool {
        self.error_code.is_none()
            && self.error.as_deref().map_or(true, str::is_empty)
            && self.in_amount_units().is_some_and(|amount| amount > 0)
            && self.out_amount_units().is_some_and(|amount| amount > 0)
    }
}

/// The API sends `priceImpactPct` as a string on some versions and a number on others.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Number(n)) => Ok(n),
        Some(NumberOrString::Text(s)) => s.trim().parse().map_err(serde::de::Error::custom),
        None => Ok(0.0),
    }
}
