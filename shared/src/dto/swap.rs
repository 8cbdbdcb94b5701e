//! Swap preparation and submission DTOs.

use serde::{Deserialize, Serialize};

/// Ask the backend to turn an accepted quote into an unsigned transaction.
///
/// `amount` is already net of the platform fee; `platformFee` is sent alongside
/// so the backend can attach the fee transfer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrepareSwapRequest {
    pub input_mint: String,
    pub output_mint: String,
    pub amount: u64,
    pub platform_fee: u64,
    pub taker: String,
    pub slippage_bps: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Unsigned transaction produced by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrepareSwapResponse {
    /// Base64-encoded unsigned transaction
    pub transaction: String,
    /// Router-assigned request identifier, echoed back on submit
    pub request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_valid_block_height: Option<u64>,
}

/// Submit a locally signed transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSwapRequest {
    /// Base64-encoded signed transaction
    pub signed_transaction: String,
    pub request_id: String,
}

/// Execution result reported by the backend.
///
/// A failed execution still answers `200 OK`; the failure is in `status`,
/// with `error`/`details` carrying the router's explanation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSwapResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl SubmitSwapResponse {
    /// Whether the router reported a successful execution with a signature.
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
            && self.signature.as_deref().is_some_and(|sig| !sig.is_empty())
    }
}
