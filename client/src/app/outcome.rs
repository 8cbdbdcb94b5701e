//! # Swap Outcomes
//!
//! Terminal result of a confirmed submission and classification of failures.

use shared::SubmitSwapResponse;

use crate::core::error::FailureReason;

const EXPIRED_MARKERS: [&str; 4] = [
    "expired",
    "took too long",
    "blockhash not found",
    "block height exceeded",
];

const INSUFFICIENT_MARKERS: [&str; 2] = ["insufficient lamports", "insufficient funds"];

/// Result of one confirmed submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    Succeeded {
        signature: String,
    },
    Failed {
        reason: FailureReason,
        /// User-facing message for `reason`
        message: String,
        /// Present when the transaction landed but failed on chain
        signature: Option<String>,
    },
}

impl SwapOutcome {
    pub fn failed(reason: FailureReason, signature: Option<String>) -> Self {
        SwapOutcome::Failed {
            reason,
            message: reason.user_message().to_string(),
            signature,
        }
    }

    /// Build the outcome for a backend submit response.
    pub fn from_response(response: &SubmitSwapResponse) -> Self {
        if response.is_success() {
            return SwapOutcome::Succeeded {
                signature: response.signature.clone().unwrap_or_default(),
            };
        }

        let text = [response.error.as_deref(), response.details.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        let signature = response.signature.clone().filter(|sig| !sig.is_empty());
        SwapOutcome::failed(classify_failure(&text), signature)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SwapOutcome::Succeeded { .. })
    }

    pub fn signature(&self) -> Option<&str> {
        match self {
            SwapOutcome::Succeeded { signature } => Some(signature),
            SwapOutcome::Failed { signature, .. } => signature.as_deref(),
        }
    }

    /// One-line summary suitable for a notice.
    pub fn summary(&self) -> String {
        match self {
            SwapOutcome::Succeeded { signature } => format!("Swap completed: {}", signature),
            SwapOutcome::Failed { message, .. } => message.clone(),
        }
    }
}

/// Classify a failure from the router's error text (case-insensitive).
///
/// Expiry markers win over balance markers.
pub fn classify_failure(text: &str) -> FailureReason {
    let text = text.to_lowercase();
    if EXPIRED_MARKERS.iter().any(|marker| text.contains(marker)) {
        FailureReason::ExpiredWindow
    } else if INSUFFICIENT_MARKERS.iter().any(|marker| text.contains(marker)) {
        FailureReason::InsufficientBalance
    } else {
        FailureReason::Generic
    }
}
