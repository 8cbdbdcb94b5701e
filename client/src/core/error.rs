//! # Common Error Types
//!
//! Consolidated error handling for the swap client.
//!
//! Every error is recovered at the boundary where it occurs. Hosts only see
//! [`SwapError::user_message`] text; the `Display` form carries raw detail and is
//! meant for logs.
//!
//! ## Error Categories
//!
//! - **Validation**: bad amount, missing asset, insufficient balance (before any network call)
//! - **Quote**: routing service unreachable or returned an error-coded quote
//! - **Prepare**: backend could not build the unsigned transaction
//! - **Precondition**: wallet locked or not authenticated (never retried)
//! - **Flow**: operation not allowed in the current phase, or the quote went stale
//!
//! ```rust
//! use swap_client::core::error::SwapError;
//!
//! let err = SwapError::InsufficientBalance { symbol: "SOL".to_string() };
//! assert_eq!(err.user_message(), "Insufficient SOL balance");
//! ```

use crate::app::state::SwapPhase;
use thiserror::Error;

/// Swap client error type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SwapError {
    /// Input validation error (amount format, missing asset).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Amount (plus the network fee buffer for SOL) exceeds the cached balance.
    #[error("Insufficient {symbol} balance")]
    InsufficientBalance { symbol: String },

    /// No usable quote is held.
    #[error("No quote available")]
    NoQuote,

    /// The quote the operation was started with is no longer the active one.
    #[error("Quote is stale")]
    StaleQuote,

    /// Routing service failure.
    #[error("Quote error: {0}")]
    Quote(String),

    /// Backend could not prepare the swap transaction.
    #[error("Prepare error: {0}")]
    Prepare(String),

    /// No key material is loaded.
    #[error("Wallet is not unlocked")]
    WalletLocked,

    /// Wallet error other than a locked session.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// No bearer credential available.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Operation is not valid in the current phase.
    #[error("Cannot {action} while {phase}")]
    InvalidPhase { action: &'static str, phase: SwapPhase },

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(String),
}

impl SwapError {
    /// Message safe to show in a notice.
    pub fn user_message(&self) -> String {
        match self {
            SwapError::Validation(msg) => msg.clone(),
            SwapError::InsufficientBalance { symbol } => format!("Insufficient {} balance", symbol),
            SwapError::NoQuote => "No quote available for this amount".to_string(),
            SwapError::StaleQuote => "The quote changed, please review the new price".to_string(),
            SwapError::Quote(_) => "Network error, unable to fetch quote".to_string(),
            SwapError::Prepare(_) => "Unable to prepare the swap, please try again".to_string(),
            SwapError::WalletLocked => "Wallet not unlocked".to_string(),
            SwapError::Wallet(_) => "Unable to sign the transaction".to_string(),
            SwapError::NotAuthenticated => "Not authenticated, please log in first".to_string(),
            SwapError::InvalidPhase { .. } => "Please wait for the current step to finish".to_string(),
            SwapError::Config(msg) => format!("Configuration error: {}", msg),
        }
    }

    /// Whether retrying the same operation can succeed without user action.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SwapError::Quote(_) | SwapError::Prepare(_) | SwapError::StaleQuote)
    }
}

/// Convenience type alias for `Result<T, SwapError>`.
pub type Result<T> = std::result::Result<T, SwapError>;

impl From<crate::services::wallet::WalletError> for SwapError {
    fn from(err: crate::services::wallet::WalletError) -> Self {
        match err {
            crate::services::wallet::WalletError::Locked => SwapError::WalletLocked,
            other => SwapError::Wallet(other.to_string()),
        }
    }
}

impl From<lib_utils::envs::Error> for SwapError {
    fn from(err: lib_utils::envs::Error) -> Self {
        SwapError::Config(format!("{:?}", err))
    }
}

/// Why a submitted swap failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// Transaction's validity window (recent blockhash) lapsed.
    ExpiredWindow,
    /// Wallet could not cover the swap or the network fee.
    InsufficientBalance,
    /// Anything else.
    Generic,
}

impl FailureReason {
    /// Notice text for this failure class.
    pub fn user_message(&self) -> &'static str {
        match self {
            FailureReason::ExpiredWindow => {
                "Swap expired before it could be processed, please try again"
            }
            FailureReason::InsufficientBalance => {
                "Insufficient balance to complete the swap and pay network fees"
            }
            FailureReason::Generic => "Swap failed, please try again",
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::ExpiredWindow => write!(f, "expired"),
            FailureReason::InsufficientBalance => write!(f, "insufficient_balance"),
            FailureReason::Generic => write!(f, "generic"),
        }
    }
}
