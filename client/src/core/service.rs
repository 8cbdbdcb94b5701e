//! # Service Traits
//!
//! Collaborators the orchestrator is composed from. Each seam is a trait so the
//! HTTP implementations can be swapped for in-memory fakes in tests.

use async_trait::async_trait;
use lib_solana::jupiter::{OrderRequest, OrderResponse};
use shared::{PrepareSwapRequest, PrepareSwapResponse, SubmitSwapRequest, SubmitSwapResponse, WalletBalances};

use crate::services::wallet::WalletError;

/// Routing service that prices a swap.
#[async_trait]
pub trait QuoteService: Send + Sync {
    /// Request an order for an exact input amount.
    ///
    /// Transport failures are `Err`; error-coded orders come back as `Ok` and
    /// are rejected by the caller.
    async fn fetch_order(&self, request: &OrderRequest) -> Result<OrderResponse, String>;
}

/// Backend that builds and relays swap transactions.
#[async_trait]
pub trait SwapExecutor: Send + Sync {
    /// Build the unsigned transaction for a quoted swap.
    async fn prepare_swap(
        &self,
        request: &PrepareSwapRequest,
        jwt_token: &str,
    ) -> Result<PrepareSwapResponse, String>;

    /// Relay a signed transaction and wait for its result.
    async fn submit_swap(
        &self,
        request: &SubmitSwapRequest,
        jwt_token: &str,
    ) -> Result<SubmitSwapResponse, String>;
}

/// Signing capability of an unlocked wallet.
pub trait TransactionSigner: Send + Sync {
    /// Base58 address of the signing key, `None` while locked.
    fn public_key(&self) -> Option<String>;

    /// Sign a base64 serialized transaction and return it re-encoded.
    fn sign_transaction(&self, unsigned_b64: &str) -> Result<String, WalletError>;
}

/// Source of the bearer credential for backend calls.
pub trait AuthProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Fire-and-forget balance reload.
pub trait BalanceRefresher: Send + Sync {
    fn refresh(&self);
}

/// Backend balance lookup.
#[async_trait]
pub trait BalanceService: Send + Sync {
    async fn get_balances(&self, address: &str, jwt_token: &str) -> Result<WalletBalances, String>;
}
