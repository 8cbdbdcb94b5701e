//! # Core Abstractions
//!
//! Error types and collaborator traits shared by the orchestrator and its services.
//!
//! - **[`error`]**: `SwapError`, `FailureReason` and the crate `Result<T>` alias
//! - **[`service`]**: traits the orchestrator is composed from (quote service,
//!   swap executor, signer, auth, balance refresh)
//!
//! Production implementations live in [`crate::services`]; tests supply fakes.

pub mod error;
pub mod service;

pub use error::{FailureReason, Result, SwapError};
pub use service::{
    AuthProvider, BalanceRefresher, BalanceService, QuoteService, SwapExecutor, TransactionSigner,
};
