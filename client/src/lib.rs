//! # Swap Client - Library Root
//!
//! Swap orchestration for a Solana wallet client: debounced quoting against a
//! routing service, backend-prepared transactions, local signing and
//! submission with classified outcomes.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              swap_client (this crate)                  │
//! ├────────────────────────────────────────────────────────┤
//! │  app        - SwapOrchestrator, state, events          │
//! │  services   - HTTP backend, routing adapter, wallet    │
//! │  core       - SwapError, collaborator traits           │
//! │  config     - ClientConfig / SwapConfig from env       │
//! │  debug      - tracing setup                            │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTP                         │ HTTP
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  Wallet Backend │          │   Routing Service       │
//! │ prepare/submit  │          │   (order / quote)       │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use swap_client::app::{ApiBalanceRefresher, AssetCatalog, BalanceCache, SwapDeps, SwapOrchestrator};
//! use swap_client::config::SwapConfig;
//! use swap_client::services::{ApiClient, AuthSession, WalletSession};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let api = Arc::new(ApiClient::new("http://127.0.0.1:3001", Duration::from_secs(10)));
//! let wallet = Arc::new(WalletSession::new());
//! wallet.unlock_from_secret("<base58 secret>")?;
//! let auth = Arc::new(AuthSession::with_token("<jwt>"));
//! let balances = BalanceCache::new();
//!
//! let deps = SwapDeps {
//!     quotes: Arc::new(lib_solana::JupiterClient::new()?),
//!     executor: api.clone(),
//!     signer: wallet.clone(),
//!     auth: auth.clone(),
//!     balance_refresher: Arc::new(ApiBalanceRefresher::new(api, wallet, auth, balances.clone())),
//!     balances,
//! };
//! let (swap, events) = SwapOrchestrator::with_channel(SwapConfig::default(), deps)?;
//!
//! let catalog = AssetCatalog::new();
//! swap.select_input_asset(catalog.resolve("SOL").cloned().unwrap());
//! swap.select_output_asset(catalog.resolve("USDC").cloned().unwrap());
//! swap.set_amount("1.5");
//!
//! while let Ok(event) = events.recv().await {
//!     println!("{:?}", event);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p swap-client
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{SwapDeps, SwapEvent, SwapOrchestrator, SwapOutcome, SwapPhase};
pub use config::{ClientConfig, SwapConfig};
pub use self::core::{FailureReason, Result, SwapError};
