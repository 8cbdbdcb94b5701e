//! # Services Module
//!
//! Production implementations of the orchestrator's collaborators.
//!
//! ```text
//! services/
//! ├── api/            - Backend HTTP client (prepare, submit, balances)
//! ├── auth.rs         - Bearer credential holder
//! ├── quote.rs        - Routing service adapter over lib-solana
//! ├── wallet.rs       - In-memory keypair session and transaction signing
//! └── notifications.rs - Push notifications fan-out (tokio broadcast)
//! ```
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    SwapOrchestrator                      │
//! │                                                          │
//! │  QuoteService   SwapExecutor   TransactionSigner  Auth   │
//! └──────┬───────────────┬───────────────┬──────────────┬────┘
//!        │               │               │              │
//!        ▼               ▼               ▼              ▼
//!  JupiterClient     ApiClient      WalletSession   AuthSession
//!   (HTTP, order)  (HTTP, backend)   (local key)    (JWT)
//! ```

pub mod api;
pub mod auth;
pub mod notifications;
pub mod quote;
pub mod wallet;

pub use api::ApiClient;
pub use auth::AuthSession;
pub use notifications::{NotificationHub, Subscription, WalletNotification};
pub use wallet::{WalletError, WalletSession};
