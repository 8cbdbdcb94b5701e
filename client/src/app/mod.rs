//! # Swap Flow
//!
//! The [`SwapOrchestrator`] and the data it owns.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Host (UI / driver)                       │
//! │   set_amount · select_*_asset · preview · confirm · dismiss  │
//! └──────────────┬─────────────────────────────▲─────────────────┘
//!                │ method calls                │ async_channel
//!                ▼                             │ (SwapEvent)
//! ┌──────────────────────────────────────────────────────────────┐
//! │  SwapOrchestrator                                            │
//! │  - state: RwLock<SwapState>   (phase, pair, amount, quote)   │
//! │  - debouncer: QuoteDebouncer  (one timer + one refresh)      │
//! └──────────────┬───────────────────────────────────────────────┘
//!                │ tokio tasks (Weak handle back)
//!                ▼
//!   tasks::swap::fetch_quote        tasks::swap::submit_and_resolve
//! ```
//!
//! ## Modules
//!
//! - [`state`] - phases, assets, quotes, prepared swaps
//! - [`events`] - `SwapEvent` and transient notices
//! - [`outcome`] - submission outcomes and failure classification
//! - [`debounce`] - quote timers
//! - [`balances`] - balance cache and backend refresher
//! - [`catalog`] - selectable assets

pub mod balances;
pub mod catalog;
pub mod debounce;
pub mod events;
pub mod orchestrator;
pub mod outcome;
pub mod state;
pub(crate) mod tasks;

pub use balances::{ApiBalanceRefresher, BalanceCache};
pub use catalog::AssetCatalog;
pub use events::{Notice, NoticeLevel, SwapEvent};
pub use orchestrator::{SwapDeps, SwapOrchestrator};
pub use outcome::{classify_failure, SwapOutcome};
pub use state::{AssetDescriptor, PreparedSwap, Quote, QuoteId, SwapPhase, SwapState};
