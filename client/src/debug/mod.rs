//! # Logging
//!
//! File-based structured logging for the swap client.
//!
//! ```rust,no_run
//! // Initialize at startup and keep the guard alive
//! let _log_guard = swap_client::debug::logger::init();
//!
//! tracing::info!(quote_id = %"q3", "Quote ready");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `swap_client=info,warn`)
//! - `SWAP_LOG_DIR`: Log directory (default `logs`)
//! - `SWAP_LOG_STDERR`: Also log to stderr (1=on, 0=off)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::{init, LogGuard};
