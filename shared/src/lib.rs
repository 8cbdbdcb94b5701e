//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the wallet client and the backend API.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::swap`]**: Swap preparation and submission DTOs
//!   - **[`dto::wallet`]**: Wallet balance DTOs
//!   - **[`dto::error`]**: Error body returned by every failing endpoint
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!   - **[`utils::is_valid_address`]**: Check that a string is a base58 Solana address
//!
//! ## Wire Format
//!
//! Swap and wallet DTOs use **camelCase** field names on the wire, matching the
//! backend's routing-service passthrough. Optional fields are omitted when `None`.
//!
//! ## Usage in the Client
//!
//! ```rust,ignore
//! use shared::dto::swap::{SubmitSwapRequest, SubmitSwapResponse};
//!
//! # async fn submit(http: reqwest::Client, signed: String, request_id: String) -> Result<(), reqwest::Error> {
//! let request = SubmitSwapRequest {
//!     signed_transaction: signed,
//!     request_id,
//! };
//!
//! let response: SubmitSwapResponse = http
//!     .post("http://localhost:3001/api/swap/submit")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
