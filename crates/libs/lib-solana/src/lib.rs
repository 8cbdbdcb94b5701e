//! # Solana Library
//!
//! Routing-service integration for the wallet client: swap orders (quotes) and the
//! token list used to build the asset catalog.

pub mod jupiter;
pub mod tokens;

// Re-export commonly used types from root for convenience
pub use jupiter::{JupiterClient, JupiterClientBuilder, OrderRequest, OrderResponse, TokenInfo};
