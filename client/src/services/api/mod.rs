//! # Backend API Client
//!
//! HTTP client for the wallet backend: swap preparation, submission and balances.
//!
//! ## Module Organization
//!
//! - [`client`] - `ApiClient` and its trait implementations
//! - [`swap`] - prepare/submit endpoints
//! - [`wallet`] - balance endpoint

pub mod client;
pub mod swap;
pub mod wallet;

pub use client::ApiClient;
