//! # Utilities Library
//!
//! Shared utility functions for token amount arithmetic, base64 encoding and environment variables.

pub mod amount;
pub mod b64;
pub mod envs;

// Re-export commonly used functions
pub use amount::{format_units, min_received, parse_units, percent_of, platform_fee, split_platform_fee, truncate_decimals};
pub use b64::{b64_decode, b64_encode};
pub use envs::{get_env, get_env_or, get_env_parse, get_env_parse_or};
