//! # Client Configuration
//!
//! Configuration loaded from environment variables and validated on startup to
//! fail fast if misconfigured.
//!
//! | Variable | Default |
//! |---|---|
//! | `API_BASE_URL` | `http://127.0.0.1:3001` |
//! | `QUOTE_API_BASE` | `https://lite-api.jup.ag/ultra/v1` |
//! | `HTTP_TIMEOUT_SECS` | `10` |
//! | `SWAP_PLATFORM_FEE_BPS` | `20` |
//! | `SWAP_SLIPPAGE_BPS` | `50` |
//! | `SWAP_MIN_QUOTE_INTERVAL_MS` | `2000` |
//! | `SWAP_QUOTE_REFRESH_SECS` | `300` |
//! | `SWAP_QUOTE_TTL_SECS` | `300` |
//! | `SWAP_SOL_FEE_BUFFER_LAMPORTS` | `5000000` |
//! | `SWAP_GASLESS` | `false` |

use lib_solana::jupiter::DEFAULT_QUOTE_API_BASE;
use lib_utils::envs::{get_env_or, get_env_parse_or};
use std::time::Duration;

use crate::services::api::client::DEFAULT_API_BASE_URL;

/// Swap flow tuning owned by one orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapConfig {
    /// Platform fee taken from the input amount, in basis points
    pub platform_fee_bps: u16,
    pub slippage_bps: u16,
    /// Minimum spacing between quote requests
    pub min_quote_interval: Duration,
    /// Period of the background re-quote
    pub quote_refresh_interval: Duration,
    /// Age after which a quote can no longer be previewed or confirmed
    pub quote_ttl: Duration,
    /// SOL kept back for network fees when the input is native SOL
    pub sol_fee_buffer_lamports: u64,
    pub gasless: bool,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            platform_fee_bps: 20,
            slippage_bps: 50,
            min_quote_interval: Duration::from_millis(2_000),
            quote_refresh_interval: Duration::from_secs(300),
            quote_ttl: Duration::from_secs(300),
            sol_fee_buffer_lamports: 5_000_000,
            gasless: false,
        }
    }
}

impl SwapConfig {
    /// Load the swap settings from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();
        Ok(Self {
            platform_fee_bps: parse_env("SWAP_PLATFORM_FEE_BPS", defaults.platform_fee_bps)?,
            slippage_bps: parse_env("SWAP_SLIPPAGE_BPS", defaults.slippage_bps)?,
            min_quote_interval: Duration::from_millis(parse_env("SWAP_MIN_QUOTE_INTERVAL_MS", 2_000u64)?),
            quote_refresh_interval: Duration::from_secs(parse_env("SWAP_QUOTE_REFRESH_SECS", 300u64)?),
            quote_ttl: Duration::from_secs(parse_env("SWAP_QUOTE_TTL_SECS", 300u64)?),
            sol_fee_buffer_lamports: parse_env("SWAP_SOL_FEE_BUFFER_LAMPORTS", defaults.sol_fee_buffer_lamports)?,
            gasless: parse_env("SWAP_GASLESS", defaults.gasless)?,
        })
    }

    /// Validate values against business rules.
    pub fn validate(&self) -> Result<(), String> {
        if self.platform_fee_bps > 10_000 {
            return Err("SWAP_PLATFORM_FEE_BPS must be at most 10000".to_string());
        }
        if self.slippage_bps == 0 || self.slippage_bps > 10_000 {
            return Err("SWAP_SLIPPAGE_BPS must be between 1 and 10000".to_string());
        }
        if self.quote_refresh_interval.is_zero() {
            return Err("SWAP_QUOTE_REFRESH_SECS must be greater than 0".to_string());
        }
        if self.quote_ttl.is_zero() {
            return Err("SWAP_QUOTE_TTL_SECS must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Full client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Wallet backend base URL
    pub api_base_url: String,
    /// Routing service order API base URL
    pub quote_api_base: String,
    pub http_timeout: Duration,
    pub swap: SwapConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            quote_api_base: DEFAULT_QUOTE_API_BASE.to_string(),
            http_timeout: Duration::from_secs(10),
            swap: SwapConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            api_base_url: get_env_or("API_BASE_URL", DEFAULT_API_BASE_URL),
            quote_api_base: get_env_or("QUOTE_API_BASE", DEFAULT_QUOTE_API_BASE),
            http_timeout: Duration::from_secs(parse_env("HTTP_TIMEOUT_SECS", 10u64)?),
            swap: SwapConfig::from_env()?,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        for (name, url) in [("API_BASE_URL", &self.api_base_url), ("QUOTE_API_BASE", &self.quote_api_base)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(format!("{} must be an http(s) URL", name));
            }
        }
        if self.http_timeout.is_zero() {
            return Err("HTTP_TIMEOUT_SECS must be greater than 0".to_string());
        }
        self.swap.validate()
    }
}

fn parse_env<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, String> {
    get_env_parse_or(name, default).map_err(|_| format!("{} must be a valid value", name))
}
