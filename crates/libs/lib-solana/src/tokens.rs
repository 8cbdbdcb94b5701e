//! # Well-Known Tokens
//!
//! Mint addresses and decimals for the assets every wallet ships with.

/// Wrapped SOL mint; the routing service treats it as native SOL.
pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";
pub const SOL_DECIMALS: u8 = 9;

pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
pub const USDC_DECIMALS: u8 = 6;

pub const USDT_MINT: &str = "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB";
pub const USDT_DECIMALS: u8 = 6;

/// Whether `mint` is native SOL.
pub fn is_native_sol(mint: &str) -> bool {
    mint == SOL_MINT
}
