//! # Shared Utility Functions
//!
//! Address helpers used by the wallet client when logging and when building
//! notices. Solana addresses are base58 (ASCII), so byte offsets are character
//! offsets.
//!
//! ```rust
//! use shared::utils::{is_valid_address, truncate_address};
//!
//! let mint = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
//! assert!(is_valid_address(mint));
//! assert_eq!(truncate_address(mint), "EPjF...Dt1v");
//! ```

/// Keep the first `head` and last `tail` characters of `address`, joined by `...`.
///
/// Addresses too short to shorten, and non-ASCII input, come back unchanged.
pub fn format_address(address: &str, head: usize, tail: usize) -> String {
    if !address.is_ascii() || address.len() <= head + tail {
        return address.to_string();
    }
    format!("{}...{}", &address[..head], &address[address.len() - tail..])
}

/// [`format_address`] with four characters on each side.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

/// Whether `address` is a base58-encoded 32-byte public key.
pub fn is_valid_address(address: &str) -> bool {
    bs58::decode(address)
        .into_vec()
        .is_ok_and(|bytes| bytes.len() == 32)
}
