//! Validation of swap inputs, run before any network call.

use lib_utils::amount::{self, parse_units};

use crate::app::state::AssetDescriptor;
use crate::core::error::SwapError;

/// Parse the typed amount for `asset` into a positive number of smallest units.
pub fn parse_swap_amount(input: &str, asset: &AssetDescriptor) -> Result<u64, SwapError> {
    match parse_units(input, asset.decimals) {
        Ok(0) => Err(SwapError::Validation("Amount must be greater than 0".to_string())),
        Ok(units) => Ok(units),
        Err(amount::Error::Empty) => Err(SwapError::Validation("Enter an amount".to_string())),
        Err(amount::Error::Overflow) => Err(SwapError::Validation("Amount is too large".to_string())),
        Err(amount::Error::Invalid(_)) => Err(SwapError::Validation("Enter a valid amount".to_string())),
    }
}

/// What can be spent of `balance`; native SOL keeps `sol_fee_buffer` back.
pub fn spendable_balance(asset: &AssetDescriptor, balance: u64, sol_fee_buffer: u64) -> u64 {
    if asset.is_native_sol() {
        balance.saturating_sub(sol_fee_buffer)
    } else {
        balance
    }
}

/// `units` must fit in the spendable balance. An unknown balance counts as zero.
pub fn ensure_sufficient_balance(
    asset: &AssetDescriptor,
    units: u64,
    balance: Option<u64>,
    sol_fee_buffer: u64,
) -> Result<(), SwapError> {
    let spendable = spendable_balance(asset, balance.unwrap_or(0), sol_fee_buffer);
    if units > spendable {
        return Err(SwapError::InsufficientBalance {
            symbol: asset.symbol.clone(),
        });
    }
    Ok(())
}
