//! # Token Amounts
//!
//! Exact decimal arithmetic for user-entered token amounts.
//!
//! Amounts travel as decimal strings in the UI and as integers in the token's
//! smallest unit (lamports for SOL) on the wire. Nothing here goes through `f64`:
//! `1.5` SOL is always exactly `1_500_000_000` lamports.
//!
//! ```rust
//! use lib_utils::amount::{parse_units, split_platform_fee};
//!
//! let gross = parse_units("1.5", 9).unwrap();
//! let (fee, net) = split_platform_fee(gross, 20);
//! assert_eq!(fee, 3_000_000);
//! assert_eq!(net, 1_497_000_000);
//! ```

/// Basis points in one whole (100%).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Truncate the fractional part of `input` to at most `decimals` digits.
///
/// Never rounds. The input is not otherwise validated, so a half-typed value
/// such as `"1."` is preserved as the user typed it.
pub fn truncate_decimals(input: &str, decimals: u8) -> String {
    let Some(dot) = input.find('.') else {
        return input.to_string();
    };

    if decimals == 0 {
        return input[..dot].to_string();
    }

    let fraction = &input[dot + 1..];
    let keep = fraction
        .char_indices()
        .nth(decimals as usize)
        .map(|(idx, _)| idx)
        .unwrap_or(fraction.len());

    format!("{}.{}", &input[..dot], &fraction[..keep])
}

/// Parse a decimal string into an integer amount of the smallest unit.
///
/// Extra fractional digits beyond `decimals` are dropped, never rounded up.
pub fn parse_units(input: &str, decimals: u8) -> Result<u64, Error> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::Empty);
    }

    let (whole, fraction) = match input.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (input, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(Error::Invalid(input.to_string()));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::Invalid(input.to_string()));
    }

    let scale = 10u64.checked_pow(decimals as u32).ok_or(Error::Overflow)?;

    let whole_units = if whole.is_empty() {
        0
    } else {
        whole
            .parse::<u64>()
            .map_err(|_| Error::Overflow)?
            .checked_mul(scale)
            .ok_or(Error::Overflow)?
    };

    let mut fraction_units = 0u64;
    for (position, digit) in fraction.bytes().take(decimals as usize).enumerate() {
        let place = 10u64.pow(decimals as u32 - 1 - position as u32);
        fraction_units += u64::from(digit - b'0') * place;
    }

    whole_units.checked_add(fraction_units).ok_or(Error::Overflow)
}

/// Format an integer amount of the smallest unit as a decimal string.
///
/// Trailing fractional zeros are trimmed (`1_500_000_000` with 9 decimals is `"1.5"`).
pub fn format_units(units: u64, decimals: u8) -> String {
    if decimals == 0 {
        return units.to_string();
    }

    let scale = 10u128.pow(decimals as u32);
    let whole = units as u128 / scale;
    let fraction = units as u128 % scale;

    if fraction == 0 {
        return whole.to_string();
    }

    let fraction = format!("{:0width$}", fraction, width = decimals as usize);
    format!("{}.{}", whole, fraction.trim_end_matches('0'))
}

/// Platform fee for a gross amount: `round(gross * fee_bps / 10_000)`.
///
/// Half-way values round up. The result is deterministic for equal inputs.
pub fn platform_fee(gross: u64, fee_bps: u16) -> u64 {
    let scaled = gross as u128 * fee_bps as u128 + (BPS_DENOMINATOR as u128 / 2);
    (scaled / BPS_DENOMINATOR as u128) as u64
}

/// Split a gross amount into `(fee, net)` where `net = gross - fee`.
pub fn split_platform_fee(gross: u64, fee_bps: u16) -> (u64, u64) {
    let fee = platform_fee(gross, fee_bps).min(gross);
    (fee, gross - fee)
}

/// `percent` of `units`, rounded down.
pub fn percent_of(units: u64, percent: u8) -> u64 {
    (units as u128 * percent.min(100) as u128 / 100) as u64
}

/// Lowest output still accepted after slippage, rounded down.
pub fn min_received(out_amount: u64, slippage_bps: u16) -> u64 {
    let keep = BPS_DENOMINATOR.saturating_sub(slippage_bps as u64);
    (out_amount as u128 * keep as u128 / BPS_DENOMINATOR as u128) as u64
}

// region:    --- Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Empty,
    Invalid(String),
    Overflow,
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Empty => write!(fmt, "amount is empty"),
            Error::Invalid(value) => write!(fmt, "'{}' is not a valid amount", value),
            Error::Overflow => write!(fmt, "amount is too large"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
