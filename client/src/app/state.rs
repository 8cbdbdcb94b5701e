//! # Swap State
//!
//! Data held by one [`SwapOrchestrator`](crate::app::SwapOrchestrator): the
//! phase, the selected pair, the amount being typed, the active quote and the
//! prepared transaction.

use lib_solana::tokens::is_native_sol;
use lib_utils::amount::{format_units, min_received};
use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

use crate::app::outcome::SwapOutcome;

/// Where the swap flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwapPhase {
    #[default]
    Idle,
    Quoting,
    QuoteReady,
    Previewing,
    Preparing,
    ReadyToConfirm,
    Confirming,
    Succeeded,
    Failed,
}

impl SwapPhase {
    /// A network step of the execution path is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, SwapPhase::Previewing | SwapPhase::Preparing | SwapPhase::Confirming)
    }
}

impl fmt::Display for SwapPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SwapPhase::Idle => "idle",
            SwapPhase::Quoting => "quoting",
            SwapPhase::QuoteReady => "quote ready",
            SwapPhase::Previewing => "previewing",
            SwapPhase::Preparing => "preparing",
            SwapPhase::ReadyToConfirm => "ready to confirm",
            SwapPhase::Confirming => "confirming",
            SwapPhase::Succeeded => "succeeded",
            SwapPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// A tradeable asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetDescriptor {
    pub mint: String,
    pub symbol: String,
    pub decimals: u8,
}

impl AssetDescriptor {
    pub fn new(mint: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            mint: mint.into(),
            symbol: symbol.into(),
            decimals,
        }
    }

    pub fn is_native_sol(&self) -> bool {
        is_native_sol(&self.mint)
    }

    /// Display an amount of this asset given in smallest units.
    pub fn format(&self, units: u64) -> String {
        format_units(units, self.decimals)
    }
}

/// Orchestrator-assigned quote identifier; later quotes have larger ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuoteId(pub u64);

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// A priced swap. Never mutated; a new quote supersedes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub id: QuoteId,
    pub input_mint: String,
    pub output_mint: String,
    /// What the user typed, in smallest units
    pub gross_amount: u64,
    /// Platform fee taken out of `gross_amount`
    pub platform_fee: u64,
    /// Net amount routed (`gross_amount - platform_fee`)
    pub in_amount: u64,
    pub out_amount: u64,
    pub slippage_bps: u16,
    pub price_impact_pct: f64,
    /// Router request id, carried into preparation
    pub request_id: String,
    pub fetched_at: Instant,
}

impl Quote {
    pub fn age(&self) -> Duration {
        self.fetched_at.elapsed()
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() >= ttl
    }

    /// Lowest output still accepted after slippage.
    pub fn min_received(&self) -> u64 {
        min_received(self.out_amount, self.slippage_bps)
    }

    pub fn matches_pair(&self, input_mint: &str, output_mint: &str) -> bool {
        self.input_mint == input_mint && self.output_mint == output_mint
    }
}

/// Unsigned transaction built for one quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSwap {
    pub quote_id: QuoteId,
    pub request_id: String,
    /// Base64 unsigned transaction
    pub transaction: String,
    pub platform_fee: u64,
    pub last_valid_block_height: Option<u64>,
}

/// Everything the orchestrator tracks.
#[derive(Debug, Clone, Default)]
pub struct SwapState {
    pub phase: SwapPhase,
    pub input_asset: Option<AssetDescriptor>,
    pub output_asset: Option<AssetDescriptor>,
    /// Amount as typed, already truncated to the input asset's decimals
    pub amount: String,
    pub quote: Option<Quote>,
    pub prepared: Option<PreparedSwap>,
    pub last_outcome: Option<SwapOutcome>,
    /// Results view open; outcomes go to notices when it is closed
    pub results_visible: bool,
    /// Bumped on every input change; results of older fetches are dropped
    pub(crate) epoch: u64,
    pub(crate) next_quote_id: u64,
}

impl SwapState {
    pub(crate) fn assign_quote_id(&mut self) -> QuoteId {
        self.next_quote_id += 1;
        QuoteId(self.next_quote_id)
    }

    /// Mints of the selected pair, if both sides are chosen.
    pub fn pair(&self) -> Option<(&AssetDescriptor, &AssetDescriptor)> {
        Some((self.input_asset.as_ref()?, self.output_asset.as_ref()?))
    }
}
