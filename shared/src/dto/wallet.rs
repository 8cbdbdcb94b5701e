//! Wallet balance DTOs.

use serde::{Deserialize, Serialize};

/// Native and token holdings for one wallet address.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalances {
    pub address: String,
    /// Native SOL balance in lamports
    pub lamports: u64,
    #[serde(default)]
    pub tokens: Vec<TokenBalance>,
}

/// SPL token holding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    pub mint: String,
    /// Raw amount in the token's smallest unit, as a decimal string
    pub amount: String,
    pub decimals: u8,
}

impl TokenBalance {
    /// Raw amount as an integer, `None` if the backend sent garbage.
    pub fn raw_amount(&self) -> Option<u64> {
        self.amount.parse().ok()
    }
}
