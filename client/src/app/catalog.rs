//! # Asset Catalog
//!
//! Assets the user can pick from. SOL, USDC and USDT are always present; the
//! routing service's token list can add more.

use lib_solana::tokens::{SOL_DECIMALS, SOL_MINT, USDC_DECIMALS, USDC_MINT, USDT_DECIMALS, USDT_MINT};
use lib_solana::TokenInfo;
use std::collections::HashMap;

use crate::app::state::AssetDescriptor;

/// Lookup of assets by mint, in insertion order.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    assets: Vec<AssetDescriptor>,
    by_mint: HashMap<String, usize>,
}

impl Default for AssetCatalog {
    fn default() -> Self {
        let mut catalog = Self {
            assets: Vec::new(),
            by_mint: HashMap::new(),
        };
        catalog.insert(AssetDescriptor::new(SOL_MINT, "SOL", SOL_DECIMALS));
        catalog.insert(AssetDescriptor::new(USDC_MINT, "USDC", USDC_DECIMALS));
        catalog.insert(AssetDescriptor::new(USDT_MINT, "USDT", USDT_DECIMALS));
        catalog
    }
}

impl AssetCatalog {
    /// Catalog with the built-in assets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset; returns `false` if the mint was already known.
    pub fn insert(&mut self, asset: AssetDescriptor) -> bool {
        if self.by_mint.contains_key(&asset.mint) {
            return false;
        }
        self.by_mint.insert(asset.mint.clone(), self.assets.len());
        self.assets.push(asset);
        true
    }

    /// Add every unknown token from a routing service token list.
    ///
    /// Built-in entries keep their symbol and decimals. Returns how many were added.
    pub fn extend_from_token_list(&mut self, tokens: &[TokenInfo]) -> usize {
        tokens
            .iter()
            .filter(|token| !token.symbol.trim().is_empty())
            .filter(|token| shared::is_valid_address(&token.address))
            .map(|token| AssetDescriptor::new(&token.address, token.symbol.trim(), token.decimals))
            .map(|asset| self.insert(asset))
            .filter(|added| *added)
            .count()
    }

    pub fn get(&self, mint: &str) -> Option<&AssetDescriptor> {
        self.by_mint.get(mint).map(|&idx| &self.assets[idx])
    }

    /// First asset whose symbol matches, ignoring case.
    pub fn find_symbol(&self, symbol: &str) -> Option<&AssetDescriptor> {
        self.assets
            .iter()
            .find(|asset| asset.symbol.eq_ignore_ascii_case(symbol.trim()))
    }

    /// Resolve a mint address or symbol.
    pub fn resolve(&self, mint_or_symbol: &str) -> Option<&AssetDescriptor> {
        self.get(mint_or_symbol.trim())
            .or_else(|| self.find_symbol(mint_or_symbol))
    }

    pub fn all(&self) -> &[AssetDescriptor] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
