//! # Balance Cache
//!
//! Last known holdings of the active wallet, keyed by mint, in smallest units.
//! The cache is never adjusted optimistically: after a swap it is reloaded
//! from the backend through [`ApiBalanceRefresher`].

use lib_solana::tokens::SOL_MINT;
use parking_lot::RwLock;
use shared::WalletBalances;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::service::{AuthProvider, BalanceRefresher, BalanceService, TransactionSigner};

/// Shared balance lookup. Clones see the same data.
#[derive(Debug, Clone, Default)]
pub struct BalanceCache {
    inner: Arc<RwLock<HashMap<String, u64>>>,
}

impl BalanceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance of `mint`, `None` if never loaded.
    pub fn get(&self, mint: &str) -> Option<u64> {
        self.inner.read().get(mint).copied()
    }

    pub fn set(&self, mint: impl Into<String>, units: u64) {
        self.inner.write().insert(mint.into(), units);
    }

    /// Replace everything with a fresh backend snapshot.
    pub fn replace_all(&self, balances: &WalletBalances) {
        let mut map = HashMap::with_capacity(balances.tokens.len() + 1);
        map.insert(SOL_MINT.to_string(), balances.lamports);
        for token in &balances.tokens {
            match token.raw_amount() {
                Some(units) => {
                    map.insert(token.mint.clone(), units);
                }
                None => warn!(mint = %token.mint, amount = %token.amount, "Skipping unparseable token balance"),
            }
        }
        *self.inner.write() = map;
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }
}

/// Reloads the [`BalanceCache`] from the backend balances endpoint.
pub struct ApiBalanceRefresher {
    service: Arc<dyn BalanceService>,
    signer: Arc<dyn TransactionSigner>,
    auth: Arc<dyn AuthProvider>,
    cache: BalanceCache,
}

impl ApiBalanceRefresher {
    pub fn new(
        service: Arc<dyn BalanceService>,
        signer: Arc<dyn TransactionSigner>,
        auth: Arc<dyn AuthProvider>,
        cache: BalanceCache,
    ) -> Self {
        Self {
            service,
            signer,
            auth,
            cache,
        }
    }

    /// Reload now and wait for the result.
    pub async fn refresh_now(&self) -> Result<(), String> {
        reload(
            self.service.clone(),
            self.signer.clone(),
            self.auth.clone(),
            self.cache.clone(),
        )
        .await
    }
}

impl BalanceRefresher for ApiBalanceRefresher {
    /// Spawns the reload; must be called inside a tokio runtime.
    fn refresh(&self) {
        let service = self.service.clone();
        let signer = self.signer.clone();
        let auth = self.auth.clone();
        let cache = self.cache.clone();
        tokio::spawn(async move {
            if let Err(e) = reload(service, signer, auth, cache).await {
                warn!(error = %e, "Balance refresh failed");
            }
        });
    }
}

async fn reload(
    service: Arc<dyn BalanceService>,
    signer: Arc<dyn TransactionSigner>,
    auth: Arc<dyn AuthProvider>,
    cache: BalanceCache,
) -> Result<(), String> {
    let address = signer.public_key().ok_or("Wallet not unlocked")?;
    let token = auth.bearer_token().ok_or("Not authenticated")?;
    let balances = service.get_balances(&address, &token).await?;
    debug!(
        address = %balances.address,
        lamports = balances.lamports,
        tokens = balances.tokens.len(),
        "Balances reloaded"
    );
    cache.replace_all(&balances);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::wallet::WalletError;
    use async_trait::async_trait;
    use shared::TokenBalance;

    struct FixedBalances;

    #[async_trait]
    impl BalanceService for FixedBalances {
        async fn get_balances(&self, address: &str, _jwt: &str) -> Result<WalletBalances, String> {
            Ok(WalletBalances {
                address: address.to_string(),
                lamports: 2_000_000_000,
                tokens: vec![TokenBalance {
                    mint: "mint-a".into(),
                    amount: "42".into(),
                    decimals: 6,
                }],
            })
        }
    }

    struct Key(Option<&'static str>);

    impl TransactionSigner for Key {
        fn public_key(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
        fn sign_transaction(&self, _unsigned: &str) -> Result<String, WalletError> {
            Err(WalletError::Locked)
        }
    }

    struct Token;

    impl AuthProvider for Token {
        fn bearer_token(&self) -> Option<String> {
            Some("jwt".into())
        }
    }

    #[test]
    fn test_replace_all_drops_old_entries() {
        let cache = BalanceCache::new();
        cache.set("stale", 1);
        cache.replace_all(&WalletBalances {
            address: "a".into(),
            lamports: 5,
            tokens: vec![TokenBalance { mint: "bad".into(), amount: "x".into(), decimals: 0 }],
        });
        assert_eq!(cache.get(SOL_MINT), Some(5));
        assert_eq!(cache.get("stale"), None);
        assert_eq!(cache.get("bad"), None);
    }

    #[tokio::test]
    async fn test_refresh_now_fills_cache() {
        let cache = BalanceCache::new();
        let refresher = ApiBalanceRefresher::new(
            Arc::new(FixedBalances),
            Arc::new(Key(Some("wallet"))),
            Arc::new(Token),
            cache.clone(),
        );
        refresher.refresh_now().await.unwrap();
        assert_eq!(cache.get(SOL_MINT), Some(2_000_000_000));
        assert_eq!(cache.get("mint-a"), Some(42));
    }

    #[tokio::test]
    async fn test_refresh_requires_unlocked_wallet() {
        let refresher = ApiBalanceRefresher::new(
            Arc::new(FixedBalances),
            Arc::new(Key(None)),
            Arc::new(Token),
            BalanceCache::new(),
        );
        assert!(refresher.refresh_now().await.is_err());
    }
}
