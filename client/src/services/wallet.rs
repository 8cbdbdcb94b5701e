//! # Wallet Session
//!
//! Holds the in-memory keypair while the wallet is unlocked and signs
//! backend-prepared transactions with it.
//!
//! ## Features
//! - Unlock from a base58 secret or a JSON byte array (Solana CLI format)
//! - Lock (drops the key material)
//! - Sign legacy and versioned transactions in place, preserving any
//!   co-signatures already present
//!
//! The session is replace-only: `unlock` stores a key, `lock` clears it, and
//! signing only ever reads it.

use lib_utils::{b64_decode, b64_encode};
use parking_lot::RwLock;
use solana_sdk::{
    signature::{Keypair, Signature, Signer},
    transaction::VersionedTransaction,
};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::core::service::TransactionSigner;

/// Wallet session errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// No key material loaded
    Locked,
    /// Secret key could not be decoded
    InvalidKeypair(String),
    /// Transaction payload could not be decoded
    InvalidTransaction(String),
    /// Transaction signing error
    SigningError(String),
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletError::Locked => write!(f, "Wallet not unlocked"),
            WalletError::InvalidKeypair(msg) => write!(f, "Invalid keypair: {}", msg),
            WalletError::InvalidTransaction(msg) => write!(f, "Invalid transaction: {}", msg),
            WalletError::SigningError(msg) => write!(f, "Signing error: {}", msg),
        }
    }
}

impl Error for WalletError {}

/// In-memory wallet session.
#[derive(Default)]
pub struct WalletSession {
    keypair: RwLock<Option<Arc<Keypair>>>,
}

impl WalletSession {
    /// Create a locked session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session already unlocked with `keypair`.
    pub fn from_keypair(keypair: Keypair) -> Self {
        Self {
            keypair: RwLock::new(Some(Arc::new(keypair))),
        }
    }

    /// Store `keypair`, replacing any key already loaded.
    pub fn unlock(&self, keypair: Keypair) -> String {
        let pubkey = keypair.pubkey().to_string();
        *self.keypair.write() = Some(Arc::new(keypair));
        tracing::info!(wallet = %pubkey, "Wallet unlocked");
        pubkey
    }

    /// Unlock from a secret key in base58 or as a JSON byte array.
    ///
    /// Accepts the 32-byte secret alone or the 64-byte secret+public form; for
    /// the latter the public half must match the derived key.
    pub fn unlock_from_secret(&self, secret: &str) -> Result<String, WalletError> {
        let keypair = parse_keypair(secret)?;
        Ok(self.unlock(keypair))
    }

    /// Drop the key material.
    pub fn lock(&self) {
        if self.keypair.write().take().is_some() {
            tracing::info!("Wallet locked");
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.keypair.read().is_some()
    }

    fn current(&self) -> Result<Arc<Keypair>, WalletError> {
        self.keypair.read().clone().ok_or(WalletError::Locked)
    }
}

impl TransactionSigner for WalletSession {
    fn public_key(&self) -> Option<String> {
        self.keypair.read().as_ref().map(|kp| kp.pubkey().to_string())
    }

    fn sign_transaction(&self, unsigned_b64: &str) -> Result<String, WalletError> {
        let keypair = self.current()?;
        sign_serialized(&keypair, unsigned_b64)
    }
}

/// Parse a secret key from base58 or a JSON byte array.
pub fn parse_keypair(secret: &str) -> Result<Keypair, WalletError> {
    let secret = secret.trim();
    let bytes: Vec<u8> = if secret.starts_with('[') {
        serde_json::from_str(secret)
            .map_err(|e| WalletError::InvalidKeypair(format!("Invalid JSON format: {}", e)))?
    } else {
        bs58::decode(secret)
            .into_vec()
            .map_err(|e| WalletError::InvalidKeypair(format!("Invalid base58: {}", e)))?
    };

    if bytes.len() != 32 && bytes.len() != 64 {
        return Err(WalletError::InvalidKeypair(format!(
            "Expected 32 or 64 bytes, got {}",
            bytes.len()
        )));
    }

    let mut arr = [0u8; 32];
    arr.copy_from_slice(&bytes[..32]);
    let keypair = Keypair::new_from_array(arr);

    if bytes.len() == 64 && keypair.pubkey().to_bytes()[..] != bytes[32..] {
        return Err(WalletError::InvalidKeypair(
            "Public key does not match secret key".to_string(),
        ));
    }

    Ok(keypair)
}

/// Sign a base64 serialized transaction with `keypair`.
///
/// Legacy transactions decode as [`VersionedTransaction`] too, so one path
/// covers both encodings. The signature goes into the slot matching the
/// keypair's position among the required signers.
pub fn sign_serialized(keypair: &Keypair, unsigned_b64: &str) -> Result<String, WalletError> {
    let bytes = b64_decode(unsigned_b64)
        .map_err(|e| WalletError::InvalidTransaction(e.to_string()))?;
    let mut transaction: VersionedTransaction = bincode::deserialize(&bytes)
        .map_err(|e| WalletError::InvalidTransaction(format!("Failed to deserialize: {}", e)))?;

    let signer = keypair.pubkey();
    let required = transaction.message.header().num_required_signatures as usize;
    let position = transaction
        .message
        .static_account_keys()
        .iter()
        .take(required)
        .position(|key| *key == signer)
        .ok_or_else(|| {
            WalletError::SigningError(format!("{} is not a required signer", signer))
        })?;

    if transaction.signatures.len() < required {
        transaction.signatures.resize(required, Signature::default());
    }
    transaction.signatures[position] = keypair.sign_message(&transaction.message.serialize());

    let signed = bincode::serialize(&transaction)
        .map_err(|e| WalletError::SigningError(format!("Failed to serialize: {}", e)))?;

    tracing::debug!(signer = %signer, "Transaction signed");
    Ok(b64_encode(signed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::message::{Message, VersionedMessage};
    use solana_sdk::pubkey::Pubkey;

    fn unsigned_transfer_b64(payer: &Pubkey) -> String {
        let message = Message::new(&[], Some(payer));
        let transaction = VersionedTransaction {
            signatures: vec![Signature::default(); 1],
            message: VersionedMessage::Legacy(message),
        };
        b64_encode(bincode::serialize(&transaction).unwrap())
    }

    #[test]
    fn test_locked_session_refuses_to_sign() {
        let session = WalletSession::new();
        assert_eq!(session.public_key(), None);
        assert_eq!(session.sign_transaction("AAAA"), Err(WalletError::Locked));
    }

    #[test]
    fn test_sign_fills_signer_slot() {
        let keypair = Keypair::new();
        let pubkey = keypair.pubkey();
        let session = WalletSession::from_keypair(keypair);

        let signed = session.sign_transaction(&unsigned_transfer_b64(&pubkey)).unwrap();
        let transaction: VersionedTransaction =
            bincode::deserialize(&b64_decode(&signed).unwrap()).unwrap();

        assert_ne!(transaction.signatures[0], Signature::default());
        assert!(transaction.signatures[0]
            .verify(pubkey.as_ref(), &transaction.message.serialize()));
    }

    #[test]
    fn test_sign_rejects_foreign_transaction() {
        let session = WalletSession::from_keypair(Keypair::new());
        let other = Keypair::new().pubkey();
        let result = session.sign_transaction(&unsigned_transfer_b64(&other));
        assert!(matches!(result, Err(WalletError::SigningError(_))));
    }

    #[test]
    fn test_sign_rejects_garbage() {
        let session = WalletSession::from_keypair(Keypair::new());
        assert!(matches!(
            session.sign_transaction("not base64!"),
            Err(WalletError::InvalidTransaction(_))
        ));
    }

    #[test]
    fn test_unlock_formats_and_lock() {
        let keypair = Keypair::new();
        let expected = keypair.pubkey().to_string();
        let secret = keypair.to_bytes();

        let session = WalletSession::new();
        let json = serde_json::to_string(&secret.to_vec()).unwrap();
        assert_eq!(session.unlock_from_secret(&json).unwrap(), expected);

        let base58 = bs58::encode(&secret[..32]).into_string();
        assert_eq!(session.unlock_from_secret(&base58).unwrap(), expected);
        assert!(session.is_unlocked());

        session.lock();
        assert!(!session.is_unlocked());
        assert_eq!(session.public_key(), None);
    }

    #[test]
    fn test_parse_keypair_rejects_mismatched_public_half() {
        let mut bytes = Keypair::new().to_bytes().to_vec();
        bytes[40] ^= 0xff;
        let json = serde_json::to_string(&bytes).unwrap();
        assert!(matches!(parse_keypair(&json), Err(WalletError::InvalidKeypair(_))));
        assert!(matches!(parse_keypair("[1,2,3]"), Err(WalletError::InvalidKeypair(_))));
    }
}
