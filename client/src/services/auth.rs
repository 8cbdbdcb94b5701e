//! Bearer credential holder.

use parking_lot::RwLock;

use crate::core::service::AuthProvider;

/// JWT of the logged-in user, if any.
#[derive(Default)]
pub struct AuthSession {
    token: RwLock<Option<String>>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.set_token(token);
        session
    }

    /// Store a token; blank tokens log the session out.
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        let token = token.trim();
        *self.token.write() = (!token.is_empty()).then(|| token.to_string());
    }

    pub fn logout(&self) {
        *self.token.write() = None;
    }
}

impl AuthProvider for AuthSession {
    fn bearer_token(&self) -> Option<String> {
        self.token.read().clone()
    }
}
