#![cfg(feature = "std")]

//! Bearer token handling. Only gates whether the client is authenticated;
//! the token is threaded explicitly into every service call rather than
//! read from ambient process-wide storage.

use std::sync::Mutex;

/// Opaque bearer token for the game service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Persistence seam for the session token.
pub trait TokenStore: Send + Sync {
    fn token(&self) -> Option<AuthToken>;
    fn store(&self, token: AuthToken);
    fn clear(&self);
}

/// Process-local token store.
#[derive(Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<AuthToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<AuthToken> {
        self.slot.lock().unwrap().clone()
    }

    fn store(&self, token: AuthToken) {
        *self.slot.lock().unwrap() = Some(token);
    }

    fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }
}
