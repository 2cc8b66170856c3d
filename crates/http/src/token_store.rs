//! Persisted credential storage.
//!
//! The credential pair lives under fixed key names in client-local storage.
//! The store is an injected capability rather than a global so tests can
//! substitute an in-memory implementation and writes stay serialized.

use std::sync::RwLock;

/// Storage key for the short-lived bearer credential.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key for the longer-lived refresh credential.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Read/write access to the persisted credential pair.
pub trait TokenStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    /// Rotate the access token only; the refresh token stays untouched.
    fn set_access_token(&self, token: &str);
    /// Persist a freshly issued credential pair.
    fn set_tokens(&self, access: &str, refresh: &str);
    /// Destroy the credential pair.
    fn clear(&self);
}

/// In-memory store for native builds and tests. A `RwLock` keeps writes
/// serialized; readers observe the latest committed pair.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    inner: RwLock<Tokens>,
}

#[derive(Debug, Default)]
struct Tokens {
    access: Option<String>,
    refresh: Option<String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(access: &str, refresh: &str) -> Self {
        let store = Self::new();
        store.set_tokens(access, refresh);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.inner.read().expect("token store poisoned").access.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.inner.read().expect("token store poisoned").refresh.clone()
    }

    fn set_access_token(&self, token: &str) {
        self.inner.write().expect("token store poisoned").access = Some(token.to_string());
    }

    fn set_tokens(&self, access: &str, refresh: &str) {
        let mut tokens = self.inner.write().expect("token store poisoned");
        tokens.access = Some(access.to_string());
        tokens.refresh = Some(refresh.to_string());
    }

    fn clear(&self) {
        let mut tokens = self.inner.write().expect("token store poisoned");
        tokens.access = None;
        tokens.refresh = None;
    }
}

/// Browser store backed by `localStorage`. Stateless: every call reads or
/// writes the live storage, so all call sites observe the same pair.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserTokenStore {
    fn access_token(&self) -> Option<String> {
        use gloo::storage::{LocalStorage, Storage};
        LocalStorage::get(ACCESS_TOKEN_KEY).ok()
    }

    fn refresh_token(&self) -> Option<String> {
        use gloo::storage::{LocalStorage, Storage};
        LocalStorage::get(REFRESH_TOKEN_KEY).ok()
    }

    fn set_access_token(&self, token: &str) {
        use gloo::storage::{LocalStorage, Storage};
        if let Err(error) = LocalStorage::set(ACCESS_TOKEN_KEY, token) {
            tracing::warn!(%error, "failed to persist access token");
        }
    }

    fn set_tokens(&self, access: &str, refresh: &str) {
        use gloo::storage::{LocalStorage, Storage};
        if let Err(error) = LocalStorage::set(ACCESS_TOKEN_KEY, access) {
            tracing::warn!(%error, "failed to persist access token");
        }
        if let Err(error) = LocalStorage::set(REFRESH_TOKEN_KEY, refresh) {
            tracing::warn!(%error, "failed to persist refresh token");
        }
    }

    fn clear(&self) {
        use gloo::storage::{LocalStorage, Storage};
        LocalStorage::delete(ACCESS_TOKEN_KEY);
        LocalStorage::delete(REFRESH_TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_rotates_access_token_only() {
        let store = MemoryTokenStore::with_tokens("a1", "r1");
        store.set_access_token("a2");
        assert_eq!(store.access_token().as_deref(), Some("a2"));
        assert_eq!(store.refresh_token().as_deref(), Some("r1"));
    }

    #[test]
    fn clear_destroys_the_pair() {
        let store = MemoryTokenStore::with_tokens("a1", "r1");
        store.clear();
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);
    }
}
