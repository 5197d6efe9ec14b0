//! Credential storage seam.
//!
//! DESIGN
//! ======
//! The browser keeps the session token in session-scoped storage under a
//! well-known key, and the guard only ever reads it. Making the store an
//! injected capability keeps the guard testable without a browser storage
//! API; [`MemoryCredentialStore`] stands in for it in native embedders and
//! tests.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Storage key the guard reads the session token from.
pub const TOKEN_KEY: &str = "token";

/// Read-only view of session-scoped key/value storage.
pub trait CredentialStore: Send + Sync {
    /// Look up a stored value by key.
    fn get(&self, key: &str) -> Option<String>;

    /// Read the session token. An empty stored value counts as absent.
    fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }
}

/// In-memory session store.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under `key`.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
    }

    /// Remove a stored value, if present.
    pub fn remove(&self, key: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;
