//! Pre-navigation authentication guard.
//!
//! DESIGN
//! ======
//! [`AuthGuard::check`] returns the outcome so callers can gate rendering on
//! it. [`AuthGuard::enforce`] layers the middleware policy on top: translate
//! the outcome into at most one navigation and absorb the error, so the
//! caller cannot distinguish an invalid token from a network outage.

use crate::config::BackendConfig;
use crate::credentials::{CredentialStore, MemoryCredentialStore};
use crate::route::{Navigator, Route};
use crate::validate::{HttpValidator, TokenValidator, ValidateError};

/// Error returned by [`AuthGuard::check`].
#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    /// No session token in the credential store; no request was made.
    #[error("no session token stored")]
    MissingCredential,
    /// The validation request failed, in transport or with a non-success
    /// status.
    #[error("token validation failed: {0}")]
    Validation(#[from] ValidateError),
}

/// The guard itself: a credential store plus a validator.
#[derive(Debug)]
pub struct AuthGuard<S, V> {
    store: S,
    validator: V,
}

impl AuthGuard<MemoryCredentialStore, HttpValidator> {
    /// Wire a guard from `BACKEND_BASE_URL` with a fresh in-memory store.
    /// Returns `None` when the backend location is not configured.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let config = BackendConfig::from_env()?;
        Some(Self::new(MemoryCredentialStore::new(), HttpValidator::new(&config)))
    }
}

impl<S: CredentialStore, V: TokenValidator> AuthGuard<S, V> {
    pub fn new(store: S, validator: V) -> Self {
        Self { store, validator }
    }

    /// The injected credential store, for embedders that also write to it.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Check the stored session token against the backend.
    ///
    /// # Errors
    ///
    /// [`GuardError::MissingCredential`] when no token is stored (no request
    /// is made); [`GuardError::Validation`] when the backend rejects the
    /// token or the request fails in transport.
    pub async fn check(&self, require_admin: bool) -> Result<(), GuardError> {
        let token = self.store.token().ok_or(GuardError::MissingCredential)?;
        self.validator.validate(&token, require_admin).await?;
        Ok(())
    }

    /// Run the check and translate the outcome into navigation.
    ///
    /// Missing token routes to the login page, any validation failure routes
    /// to the home fallback, and a validated token causes no navigation at
    /// all. Failures are logged, never returned.
    pub async fn enforce(&self, navigator: &impl Navigator, require_admin: bool) {
        match self.check(require_admin).await {
            Ok(()) => {
                tracing::debug!(require_admin, "session token validated");
            }
            Err(GuardError::MissingCredential) => {
                tracing::debug!("no session token, routing to login");
                navigator.navigate(Route::Login);
            }
            Err(GuardError::Validation(e)) => {
                tracing::error!(error = %e, "token validation failed");
                navigator.navigate(Route::Home);
            }
        }
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
