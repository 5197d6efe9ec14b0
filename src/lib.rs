//! # authguard
//!
//! Client-side authentication guard for the pharmacy front-end.
//!
//! ARCHITECTURE
//! ============
//! The guard reads a session token from an injected [`CredentialStore`],
//! validates it against the backend user service through a [`TokenValidator`],
//! and either reports the outcome ([`AuthGuard::check`]) or translates it into
//! at most one navigation intent ([`AuthGuard::enforce`]). The two seams exist
//! so embedders can bind real browser storage and a real router while tests
//! stay deterministic and offline.

pub mod config;
pub mod credentials;
pub mod guard;
pub mod route;
pub mod validate;

pub use config::BackendConfig;
pub use credentials::{CredentialStore, MemoryCredentialStore, TOKEN_KEY};
pub use guard::{AuthGuard, GuardError};
pub use route::{Navigator, Route};
pub use validate::{HttpValidator, TokenValidator, ValidateError, ValidateRequest};
