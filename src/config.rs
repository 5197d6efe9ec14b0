//! Backend endpoint configuration loaded from environment.

/// Location of the backend user service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Host (and optional port) of the backend, e.g. `127.0.0.1:8080`.
    /// May also carry an explicit `http://` or `https://` scheme.
    pub base_url: String,
}

impl BackendConfig {
    /// Load from `BACKEND_BASE_URL`.
    /// Returns `None` if the variable is unset or blank (the guard stays
    /// unwired in that case; the embedder decides what to do).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let raw = std::env::var("BACKEND_BASE_URL").ok()?;
        let base_url = raw.trim();
        if base_url.is_empty() {
            return None;
        }
        Some(Self { base_url: base_url.to_owned() })
    }

    /// Build a config from an explicit base.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Full URL of the token validation endpoint.
    ///
    /// The deployed front-end supplies a bare `host:port`, so a missing
    /// scheme defaults to `http://`; a base that already names one is used
    /// verbatim.
    #[must_use]
    pub fn validate_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.starts_with("http://") || base.starts_with("https://") {
            format!("{base}/user/validate")
        } else {
            format!("http://{base}/user/validate")
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
