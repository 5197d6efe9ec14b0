//! Navigation intents and the router seam.

use std::fmt;

/// Closed set of destinations the guard can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Unauthenticated landing page, `"/"`.
    Login,
    /// Authenticated fallback page, `"/home"`.
    Home,
}

impl Route {
    /// Literal path the router should navigate to.
    #[must_use]
    pub fn as_path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Home => "/home",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Router binding invoked when the guard decides a redirect is needed.
///
/// Implementations adapt whatever routing layer the embedder uses; the guard
/// itself only ever emits one of the [`Route`] variants.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

#[cfg(test)]
#[path = "route_test.rs"]
mod tests;
