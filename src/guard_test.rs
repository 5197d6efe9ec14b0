use super::*;

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

// =============================================================================
// Test doubles
// =============================================================================

/// Navigator that records every requested route.
#[derive(Default)]
struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    fn routes(&self) -> Vec<Route> {
        self.routes.lock().expect("navigator lock").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().expect("navigator lock").push(route);
    }
}

/// Validator that records calls and answers with a fixed status.
#[derive(Default)]
struct StubValidator {
    reject_with: Option<StatusCode>,
    calls: Mutex<Vec<(String, bool)>>,
}

impl StubValidator {
    fn rejecting(status: StatusCode) -> Self {
        Self { reject_with: Some(status), calls: Mutex::new(Vec::new()) }
    }

    fn calls(&self) -> Vec<(String, bool)> {
        self.calls.lock().expect("validator lock").clone()
    }
}

#[async_trait]
impl TokenValidator for StubValidator {
    async fn validate(&self, token: &str, need_admin: bool) -> Result<(), ValidateError> {
        self.calls
            .lock()
            .expect("validator lock")
            .push((token.to_owned(), need_admin));
        match self.reject_with {
            None => Ok(()),
            Some(status) => Err(ValidateError::Status(status)),
        }
    }
}

fn guard_with_token(token: Option<&str>, validator: StubValidator) -> AuthGuard<MemoryCredentialStore, StubValidator> {
    let store = MemoryCredentialStore::new();
    if let Some(token) = token {
        store.set(crate::credentials::TOKEN_KEY, token);
    }
    AuthGuard::new(store, validator)
}

// =============================================================================
// check
// =============================================================================

#[tokio::test]
async fn check_without_token_is_missing_credential() {
    let guard = guard_with_token(None, StubValidator::default());
    let err = guard.check(false).await.expect_err("should fail");
    assert!(matches!(err, GuardError::MissingCredential));
}

#[tokio::test]
async fn check_without_token_makes_no_request() {
    let guard = guard_with_token(None, StubValidator::default());
    let _ = guard.check(true).await;
    assert!(guard.store().token().is_none());
    assert!(guard_calls(&guard).is_empty());
}

#[tokio::test]
async fn check_empty_token_is_missing_credential() {
    let guard = guard_with_token(Some(""), StubValidator::default());
    let err = guard.check(false).await.expect_err("should fail");
    assert!(matches!(err, GuardError::MissingCredential));
    assert!(guard_calls(&guard).is_empty());
}

#[tokio::test]
async fn check_with_valid_token_succeeds() {
    let guard = guard_with_token(Some("tok-1"), StubValidator::default());
    guard.check(false).await.expect("should validate");
    assert_eq!(guard_calls(&guard), vec![("tok-1".to_owned(), false)]);
}

#[tokio::test]
async fn check_passes_require_admin_through() {
    let guard = guard_with_token(Some("tok-admin"), StubValidator::default());
    guard.check(true).await.expect("should validate");
    assert_eq!(guard_calls(&guard), vec![("tok-admin".to_owned(), true)]);
}

#[tokio::test]
async fn check_maps_rejection_to_validation_error() {
    let guard = guard_with_token(Some("tok-1"), StubValidator::rejecting(StatusCode::UNAUTHORIZED));
    let err = guard.check(false).await.expect_err("should fail");
    assert!(matches!(err, GuardError::Validation(ValidateError::Status(_))));
}

// =============================================================================
// enforce
// =============================================================================

#[tokio::test]
async fn enforce_without_token_routes_to_login() {
    let guard = guard_with_token(None, StubValidator::default());
    let navigator = RecordingNavigator::default();

    guard.enforce(&navigator, false).await;

    assert_eq!(navigator.routes(), vec![Route::Login]);
    assert!(guard_calls(&guard).is_empty());
}

#[tokio::test]
async fn enforce_with_valid_token_does_not_navigate() {
    let guard = guard_with_token(Some("tok-1"), StubValidator::default());
    let navigator = RecordingNavigator::default();

    guard.enforce(&navigator, false).await;

    assert!(navigator.routes().is_empty());
    assert_eq!(guard_calls(&guard), vec![("tok-1".to_owned(), false)]);
}

#[tokio::test]
async fn enforce_rejection_routes_to_home() {
    for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN, StatusCode::INTERNAL_SERVER_ERROR] {
        let guard = guard_with_token(Some("tok-1"), StubValidator::rejecting(status));
        let navigator = RecordingNavigator::default();

        guard.enforce(&navigator, false).await;

        assert_eq!(navigator.routes(), vec![Route::Home], "status {status}");
    }
}

#[tokio::test]
async fn enforce_forwards_require_admin() {
    let guard = guard_with_token(Some("tok-1"), StubValidator::default());
    let navigator = RecordingNavigator::default();

    guard.enforce(&navigator, true).await;

    assert_eq!(guard_calls(&guard), vec![("tok-1".to_owned(), true)]);
}

// Child module of `guard`, so the private field is reachable.
fn guard_calls(guard: &AuthGuard<MemoryCredentialStore, StubValidator>) -> Vec<(String, bool)> {
    guard.validator.calls()
}
