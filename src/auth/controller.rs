use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::info;

use super::response::{LoginOutcome, LoginResponse};
use super::service::{self, CredentialVerifier, LoginError};
use super::validation::{sanitize_credentials, validate_login_input};
#[allow(unused_imports)]
use super::model::LoginRequest;

/// Shared state for the auth routes.
#[derive(Clone)]
pub struct AuthState {
    pub verifier: Arc<dyn CredentialVerifier>,
}

impl AuthState {
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { verifier }
    }
}

// Controller for user login
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Validation failed", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = LoginResponse),
        (status = 500, description = "Internal server error", body = LoginResponse)
    ),
    tag = "authentication"
)]
pub async fn login(State(state): State<AuthState>, body: Bytes) -> Response {
    info!("Login request received ({} bytes)", body.len());
    handle_login(state.verifier.as_ref(), &body)
        .await
        .into_response()
}

/// Run one login request through validation, authentication and response mapping.
pub async fn handle_login(verifier: &dyn CredentialVerifier, body: &[u8]) -> LoginOutcome {
    let input: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => return LoginOutcome::Failed(LoginError::MalformedJson(e)),
    };

    let errors = validate_login_input(&input);
    if !errors.is_empty() {
        return LoginOutcome::Rejected(errors);
    }

    let credentials = sanitize_credentials(&input);
    service::authenticate(verifier, &credentials).await.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::service::{MockCredentialVerifier, NoLatency, StaticCredentialStore, VerifierError};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_malformed_json_fails() {
        let store = StaticCredentialStore::new(NoLatency);
        let outcome = handle_login(&store, b"{\"email\": ").await;
        assert!(matches!(outcome, LoginOutcome::Failed(LoginError::MalformedJson(_))));
        assert_eq!(outcome.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_validation_runs_before_verifier() {
        let mut verifier = MockCredentialVerifier::new();
        verifier.expect_verify().never();

        let outcome = handle_login(&verifier, br#"{"email":"test@example.com","password":"123"}"#).await;
        match outcome {
            LoginOutcome::Rejected(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "password");
            }
            other => panic!("Expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_email_is_sanitized_before_lookup() {
        let store = StaticCredentialStore::new(NoLatency);
        let outcome = handle_login(&store, br#"{"email":"Test@Example.com","password":"password123"}"#).await;
        assert_eq!(outcome.status_code(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_verifier_error_fails_request() {
        let mut verifier = MockCredentialVerifier::new();
        verifier
            .expect_verify()
            .returning(|_, _| Err(VerifierError::Unavailable("timeout".to_string())));

        let outcome = handle_login(&verifier, br#"{"email":"test@example.com","password":"password123"}"#).await;
        assert!(matches!(outcome, LoginOutcome::Failed(LoginError::Verifier(_))));
    }
}
