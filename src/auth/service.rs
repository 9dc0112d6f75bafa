use std::time::Duration;

use axum::async_trait;
use thiserror::Error;
use tracing::{error, info};

use super::model::{AuthResult, SanitizedCredentials, UserProfile};

// The single account known to the demo store
pub const DEMO_EMAIL: &str = "test@example.com";
pub const DEMO_PASSWORD: &str = "password123";
const DEMO_USER_ID: u64 = 1;
const DEMO_USER_NAME: &str = "Test User";

#[derive(Error, Debug)]
pub enum VerifierError {
    #[error("Credential backend unavailable: {0}")]
    Unavailable(String),
}

// Service errors
#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Malformed request body: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Credential verification failed: {0}")]
    Verifier(#[from] VerifierError),
}

/// Looks up an account by credentials.
///
/// Returns `Ok(None)` when the pair does not match any account; errors are
/// reserved for a backend that could not answer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserProfile>, VerifierError>;
}

/// Suspension point standing in for network or database latency.
#[async_trait]
pub trait Latency: Send + Sync {
    async fn wait(&self);
}

#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Latency for SimulatedLatency {
    async fn wait(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn wait(&self) {}
}

/// In-memory store holding the demo account.
///
/// Every lookup waits on the latency boundary before comparing, whether or not
/// the credentials match, so response timing does not reveal the outcome.
#[derive(Debug, Clone)]
pub struct StaticCredentialStore<L> {
    latency: L,
}

impl<L: Latency> StaticCredentialStore<L> {
    pub fn new(latency: L) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl<L: Latency> CredentialVerifier for StaticCredentialStore<L> {
    async fn verify(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserProfile>, VerifierError> {
        self.latency.wait().await;

        if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            Ok(Some(UserProfile {
                id: DEMO_USER_ID,
                email: DEMO_EMAIL.to_string(),
                name: DEMO_USER_NAME.to_string(),
            }))
        } else {
            Ok(None)
        }
    }
}

// User login service
pub async fn authenticate(
    verifier: &dyn CredentialVerifier,
    credentials: &SanitizedCredentials,
) -> Result<AuthResult, LoginError> {
    info!("Verifying credentials for email: {}", credentials.email);

    let user = verifier
        .verify(&credentials.email, &credentials.password)
        .await
        .map_err(|e| {
            error!("Credential verification error: {}", e);
            LoginError::Verifier(e)
        })?;

    match user {
        Some(user) => {
            info!("Login successful for user ID: {}", user.id);
            Ok(AuthResult::authenticated(user))
        }
        None => {
            info!("Invalid credentials for email: {}", credentials.email);
            Ok(AuthResult::invalid_credentials())
        }
    }
}
