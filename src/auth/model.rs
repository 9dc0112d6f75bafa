use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body accepted by `POST /api/login`.
///
/// Only used for the OpenAPI document; the handler reads the body as raw JSON
/// so that malformed shapes can be reported as validation errors.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "test@example.com")]
    pub email: String,
    #[schema(example = "password123")]
    pub password: String,
}

/// Credentials after validation: email trimmed and lowercased, password untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationError {
    #[schema(example = "email")]
    pub field: String,
    #[schema(example = "Email is required")]
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub id: u64,
    #[schema(example = "test@example.com")]
    pub email: String,
    #[schema(example = "Test User")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoginData {
    pub user: UserProfile,
}

// Outcome of a single authentication attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    pub success: bool,
    pub message: String,
    pub status_code: StatusCode,
    pub data: Option<LoginData>,
}

impl AuthResult {
    pub fn authenticated(user: UserProfile) -> Self {
        Self {
            success: true,
            message: "Login successful!".to_string(),
            status_code: StatusCode::OK,
            data: Some(LoginData { user }),
        }
    }

    pub fn invalid_credentials() -> Self {
        Self {
            success: false,
            message: "Invalid credentials.".to_string(),
            status_code: StatusCode::UNAUTHORIZED,
            data: None,
        }
    }
}
