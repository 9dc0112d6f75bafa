use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use super::model::{AuthResult, LoginData, ValidationError};
use super::service::LoginError;

pub const VALIDATION_FAILED: &str = "Validation failed";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// JSON envelope shared by every login response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    #[schema(example = "Login successful!")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<LoginData>,
}

impl LoginResponse {
    pub fn validation_failed(errors: Vec<ValidationError>) -> Self {
        Self {
            success: false,
            message: VALIDATION_FAILED.to_string(),
            errors: Some(errors),
            data: None,
        }
    }

    pub fn internal_error() -> Self {
        Self {
            success: false,
            message: INTERNAL_SERVER_ERROR.to_string(),
            errors: None,
            data: None,
        }
    }
}

impl From<AuthResult> for LoginResponse {
    fn from(result: AuthResult) -> Self {
        Self {
            success: result.success,
            message: result.message,
            errors: None,
            data: result.data,
        }
    }
}

/// Where a login request ended up.
#[derive(Debug)]
pub enum LoginOutcome {
    Rejected(Vec<ValidationError>),
    Authenticated(AuthResult),
    Failed(LoginError),
}

impl LoginOutcome {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Rejected(_) => StatusCode::BAD_REQUEST,
            Self::Authenticated(result) => result.status_code,
            Self::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn into_parts(self) -> (StatusCode, LoginResponse) {
        let status = self.status_code();
        let body = match self {
            Self::Rejected(errors) => {
                warn!("Login rejected with {} validation error(s)", errors.len());
                LoginResponse::validation_failed(errors)
            }
            Self::Authenticated(result) => result.into(),
            Self::Failed(err) => {
                // Detail stays in the logs
                error!("Login request failed: {}", err);
                LoginResponse::internal_error()
            }
        };
        (status, body)
    }
}

impl From<Result<AuthResult, LoginError>> for LoginOutcome {
    fn from(result: Result<AuthResult, LoginError>) -> Self {
        match result {
            Ok(result) => Self::Authenticated(result),
            Err(err) => Self::Failed(err),
        }
    }
}

impl IntoResponse for LoginOutcome {
    fn into_response(self) -> Response {
        let (status, body) = self.into_parts();
        (status, Json(body)).into_response()
    }
}

/// Fallback body for a handler panic caught by the panic layer.
pub fn panic_response(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!("Login handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(LoginResponse::internal_error()),
    )
        .into_response()
}
