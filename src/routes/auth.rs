use crate::auth::controller::{self, AuthState};
use axum::{routing::post, Router};

/// Authentication routes for login
pub fn routes(state: AuthState) -> Router {
    Router::new()
        .route("/api/login", post(controller::login))
        .with_state(state)
}
