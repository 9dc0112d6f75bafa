pub mod api_doc;
pub mod auth;
pub mod config;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::auth::controller::AuthState;
use crate::auth::response::panic_response;
use crate::auth::service::{CredentialVerifier, SimulatedLatency, StaticCredentialStore};
use crate::config::AppConfig;

/// Build the demo credential store with the configured lookup latency.
pub fn demo_verifier(config: &AppConfig) -> Arc<dyn CredentialVerifier> {
    Arc::new(StaticCredentialStore::new(SimulatedLatency::new(
        config.login_delay,
    )))
}

/// Assemble the HTTP application around a credential verifier.
pub fn app(config: &AppConfig, verifier: Arc<dyn CredentialVerifier>) -> Router {
    let mut router = Router::new().merge(routes::auth::routes(AuthState::new(verifier)));

    if config.api_docs {
        router = router
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
