use utoipa::OpenApi;

/// API documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Login Gateway API",
        version = "0.1.0",
        description = "Demonstration login endpoint"
    ),
    paths(crate::auth::controller::login),
    components(
        schemas(
            crate::auth::model::LoginRequest,
            crate::auth::model::ValidationError,
            crate::auth::model::UserProfile,
            crate::auth::model::LoginData,
            crate::auth::response::LoginResponse
        )
    ),
    tags(
        (name = "authentication", description = "Authentication endpoints")
    )
)]
pub struct ApiDoc;
