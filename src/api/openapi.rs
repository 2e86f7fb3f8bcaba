use utoipa::OpenApi;

use crate::domain::ApiResponse;

/// OpenAPI specification for the API House
#[derive(OpenApi)]
#[openapi(
    info(
        title = "API House",
        version = "1.0.0",
        description = "Every response, success or failure, is wrapped in the same envelope"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::welcome_handler,
        crate::api::handlers::health::health_handler,
        crate::api::handlers::health::docs_handler,
    ),
    components(schemas(ApiResponse)),
    tags(
        (name = "home", description = "Welcome and documentation"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
