use utoipa::OpenApi;

use crate::handlers;
use crate::models::{HealthResponse, SearchQuery};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "vuln-http-fixture API",
        version = "1.0.0",
        description = "An intentionally-vulnerable HTTP server used as a security-scanner test fixture"
    ),
    paths(
        handlers::health::health_handler,
        handlers::user::user_handler,
        handlers::search::search_handler
    ),
    components(
        schemas(
            HealthResponse,
            SearchQuery
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "fixture", description = "Deliberately unsafe echo endpoints")
    )
)]
pub struct ApiDoc;
