use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::Document;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "markkeeper-sync API",
        version = "1.0.0",
        description = "Sync server persisting a single MarkKeeper bookmark document as a JSON file"
    ),
    paths(
        handlers::health::health_handler,
        handlers::db::fetch_handler,
        handlers::db::replace_handler
    ),
    components(
        schemas(
            Document,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "db", description = "Bookmark document operations")
    )
)]
pub struct ApiDoc;
