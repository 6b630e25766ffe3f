use crate::error::{ApiError, ErrorResponse};
use crate::models::Document;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// GET /db handler - Retrieve the bookmark document
///
/// Returns the stored document verbatim, or the default document when
/// nothing has been stored yet.
#[utoipa::path(
    get,
    path = routes::DB,
    responses(
        (status = 200, description = "Stored document, or the default one", body = Document),
        (status = 500, description = "Corrupt store or storage error", body = ErrorResponse)
    ),
    tag = "db"
)]
pub async fn fetch_handler(
    State(state): State<AppState>,
) -> Result<Json<JsonValue>, ApiError> {
    let document = state.store.fetch().await?;

    tracing::info!("Served document from {}", state.store.path().display());
    Ok(Json(document))
}

/// POST /db handler - Replace the bookmark document
///
/// The body is stored as is, fully replacing whatever was there before.
#[utoipa::path(
    post,
    path = routes::DB,
    request_body = Document,
    responses(
        (status = 200, description = "Document stored"),
        (status = 400, description = "Invalid JSON"),
        (status = 413, description = "Request body exceeds the size limit"),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "db"
)]
pub async fn replace_handler(
    State(state): State<AppState>,
    Json(document): Json<JsonValue>,
) -> Result<StatusCode, ApiError> {
    state.store.replace(&document).await?;

    tracing::info!("Stored document at {}", state.store.path().display());
    Ok(StatusCode::OK)
}
