use crate::error::{HealthResponse, UnhealthyResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - reports whether the data directory can be reached
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Data directory reachable", body = HealthResponse),
        (status = 503, description = "Data directory missing or unreadable", body = UnhealthyResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<UnhealthyResponse>)> {
    state.store.health_check().await.map_err(|e| {
        tracing::error!("Health check failed: {}", e);
        let body = UnhealthyResponse {
            status: "unhealthy".to_string(),
            error: format!("Cannot access data directory: {}", e),
        };
        (StatusCode::SERVICE_UNAVAILABLE, Json(body))
    })?;

    tracing::debug!("Data directory reachable");
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, MAX_BODY_BYTES};
    use axum::{body::Body, http::Request, routing::get, Router};
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn setup_test_app(temp_dir: &TempDir) -> (Router, AppState) {
        let config = Config {
            data_dir: temp_dir.path().join("data"),
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
            body_limit_bytes: MAX_BODY_BYTES,
        };
        let state = AppState::new(config);

        let app = Router::new()
            .route(routes::HEALTH, get(health_handler))
            .with_state(state.clone());
        (app, state)
    }

    #[tokio::test]
    async fn test_health_endpoint_healthy() {
        let temp_dir = TempDir::new().unwrap();
        let (app, state) = setup_test_app(&temp_dir);
        state.store.prepare().await.unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.status, "healthy");
    }

    #[tokio::test]
    async fn test_health_endpoint_unhealthy() {
        // Data directory is never created
        let temp_dir = TempDir::new().unwrap();
        let (app, _state) = setup_test_app(&temp_dir);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: UnhealthyResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.status, "unhealthy");
        assert!(response_json.error.contains("Cannot access data directory"));
    }
}
