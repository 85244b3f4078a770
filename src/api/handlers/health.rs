//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{DatabaseCheck, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Database reachable
/// - **503 Service Unavailable**: Database unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "bootcamps": 3 }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = match state.listing_service.count_bootcamps().await {
        Ok(total) => DatabaseCheck::connected(total),
        Err(e) => {
            tracing::warn!(error = %e, "health check: database unreachable");
            DatabaseCheck::failed(e)
        }
    };

    let response = HealthResponse::from_checks(HealthChecks { database });

    if response.is_healthy() {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::MockReportNotifier;
    use crate::domain::repositories::MockBootcampRepository;
    use crate::error::AppError;
    use axum::{Router, routing::get};
    use axum_test::TestServer;
    use serde_json::{Value, json};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_health_degraded_when_database_fails() {
        let mut repo = MockBootcampRepository::new();
        repo.expect_count_bootcamps()
            .returning(|| Err(AppError::internal("database.error", json!({}))));

        let state = AppState::new(Arc::new(repo), Arc::new(MockReportNotifier::new()));
        let app = Router::new()
            .route("/health", get(health_handler))
            .with_state(state);
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let json = response.json::<Value>();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["checks"]["database"]["status"], "error");
        assert_eq!(
            json["checks"]["database"]["message"],
            "Database error: database.error"
        );
    }
}
