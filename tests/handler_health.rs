mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use bootcamp_service::api::handlers::health_handler;
use sqlx::PgPool;

#[sqlx::test]
async fn test_health_endpoint_success(pool: PgPool) {
    common::create_test_bootcamp(&pool, "b1", "Backend", &[]).await;
    let (state, _notifier) = common::create_test_state(pool);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["database"]["bootcamps"], 1);
}

#[sqlx::test]
async fn test_health_endpoint_structure(pool: PgPool) {
    let (state, _notifier) = common::create_test_state(pool);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("database").is_some());
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["checks"]["database"].get("message").is_none());
}
