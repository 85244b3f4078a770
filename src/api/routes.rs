//! API route configuration.

use crate::api::handlers::{
    create_bootcamp_handler, delete_bootcamp_handler, list_bootcamps_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// Versioned API routes, nested under `/api/v1`.
///
/// # Endpoints
///
/// - `POST   /bootcamp`       - Create a bootcamp and report it
/// - `GET    /bootcamp`       - List bootcamps (paginated, sortable)
/// - `DELETE /bootcamp/{id}`  - Delete a bootcamp and its capability links
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/bootcamp",
            get(list_bootcamps_handler).post(create_bootcamp_handler),
        )
        .route("/bootcamp/{id}", delete(delete_bootcamp_handler))
}
