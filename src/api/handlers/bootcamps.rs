//! Handlers for bootcamp endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::bootcamp::{BootcampPageResponse, CreateBootcampRequest, IdResponse};
use crate::api::dto::pagination::BootcampListParams;
use crate::api::extract::ApiJson;
use crate::domain::entities::MemberCollection;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a bootcamp from existing capabilities and reports it.
///
/// # Endpoint
///
/// `POST /api/v1/bootcamp`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Backend Bootcamp",
///   "description": "Server-side development",
///   "launchDate": "2024-01-01",
///   "durationWeeks": 8,
///   "capabilities": ["c1", "c2"]
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "id": "5f0c7a0e-..." }
/// ```
///
/// # Errors
///
/// Returns 400 if the body cannot be parsed, lacks `launchDate` or
/// `capabilities`, or breaks a bootcamp rule.
/// Returns 409 if the name is already taken.
/// Returns 500 if the report cannot be delivered.
pub async fn create_bootcamp_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateBootcampRequest>,
) -> Result<Json<IdResponse>, AppError> {
    payload.validate()?;

    let bootcamp = state
        .bootcamp_service
        .create_bootcamp(payload.try_into()?)
        .await?;

    Ok(Json(IdResponse {
        id: bootcamp.id().to_string(),
    }))
}

/// Lists bootcamps with their capabilities and technologies.
///
/// # Endpoint
///
/// `GET /api/v1/bootcamp?page=0&size=10&sortBy=NAME&order=ASC`
///
/// # Errors
///
/// Returns 400 with `invalid.pagination.page`, `invalid.pagination.size`,
/// `invalid.sort.by` or `invalid.sort.order`.
pub async fn list_bootcamps_handler(
    State(state): State<AppState>,
    Query(params): Query<BootcampListParams>,
) -> Result<Json<BootcampPageResponse>, AppError> {
    let request = params.into_page_request()?;

    let page = state.listing_service.list_bootcamps(request).await?;

    Ok(Json(page.into()))
}

/// Deletes a bootcamp and its capability links.
///
/// # Endpoint
///
/// `DELETE /api/v1/bootcamp/{id}`
///
/// # Errors
///
/// Returns 404 if no bootcamp has this id.
pub async fn delete_bootcamp_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.bootcamp_service.delete_bootcamp(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
