//! Request extractors that fail with [`AppError`] instead of plain-text rejections.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

use crate::error::AppError;

/// JSON body extractor.
///
/// Behaves like [`Json`], but a body that cannot be parsed (malformed JSON,
/// wrong content type, a field of the wrong type) is answered with a
/// `VALIDATION_ERROR` carrying `invalid.request.body`.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
