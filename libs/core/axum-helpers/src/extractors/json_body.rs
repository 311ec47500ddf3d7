//! JSON body extractor with structured rejections.

use crate::errors::{AppError, ErrorCode};
use axum::extract::{FromRequest, Json, Request, rejection::JsonRejection};
use serde::de::DeserializeOwned;

/// JSON extractor whose rejections render as `ErrorResponse` with status 400.
///
/// Syntax errors, type mismatches, and custom deserializer errors (e.g. an
/// unknown enum label) all surface the serde message in `message`.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create(JsonBody(payload): JsonBody<CreateTask>) -> String {
///     format!("Creating: {}", payload.title)
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        Ok(JsonBody(data))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    AppError::Rejected {
        code: ErrorCode::JsonExtraction,
        message: rejection.body_text(),
        details: None,
    }
}
