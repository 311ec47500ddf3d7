//! Query string extractor with structured rejections.

use crate::errors::{AppError, ErrorCode};
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Query string extractor; a missing or malformed parameter yields 400.
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Rejected {
                code: ErrorCode::InvalidQuery,
                message: e.body_text(),
                details: None,
            })?;

        Ok(QueryParams(params))
    }
}
