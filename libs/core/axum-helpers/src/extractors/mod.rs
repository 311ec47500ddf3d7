//! Custom extractors for Axum handlers.
//!
//! Each extractor turns axum's rejection into an [`AppError`](crate::errors::AppError)
//! so clients always receive the structured error body with a 400 status.

pub mod id_path;
pub mod json_body;
pub mod query_params;

pub use id_path::IdPath;
pub use json_body::JsonBody;
pub use query_params::QueryParams;
