//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Validation failures and missing recipes are not errors here: they are
//! answered with `200 OK` and a message body by the handlers themselves.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// No route matches the request's method and path.
  #[error("no route")]
  NotFound,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    ApiError::Store(Box::new(e))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
      ApiError::Store(e) => {
        // Details stay in the log; clients only see a generic message.
        tracing::error!(error = %e, "store operation failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
      }
    };
    (status, Json(json!({ "message": message }))).into_response()
  }
}

/// Fallback handler for unmatched routes.
pub async fn not_found() -> ApiError { ApiError::NotFound }
