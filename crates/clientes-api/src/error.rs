//! Mapping of store failures onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use clientes_store::StoreError;
use serde_json::json;
use tracing::error;

/// HTTP-facing wrapper over [`StoreError`].
///
/// Every error body has the shape `{"message": "..."}` with the
/// message in Portuguese. Validation and enrichment failures are the
/// caller's fault (400/404); persistence failures are the server's
/// (500) and only a generic message leaks out.
#[derive(Debug)]
pub struct ApiError(StoreError);

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            StoreError::NotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            StoreError::InvalidCep | StoreError::Enrichment(_) => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }
            StoreError::Io(_) | StoreError::Serialization(_) => {
                error!(error = %self.0, "falha de persistência");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno do servidor".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
