use crate::domain::StoreError;
use crate::transport::http::types::ApiResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

/// Failures a handler can return. The cause is logged; clients only see a
/// generic message.
#[derive(Debug)]
pub enum ApiError {
    Store(StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Store(e) => error!(error = %e, "store access failed"),
        }
        (
            status,
            Json(ApiResponse::failure(None, "Internal server error")),
        )
            .into_response()
    }
}
