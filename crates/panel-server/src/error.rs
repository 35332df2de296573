//! HTTP error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use panel_core::PanelError;
use serde_json::json;
use tracing::{debug, error, warn};

/// Handler error: a `PanelError` rendered as `{"detail": "..."}`.
#[derive(Debug)]
pub struct ApiError(pub PanelError);

impl From<PanelError> for ApiError {
    fn from(err: PanelError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        } else if self.0.is_not_found() {
            debug!("{}", self.0);
        } else {
            warn!("Request rejected: {}", self.0);
        }

        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
