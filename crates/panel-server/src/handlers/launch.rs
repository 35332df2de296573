//! Application launch handler.

use crate::error::ApiResult;
use crate::server::AppState;
use axum::{extract::State, Json};
use panel_core::LaunchOutcome;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct OpenAppRequest {
    pub app_name: String,
}

pub async fn open_app(
    State(state): State<Arc<AppState>>,
    Json(request): Json<OpenAppRequest>,
) -> ApiResult<Json<LaunchOutcome>> {
    Ok(Json(state.api.open_app(&request.app_name).await?))
}
