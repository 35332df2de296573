//! Shortcut catalog handlers.

use super::StatusResponse;
use crate::error::ApiResult;
use crate::server::AppState;
use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use panel_core::config::CatalogConfig;
use panel_core::{NewShortcut, ShortcutEntry};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct ShortcutsResponse {
    pub shortcuts: Vec<ShortcutEntry>,
}

#[derive(Debug, Deserialize)]
pub struct CreateShortcutRequest {
    pub id: String,
    pub label: String,
    #[serde(rename = "appName")]
    pub app_name: String,
    /// Optional SVG markup for the icon.
    #[serde(default)]
    pub logo_svg: Option<String>,
}

impl From<CreateShortcutRequest> for NewShortcut {
    fn from(request: CreateShortcutRequest) -> Self {
        let shortcut = NewShortcut::new(request.id, request.label, request.app_name);
        match request.logo_svg {
            Some(svg) => shortcut.with_logo(svg),
            None => shortcut,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateShortcutResponse {
    #[serde(flatten)]
    pub status: StatusResponse,
    pub shortcut: ShortcutEntry,
}

pub async fn list_shortcuts(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ShortcutsResponse>> {
    let shortcuts = state.api.list_shortcuts().await?;
    Ok(Json(ShortcutsResponse { shortcuts }))
}

pub async fn get_shortcut(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ShortcutEntry>> {
    Ok(Json(state.api.get_shortcut(&id).await?))
}

pub async fn create_shortcut(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateShortcutRequest>,
) -> ApiResult<Json<CreateShortcutResponse>> {
    let shortcut = state.api.create_shortcut(request.into()).await?;
    Ok(Json(CreateShortcutResponse {
        status: StatusResponse::success(format!(
            "Shortcut '{}' created successfully",
            shortcut.label
        )),
        shortcut,
    }))
}

pub async fn get_shortcut_logo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let logo = state.api.shortcut_logo(&id).await?;
    let cache_control = format!(
        "public, max-age={}",
        CatalogConfig::LOGO_CACHE_MAX_AGE.as_secs()
    );
    Ok((
        [
            (header::CONTENT_TYPE, CatalogConfig::LOGO_CONTENT_TYPE.to_string()),
            (header::CACHE_CONTROL, cache_control),
        ],
        logo,
    ))
}

pub async fn delete_shortcut(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<StatusResponse>> {
    state.api.delete_shortcut(&id).await?;
    Ok(Json(StatusResponse::success(format!(
        "Shortcut '{}' deleted successfully",
        id
    ))))
}
