//! Control page, health and address discovery handlers.

use crate::error::ApiResult;
use crate::server::AppState;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Json,
};
use panel_core::network;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Built-in control page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(json!({"status": "healthy"}))
}

#[derive(Debug, Serialize)]
pub struct IpResponse {
    pub ip: String,
    pub url: String,
}

/// LAN address and the URL a phone should open.
pub async fn get_ip(State(state): State<Arc<AppState>>) -> ApiResult<Json<IpResponse>> {
    let ip = network::local_ip()?;
    Ok(Json(IpResponse {
        ip: ip.to_string(),
        url: network::panel_url(ip, state.port),
    }))
}
