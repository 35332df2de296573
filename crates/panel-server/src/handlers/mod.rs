//! HTTP handlers, grouped by domain.
//!
//! Handlers only translate request and response shapes; all behaviour lives
//! in `panel_core::PanelApi`.

mod launch;
mod shortcuts;
mod system;

pub use launch::open_app;
pub use shortcuts::{
    create_shortcut, delete_shortcut, get_shortcut, get_shortcut_logo, list_shortcuts,
};
pub use system::{get_ip, health, index};

use serde::Serialize;

/// `{"status": "success", "message": ...}` envelope.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }
}
