//! Launch bridge: open a host application by display name.
//!
//! The [`AppLauncher`] trait is the seam between the service and the OS.
//! [`CommandLauncher`] spawns the platform's launcher as a child process;
//! tests substitute their own implementation.

mod command;

pub use command::CommandLauncher;

use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// Successful launch report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchOutcome {
    pub status: String,
    pub message: String,
}

impl LaunchOutcome {
    /// Standard confirmation for `app_name`.
    pub fn opened(app_name: &str) -> Self {
        Self {
            status: "success".to_string(),
            message: format!("Opened {}", app_name),
        }
    }
}

/// Opens applications on the host.
///
/// Implementations return `LaunchFailed` when the launcher reports failure,
/// `Timeout` when it exceeds its bound, and any other error for invocation
/// problems.
#[async_trait]
pub trait AppLauncher: Send + Sync {
    async fn launch(&self, app_name: &str) -> Result<LaunchOutcome>;
}

/// Shared launcher handle.
pub type DynLauncher = Arc<dyn AppLauncher>;
