//! Error types for the shortcuts panel.
//!
//! Every failure the catalog or the launcher can produce is a variant of
//! [`PanelError`]. The HTTP layer maps them onto status codes through
//! [`PanelError::status_code`].

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Main error type for the panel library.
#[derive(Debug, Error)]
pub enum PanelError {
    // Catalog errors
    #[error("Shortcut with ID '{id}' not found")]
    ShortcutNotFound { id: String },

    #[error("Logo not found for shortcut '{id}'")]
    LogoNotFound { id: String },

    #[error("Shortcut with ID '{id}' already exists")]
    ShortcutExists { id: String },

    #[error("Invalid shortcut ID '{id}': {reason}")]
    InvalidShortcutId { id: String, reason: String },

    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    // Launcher errors
    #[error("Failed to open {app}: {message}")]
    LaunchFailed { app: String, message: String },

    #[error("Timed out after {after:?} opening {app}")]
    Timeout { app: String, after: Duration },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for panel operations.
pub type Result<T> = std::result::Result<T, PanelError>;

impl From<std::io::Error> for PanelError {
    fn from(err: std::io::Error) -> Self {
        PanelError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for PanelError {
    fn from(err: serde_json::Error) -> Self {
        PanelError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl PanelError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        PanelError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Convert to an HTTP status code.
    ///
    /// - 404: shortcut or logo absent
    /// - 400: duplicate id, invalid input, launcher reported failure
    /// - 408: launcher exceeded its time bound
    /// - 500: everything else
    pub fn status_code(&self) -> u16 {
        match self {
            PanelError::ShortcutNotFound { .. } | PanelError::LogoNotFound { .. } => 404,

            PanelError::ShortcutExists { .. }
            | PanelError::InvalidShortcutId { .. }
            | PanelError::Validation { .. }
            | PanelError::LaunchFailed { .. } => 400,

            PanelError::Timeout { .. } => 408,

            _ => 500,
        }
    }

    /// True for errors that mean "the thing you asked for is not there".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PanelError::ShortcutNotFound { .. } | PanelError::LogoNotFound { .. }
        )
    }
}
