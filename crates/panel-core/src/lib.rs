//! Panel Core - shortcut catalog and application launcher.
//!
//! This crate holds everything the shortcuts panel does apart from HTTP:
//! the folder-per-entry shortcut catalog, the bridge to the host's
//! "open application" facility, and local address discovery. It can be
//! used programmatically without the server.
//!
//! # Example
//!
//! ```rust,ignore
//! use panel_core::{NewShortcut, PanelApi};
//!
//! #[tokio::main]
//! async fn main() -> panel_core::Result<()> {
//!     let api = PanelApi::builder("./shortcuts").build()?;
//!
//!     api.create_shortcut(NewShortcut::new("safari", "Safari", "Safari")).await?;
//!     for shortcut in api.list_shortcuts().await? {
//!         println!("{} -> {}", shortcut.label, shortcut.app_name);
//!     }
//!
//!     api.open_app("Safari").await?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod launch;
pub mod network;
pub mod platform;

mod api;

pub use api::PanelApiBuilder;
pub use catalog::{CatalogStore, NewShortcut, ShortcutConfig, ShortcutEntry};
pub use error::{PanelError, Result};
pub use launch::{AppLauncher, CommandLauncher, DynLauncher, LaunchOutcome};

/// Main service object for the panel.
///
/// Owns the catalog root and the launcher. Nothing is global: tests build
/// one around a temporary directory and a fake launcher.
#[derive(Clone)]
pub struct PanelApi {
    catalog: CatalogStore,
    launcher: DynLauncher,
}

impl std::fmt::Debug for PanelApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelApi")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

impl PanelApi {
    /// Create a builder for PanelApi.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let api = PanelApi::builder("./shortcuts")
    ///     .launcher_command("open", ["-a"])
    ///     .build()?;
    /// ```
    pub fn builder(catalog_root: impl Into<std::path::PathBuf>) -> PanelApiBuilder {
        PanelApiBuilder::new(catalog_root)
    }

    /// Create a PanelApi with the platform launcher and default timeout.
    pub fn new(catalog_root: impl Into<std::path::PathBuf>) -> Result<Self> {
        Self::builder(catalog_root).build()
    }
}
