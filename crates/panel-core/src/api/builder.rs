//! Builder for configuring PanelApi initialization.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::catalog::CatalogStore;
use crate::error::{PanelError, Result};
use crate::launch::{AppLauncher, CommandLauncher, DynLauncher};
use crate::PanelApi;

/// Builder for configuring PanelApi initialization.
///
/// # Example
///
/// ```rust,ignore
/// use panel_core::PanelApi;
/// use std::time::Duration;
///
/// let api = PanelApi::builder("./shortcuts")
///     .launch_timeout(Duration::from_secs(10))
///     .auto_create_root(true)
///     .build()?;
/// ```
pub struct PanelApiBuilder {
    catalog_root: PathBuf,
    launcher: Option<DynLauncher>,
    launcher_command: Option<(String, Vec<String>)>,
    launch_timeout: Option<Duration>,
    auto_create_root: bool,
}

impl PanelApiBuilder {
    /// Create a new builder with the catalog root directory.
    pub fn new(catalog_root: impl Into<PathBuf>) -> Self {
        Self {
            catalog_root: catalog_root.into(),
            launcher: None,
            launcher_command: None,
            launch_timeout: None,
            auto_create_root: false,
        }
    }

    /// Use a custom launcher instead of spawning the platform's one.
    ///
    /// Takes precedence over `launcher_command` and `launch_timeout`.
    pub fn with_launcher(mut self, launcher: impl AppLauncher + 'static) -> Self {
        self.launcher = Some(Arc::new(launcher));
        self
    }

    /// Replace the platform launcher program and its leading arguments.
    pub fn launcher_command<I, S>(mut self, program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.launcher_command = Some((
            program.into(),
            args.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Bound on how long a launch may take.
    ///
    /// Default: `LaunchConfig::TIMEOUT`
    pub fn launch_timeout(mut self, timeout: Duration) -> Self {
        self.launch_timeout = Some(timeout);
        self
    }

    /// Create the catalog root during `build` instead of on first listing.
    ///
    /// Default: `false`
    pub fn auto_create_root(mut self, enable: bool) -> Self {
        self.auto_create_root = enable;
        self
    }

    /// Build the PanelApi instance.
    pub fn build(self) -> Result<PanelApi> {
        if self.launch_timeout == Some(Duration::ZERO) {
            return Err(PanelError::Config {
                message: "launch timeout must be greater than zero".to_string(),
            });
        }

        let catalog = CatalogStore::new(self.catalog_root);
        if self.auto_create_root {
            catalog.ensure_root()?;
        }

        let launcher = match self.launcher {
            Some(launcher) => launcher,
            None => {
                let mut command = match self.launcher_command {
                    Some((program, args)) => CommandLauncher::new(program, args),
                    None => CommandLauncher::platform_default(),
                };
                if let Some(timeout) = self.launch_timeout {
                    command = command.with_timeout(timeout);
                }
                tracing::debug!(
                    "Using launcher '{}' with timeout {:?}",
                    command.program(),
                    command.timeout()
                );
                Arc::new(command) as DynLauncher
            }
        };

        Ok(PanelApi { catalog, launcher })
    }
}
