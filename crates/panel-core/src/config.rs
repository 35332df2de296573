//! Centralized configuration for the shortcuts panel.
//!
//! Defaults for the server, the on-disk catalog layout, the launcher and
//! address discovery. Runtime overrides come from the server's CLI.

use std::time::Duration;

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "Shortcuts Panel";
}

/// HTTP server defaults.
pub struct ServerConfig;

impl ServerConfig {
    /// Bound to all interfaces so phones on the LAN can reach it.
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8765;
    pub const INDEX_FILE_NAME: &'static str = "index.html";
}

/// On-disk catalog layout.
pub struct CatalogConfig;

impl CatalogConfig {
    pub const DIR_NAME: &'static str = "shortcuts";
    pub const CONFIG_FILE_NAME: &'static str = "config.json";
    pub const LOGO_FILE_NAME: &'static str = "logo.svg";
    pub const LOGO_CONTENT_TYPE: &'static str = "image/svg+xml";
    pub const LOGO_CACHE_MAX_AGE: Duration = Duration::from_secs(3600);
    pub const MAX_ID_LEN: usize = 64;
    pub const TEMP_SUFFIX: &'static str = ".tmp";
}

/// Application launcher defaults.
pub struct LaunchConfig;

impl LaunchConfig {
    pub const TIMEOUT: Duration = Duration::from_secs(5);
    pub const DEFAULT_FAILURE_MESSAGE: &'static str = "Failed to open application";
    /// How long to keep reading stderr once the launcher has exited.
    pub const STDERR_DRAIN: Duration = Duration::from_millis(250);
}

/// Network-related configuration.
pub struct NetworkConfig;

impl NetworkConfig {
    /// Routable address used to pick the outbound interface. Nothing is sent.
    pub const ADDRESS_PROBE: &'static str = "8.8.8.8:80";
}
