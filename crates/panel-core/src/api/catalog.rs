//! Shortcut catalog methods on PanelApi.

use std::path::Path;

use crate::catalog::{CatalogStore, NewShortcut, ShortcutEntry};
use crate::error::{PanelError, Result};
use crate::PanelApi;

impl PanelApi {
    /// Get the underlying catalog store.
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Get the catalog root directory.
    pub fn catalog_root(&self) -> &Path {
        self.catalog.root()
    }

    /// List all shortcuts, sorted by id.
    pub async fn list_shortcuts(&self) -> Result<Vec<ShortcutEntry>> {
        self.with_catalog(|store| store.list()).await
    }

    /// Get a single shortcut.
    pub async fn get_shortcut(&self, id: &str) -> Result<ShortcutEntry> {
        let id = id.to_string();
        self.with_catalog(move |store| store.get(&id)).await
    }

    /// Create a shortcut with an optional logo.
    pub async fn create_shortcut(&self, shortcut: NewShortcut) -> Result<ShortcutEntry> {
        self.with_catalog(move |store| store.create(&shortcut)).await
    }

    /// Raw logo bytes for a shortcut.
    pub async fn shortcut_logo(&self, id: &str) -> Result<Vec<u8>> {
        let id = id.to_string();
        self.with_catalog(move |store| store.logo(&id)).await
    }

    /// Delete a shortcut and everything in its directory.
    pub async fn delete_shortcut(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        self.with_catalog(move |store| store.delete(&id)).await
    }

    /// Run a blocking catalog operation off the async executor.
    async fn with_catalog<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&CatalogStore) -> Result<T> + Send + 'static,
    {
        let store = self.catalog.clone();
        tokio::task::spawn_blocking(move || op(&store))
            .await
            .map_err(|e| PanelError::Other(format!("Catalog task failed: {}", e)))?
    }
}
