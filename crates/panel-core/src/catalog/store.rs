//! Folder-per-entry shortcut catalog.
//!
//! Layout under the catalog root:
//!
//! ```text
//! shortcuts/
//!   vscode/
//!     config.json   {"id": "vscode", "label": "...", "appName": "..."}
//!     logo.svg      optional
//!   safari/
//!     config.json
//! ```
//!
//! Nothing is cached: every call reads the current disk state. There is no
//! locking either, so concurrent mutations of the same id race and the last
//! write wins.

use super::atomic;
use super::identifier::validate_shortcut_id;
use super::model::{NewShortcut, ShortcutConfig, ShortcutEntry};
use crate::config::CatalogConfig;
use crate::error::{PanelError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Shortcut catalog rooted at a directory.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    root: PathBuf,
}

impl CatalogStore {
    /// Create a store for the given catalog root. The directory is not touched.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the catalog root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the catalog root if it is missing.
    pub fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| PanelError::io_with_path(e, &self.root))
    }

    /// Directory for `id`, after checking the id cannot escape the root.
    fn entry_dir(&self, id: &str) -> Result<PathBuf> {
        validate_shortcut_id(id)?;
        Ok(self.root.join(id))
    }

    /// List every loadable entry, sorted by id.
    ///
    /// Subdirectories without a readable `config.json` are skipped with a
    /// warning. A missing catalog root is created and yields an empty list.
    pub fn list(&self) -> Result<Vec<ShortcutEntry>> {
        if !self.root.exists() {
            warn!(
                "Shortcuts directory not found at {}, creating it",
                self.root.display()
            );
            self.ensure_root()?;
            return Ok(Vec::new());
        }

        let read_dir =
            fs::read_dir(&self.root).map_err(|e| PanelError::io_with_path(e, &self.root))?;

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry.map_err(|e| PanelError::io_with_path(e, &self.root))?;
            let path = dir_entry.path();
            if !path.is_dir() {
                continue;
            }

            let Some(dir_name) = path.file_name().and_then(|n| n.to_str()) else {
                warn!("Skipping non UTF-8 directory {}", path.display());
                continue;
            };
            if let Err(e) = validate_shortcut_id(dir_name) {
                warn!("Skipping {}: {}", path.display(), e);
                continue;
            }

            match load_entry(&path, dir_name) {
                Ok(Some(entry)) => entries.push(entry),
                Ok(None) => {
                    warn!(
                        "No {} found in {}, skipping",
                        CatalogConfig::CONFIG_FILE_NAME,
                        dir_name
                    );
                }
                Err(e) => {
                    warn!("Error reading config from {}: {}", dir_name, e);
                }
            }
        }

        entries.sort_by(|a, b| a.id.cmp(&b.id));
        info!("Loaded {} shortcuts", entries.len());
        Ok(entries)
    }

    /// Load a single entry.
    pub fn get(&self, id: &str) -> Result<ShortcutEntry> {
        let dir = self.entry_dir(id)?;
        load_entry(&dir, id)?.ok_or_else(|| PanelError::ShortcutNotFound { id: id.to_string() })
    }

    /// Create a new entry directory with its config and optional logo.
    ///
    /// Fails with `ShortcutExists` if the directory is already present. If a
    /// write fails after the directory was created, the directory is removed
    /// again on a best-effort basis.
    pub fn create(&self, shortcut: &NewShortcut) -> Result<ShortcutEntry> {
        let dir = self.entry_dir(&shortcut.id)?;
        require_non_empty("label", &shortcut.label)?;
        require_non_empty("appName", &shortcut.app_name)?;

        self.ensure_root()?;

        match fs::create_dir(&dir) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(PanelError::ShortcutExists {
                    id: shortcut.id.clone(),
                });
            }
            Err(e) => return Err(PanelError::io_with_path(e, &dir)),
        }

        populate_or_remove(&dir, |dir| write_entry_files(dir, shortcut))?;

        let entry = ShortcutEntry::from_config(shortcut.config(), shortcut.logo_bytes().is_some());
        info!("Created new shortcut: {} ({})", entry.label, entry.id);
        Ok(entry)
    }

    /// Raw logo bytes for `id`.
    pub fn logo(&self, id: &str) -> Result<Vec<u8>> {
        let logo_path = self.entry_dir(id)?.join(CatalogConfig::LOGO_FILE_NAME);
        match fs::read(&logo_path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(PanelError::LogoNotFound { id: id.to_string() })
            }
            Err(e) => Err(PanelError::io_with_path(e, &logo_path)),
        }
    }

    /// Remove the entry's whole directory.
    ///
    /// Only directories are entries. A plain file in the catalog root with an
    /// id-shaped name (`README.txt`) is reported as `ShortcutNotFound` and left
    /// alone, matching `list`, which never shows it.
    pub fn delete(&self, id: &str) -> Result<()> {
        let dir = self.entry_dir(id)?;
        if !dir.is_dir() {
            return Err(PanelError::ShortcutNotFound { id: id.to_string() });
        }

        fs::remove_dir_all(&dir).map_err(|e| PanelError::io_with_path(e, &dir))?;

        info!("Deleted shortcut: {}", id);
        Ok(())
    }
}

/// Load `dir/config.json`, returning `None` if it does not exist.
///
/// The directory name is authoritative for the id.
fn load_entry(dir: &Path, dir_name: &str) -> Result<Option<ShortcutEntry>> {
    let config_path = dir.join(CatalogConfig::CONFIG_FILE_NAME);
    let Some(mut config) = atomic::read_json::<ShortcutConfig>(&config_path)? else {
        return Ok(None);
    };

    if config.id != dir_name {
        warn!(
            "Config in {} declares id '{}', using directory name",
            dir_name, config.id
        );
        config.id = dir_name.to_string();
    }

    let has_logo = dir.join(CatalogConfig::LOGO_FILE_NAME).is_file();
    debug!("Loaded shortcut {} (logo: {})", config.id, has_logo);
    Ok(Some(ShortcutEntry::from_config(config, has_logo)))
}

/// Run `populate` on a freshly created entry directory, removing the
/// directory again if it fails.
fn populate_or_remove(dir: &Path, populate: impl FnOnce(&Path) -> Result<()>) -> Result<()> {
    if let Err(e) = populate(dir) {
        if let Err(cleanup) = fs::remove_dir_all(dir) {
            warn!(
                "Failed to clean up {} after error: {}",
                dir.display(),
                cleanup
            );
        }
        return Err(e);
    }
    Ok(())
}

fn write_entry_files(dir: &Path, shortcut: &NewShortcut) -> Result<()> {
    atomic::write_json(&dir.join(CatalogConfig::CONFIG_FILE_NAME), &shortcut.config())?;
    if let Some(logo) = shortcut.logo_bytes() {
        atomic::write_bytes(&dir.join(CatalogConfig::LOGO_FILE_NAME), logo)?;
    }
    Ok(())
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PanelError::Validation {
            field: field.to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}
