//! Shortcut records as stored on disk and as returned to clients.

use serde::{Deserialize, Serialize};

/// Contents of a shortcut's `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutConfig {
    pub id: String,
    pub label: String,
    #[serde(rename = "appName")]
    pub app_name: String,
}

/// A catalog entry: the stored configuration plus the derived `hasLogo` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutEntry {
    pub id: String,
    pub label: String,
    #[serde(rename = "appName")]
    pub app_name: String,
    /// True iff an icon file exists next to the configuration.
    #[serde(rename = "hasLogo")]
    pub has_logo: bool,
}

impl ShortcutEntry {
    pub fn from_config(config: ShortcutConfig, has_logo: bool) -> Self {
        Self {
            id: config.id,
            label: config.label,
            app_name: config.app_name,
            has_logo,
        }
    }
}

/// Input for creating a shortcut.
#[derive(Debug, Clone, Default)]
pub struct NewShortcut {
    pub id: String,
    pub label: String,
    pub app_name: String,
    /// Raw icon bytes. `None` or empty means no icon.
    pub logo: Option<Vec<u8>>,
}

impl NewShortcut {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        app_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            app_name: app_name.into(),
            logo: None,
        }
    }

    /// Attach icon data.
    pub fn with_logo(mut self, logo: impl Into<Vec<u8>>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    pub(crate) fn config(&self) -> ShortcutConfig {
        ShortcutConfig {
            id: self.id.clone(),
            label: self.label.clone(),
            app_name: self.app_name.clone(),
        }
    }

    /// Icon bytes, treating an empty payload as absent.
    pub(crate) fn logo_bytes(&self) -> Option<&[u8]> {
        self.logo.as_deref().filter(|bytes| !bytes.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_with_client_field_names() {
        let entry = ShortcutEntry {
            id: "vscode".into(),
            label: "VS Code".into(),
            app_name: "Visual Studio Code".into(),
            has_logo: true,
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["appName"], "Visual Studio Code");
        assert_eq!(value["hasLogo"], true);
        assert!(value.get("app_name").is_none());
    }

    #[test]
    fn test_config_ignores_unknown_fields() {
        let config: ShortcutConfig = serde_json::from_str(
            r#"{"id": "mail", "label": "Mail", "appName": "Mail", "color": "blue"}"#,
        )
        .unwrap();
        assert_eq!(config.app_name, "Mail");
    }

    #[test]
    fn test_empty_logo_counts_as_absent() {
        let shortcut = NewShortcut::new("a", "A", "A").with_logo(Vec::new());
        assert!(shortcut.logo_bytes().is_none());

        let shortcut = NewShortcut::new("a", "A", "A").with_logo("<svg/>");
        assert_eq!(shortcut.logo_bytes(), Some("<svg/>".as_bytes()));
    }
}
