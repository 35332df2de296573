//! Shortcut identifier validation.
//!
//! Identifiers double as directory names under the catalog root, so they
//! must never escape it.

use crate::config::CatalogConfig;
use crate::error::{PanelError, Result};

/// Check that `id` is safe to use as a directory name under the catalog root.
///
/// # Rules
/// 1. 1 to `CatalogConfig::MAX_ID_LEN` characters
/// 2. Only ASCII letters, digits, `-`, `_` and `.`
/// 3. No leading `.` (rules out `.`, `..` and hidden directories)
pub fn validate_shortcut_id(id: &str) -> Result<()> {
    let invalid = |reason: &str| PanelError::InvalidShortcutId {
        id: id.to_string(),
        reason: reason.to_string(),
    };

    if id.is_empty() {
        return Err(invalid("must not be empty"));
    }
    if id.len() > CatalogConfig::MAX_ID_LEN {
        return Err(invalid(&format!(
            "must be at most {} characters",
            CatalogConfig::MAX_ID_LEN
        )));
    }
    if id.starts_with('.') {
        return Err(invalid("must not start with '.'"));
    }
    if let Some(c) = id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(invalid(&format!("contains disallowed character {:?}", c)));
    }

    Ok(())
}
