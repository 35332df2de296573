//! Shortcut catalog: one directory per entry holding a `config.json` and an
//! optional `logo.svg`.

mod atomic;
mod identifier;
mod model;
mod store;

pub use identifier::validate_shortcut_id;
pub use model::{NewShortcut, ShortcutConfig, ShortcutEntry};
pub use store::CatalogStore;
