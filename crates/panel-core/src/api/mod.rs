//! API implementation submodules.
//!
//! Each submodule contains `impl PanelApi` blocks. The struct definition
//! remains in `lib.rs`.

mod builder;
mod catalog;
mod launch;

pub use builder::PanelApiBuilder;
