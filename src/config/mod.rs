//! YAML configuration: provider settings, model lists, and CLI edits.

pub mod edit;
pub mod model;
pub mod store;

pub use edit::ConfigEdit;
pub use model::{Configuration, DEFAULT_STYLE, ProviderConfig};
pub use store::{CONFIG_DIR, CONFIG_FILE, ConfigStore};
