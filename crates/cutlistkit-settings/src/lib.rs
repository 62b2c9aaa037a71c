//! # CutlistKit Settings
//!
//! The configuration a traversal runs with. A [`CutlistConfig`] is built
//! once per invocation (from defaults or a file) and passed explicitly to
//! the scene walker; nothing here is global.

pub mod config;
pub mod error;

pub use config::{default_config_path, CutlistConfig, DisplaySettings, EdgeMaterialRule};
pub use error::{SettingsError, SettingsResult};
