//! # CutlistKit
//!
//! Cut list generation for furniture models. A nested scene of groups and
//! component instances is decomposed into solid parts, sheet parts and a
//! hardware count, each part carrying normalised dimensions, material and
//! edge banding.
//!
//! ## Architecture
//!
//! CutlistKit is organized as a workspace with multiple crates:
//!
//! 1. **cutlistkit-core** - Units, length formatting, word matching, geometry
//! 2. **cutlistkit-parts** - Parts, edges, hardware counter, part registry
//! 3. **cutlistkit-settings** - Configuration load/save/validate
//! 4. **cutlistkit-scene** - Scene model, dimension analysis, edge binding, walker
//! 5. **cutlistkit** - Command line front end that ties the crates together

pub mod report;

pub use cutlistkit_core::{
    format_length, matches, Axis, BoundingBox, LengthFormat, LengthUnit, WordList,
};
pub use cutlistkit_parts::{
    CompactRow, Edge, EdgeSet, MaterialTotal, Part, PartList, PartRegistry, StockKind,
};
pub use cutlistkit_scene::{
    CutlistReport, DimensionAnalyzer, Discovery, EdgeBinder, Entity, Reporter, Scene, SceneError,
    SceneWalker, Selection,
};
pub use cutlistkit_settings::{default_config_path, CutlistConfig, EdgeMaterialRule, SettingsError};

use std::path::Path;
use tracing::{debug, info};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatted output on stderr, so stdout stays clean for reports
/// - RUST_LOG environment variable support (default level INFO)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Load the configuration for a run.
///
/// An explicit path must exist. Without one, the default config file is
/// used when present and the built-in defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<CutlistConfig, SettingsError> {
    if let Some(path) = path {
        return CutlistConfig::load_from_file(path);
    }

    match default_config_path() {
        Ok(path) if path.exists() => {
            info!(path = %path.display(), "using default config file");
            CutlistConfig::load_from_file(&path)
        }
        _ => {
            debug!("no config file, using defaults");
            Ok(CutlistConfig::default())
        }
    }
}

/// Load a scene file and run discovery over `selection`
pub fn discover_file(
    scene_path: &Path,
    config: CutlistConfig,
    selection: &Selection,
) -> Result<Discovery, SceneError> {
    let scene = Scene::load(scene_path)?;
    Reporter::new(config).run(&scene, selection)
}
