//! Cut list configuration
//!
//! Every field carries a serde default, so a partial file only overrides
//! what it names and the rest falls back to [`CutlistConfig::default`].

use crate::error::{SettingsError, SettingsResult};
use cutlistkit_core::{LengthFormat, LengthUnit, WordList};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const CONFIG_DIR_NAME: &str = "cutlistkit";
const CONFIG_FILE_NAME: &str = "config.toml";
const MAX_PRECISION: usize = 10;

/// Maps an edge material to a banding thickness
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeMaterialRule {
    /// Tokens matched against the edge's material name
    pub words: WordList,
    /// Banding thickness in mm
    pub thickness_mm: f64,
    /// Output slot reported for edges bound by this rule
    pub output_index: u32,
}

impl EdgeMaterialRule {
    pub fn new(words: WordList, thickness_mm: f64, output_index: u32) -> Self {
        Self {
            words,
            thickness_mm,
            output_index,
        }
    }
}

/// How lengths are shown in reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub unit: LengthUnit,
    pub decimal_separator: char,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            unit: LengthUnit::Millimeter,
            decimal_separator: '.',
            precision: None,
        }
    }
}

impl DisplaySettings {
    /// The formatter handed to every length rendering
    pub fn length_format(&self) -> LengthFormat {
        let fmt = LengthFormat::new(self.unit).with_separator(self.decimal_separator);
        match self.precision {
            Some(precision) => fmt.with_precision(precision),
            None => fmt,
        }
    }
}

/// Configuration for one cut list run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutlistConfig {
    /// Names or materials matching these are counted as hardware
    pub hardware_words: WordList,
    /// Names or materials matching these are sheet stock
    pub sheet_words: WordList,
    /// Sort the solid and sheet lists by name after discovery
    pub list_all_sorted: bool,
    /// Deepest nesting level the walker will descend to
    pub max_depth: usize,
    pub display: DisplaySettings,
    /// Checked in order, the first matching rule wins
    pub edge_materials: Vec<EdgeMaterialRule>,
}

impl Default for CutlistConfig {
    fn default() -> Self {
        Self {
            hardware_words: WordList::new(["part"]),
            sheet_words: WordList::new(["sheet"]),
            list_all_sorted: false,
            max_depth: 256,
            display: DisplaySettings::default(),
            edge_materials: Vec::new(),
        }
    }
}

impl CutlistConfig {
    /// First edge-material rule whose words match `material`
    pub fn edge_rule_for(&self, material: &str) -> Option<&EdgeMaterialRule> {
        self.edge_materials
            .iter()
            .find(|rule| rule.words.matches(material))
    }

    /// Length formatter for the configured display settings
    pub fn length_format(&self) -> LengthFormat {
        self.display.length_format()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                ))
            }
        };

        config.validate()?;
        debug!(path = %path.display(), "loaded cut list config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                ))
            }
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.max_depth == 0 {
            return Err(SettingsError::invalid("max_depth", "must be > 0"));
        }

        if !matches!(self.display.decimal_separator, '.' | ',') {
            return Err(SettingsError::invalid(
                "display.decimal_separator",
                format!("expected '.' or ',', got {:?}", self.display.decimal_separator),
            ));
        }

        if self.display.precision.is_some_and(|p| p > MAX_PRECISION) {
            return Err(SettingsError::invalid(
                "display.precision",
                format!("must be <= {}", MAX_PRECISION),
            ));
        }

        for (i, rule) in self.edge_materials.iter().enumerate() {
            if !rule.thickness_mm.is_finite() || rule.thickness_mm < 0.0 {
                return Err(SettingsError::invalid(
                    &format!("edge_materials[{}].thickness_mm", i),
                    "must be a finite value >= 0",
                ));
            }
        }

        self.warn_malformed_words();
        Ok(())
    }

    // Malformed tokens are skipped by the matcher, so they only get a warning.
    fn warn_malformed_words(&self) {
        let lists = [
            ("hardware_words", &self.hardware_words),
            ("sheet_words", &self.sheet_words),
        ];
        let rules = self
            .edge_materials
            .iter()
            .map(|rule| ("edge_materials.words", &rule.words));

        for (key, words) in lists.into_iter().chain(rules) {
            for token in words.malformed() {
                warn!(key, token, "ignoring malformed word token");
            }
        }
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// `<config dir>/cutlistkit/config.toml`
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".into())
        })
}
