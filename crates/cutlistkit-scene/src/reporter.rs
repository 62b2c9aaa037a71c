//! One cut list discovery session

use crate::error::{SceneError, SceneResult};
use crate::model::{EntityId, Scene, Selection};
use crate::walker::{SceneWalker, WalkOutput};
use cutlistkit_core::LengthFormat;
use cutlistkit_parts::{PartList, PartRegistry};
use cutlistkit_settings::CutlistConfig;
use serde::Serialize;
use tracing::info;

/// A node left out of the cut list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedNode {
    pub id: EntityId,
    pub name: String,
    /// Why the node could not be measured
    pub reason: String,
}

/// Parts found in a scene
#[derive(Debug, Clone, Serialize)]
pub struct CutlistReport {
    pub title: String,
    pub solid: PartRegistry,
    pub sheet: PartRegistry,
    pub hardware: PartList,
    pub skipped: Vec<SkippedNode>,
    #[serde(skip)]
    pub format: LengthFormat,
}

impl CutlistReport {
    /// Number of solid and sheet parts
    pub fn part_count(&self) -> usize {
        self.solid.len() + self.sheet.len()
    }
}

/// Result of a session
#[derive(Debug, Clone)]
pub enum Discovery {
    Parts(CutlistReport),
    /// Nothing in the selection produced a part or hardware item
    NoParts { skipped: Vec<SkippedNode> },
}

impl Discovery {
    pub fn report(&self) -> Option<&CutlistReport> {
        match self {
            Self::Parts(report) => Some(report),
            Self::NoParts { .. } => None,
        }
    }

    pub fn into_report(self) -> Option<CutlistReport> {
        match self {
            Self::Parts(report) => Some(report),
            Self::NoParts { .. } => None,
        }
    }
}

/// Runs discovery sessions with one configuration
#[derive(Debug, Clone)]
pub struct Reporter {
    config: CutlistConfig,
}

impl Reporter {
    pub fn new(config: CutlistConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CutlistConfig {
        &self.config
    }

    /// Walk the selected part of `scene`.
    ///
    /// An explicitly empty selection is an error; use [`Selection::All`] to
    /// cover every visible top-level entity.
    pub fn run(&self, scene: &Scene, selection: &Selection) -> SceneResult<Discovery> {
        if selection.is_empty() {
            return Err(SceneError::NothingSelected);
        }

        info!(
            title = %scene.title,
            units = %scene.units,
            entities = scene.entities.len(),
            "starting cut list discovery"
        );

        let WalkOutput {
            mut solid,
            mut sheet,
            hardware,
            skipped,
        } = SceneWalker::new(scene, &self.config).walk(selection)?;

        if self.config.list_all_sorted {
            solid.sort();
            sheet.sort();
        }

        info!(
            solid = solid.len(),
            sheet = sheet.len(),
            hardware = hardware.total(),
            skipped = skipped.len(),
            "cut list discovery finished"
        );

        if solid.is_empty() && sheet.is_empty() && hardware.is_empty() {
            return Ok(Discovery::NoParts { skipped });
        }

        Ok(Discovery::Parts(CutlistReport {
            title: scene.title.clone(),
            solid,
            sheet,
            hardware,
            skipped,
            format: self.config.length_format(),
        }))
    }
}
