//! Recursive scene walker
//!
//! Visits every group and instance below the selection and decides what
//! each one is:
//!
//! 1. hidden or invisible nodes, and unselected top-level nodes, are
//!    excluded;
//! 2. a node whose name or material matches the hardware words is counted
//!    as hardware and not expanded;
//! 3. otherwise its children are walked one level down, with the node's
//!    name as their sub-assembly;
//! 4. a node whose children produced nothing is atomic and becomes a
//!    solid or sheet [`Part`]; a node whose children did produce something
//!    is only a container.
//!
//! A leaf without bounds, or whose transform flattens it, cannot be
//! measured. It is recorded as skipped and the walk carries on.
//!
//! Containers report upward that they hold components, so no ancestor is
//! ever measured as one oversized part.

use crate::dimensions::DimensionAnalyzer;
use crate::edges::EdgeBinder;
use crate::error::{SceneError, SceneResult};
use crate::model::{Entity, EntityId, Node, Scene, Selection};
use crate::reporter::SkippedNode;
use cutlistkit_core::{linear_part, LengthFormat};
use cutlistkit_parts::{Part, PartList, PartRegistry, StockKind, NOT_ASSIGNED};
use cutlistkit_settings::CutlistConfig;
use nalgebra::Matrix4;
use tracing::{debug, debug_span, warn};

/// What a visited node turned out to be
#[derive(Debug, Clone, PartialEq)]
pub enum NodeOutcome {
    /// Hidden, invisible or outside the selection
    Excluded,
    /// A face or other entity that is never a part
    NotAPart,
    /// Counted by name only
    Hardware { name: String },
    /// Holds components of its own
    Container,
    /// A measured leaf part
    Atomic(Part),
    /// A leaf that could not be measured
    Unmeasurable {
        id: EntityId,
        name: String,
        reason: String,
    },
}

impl NodeOutcome {
    /// True if the node counts as a component for its parent
    pub fn has_components(&self) -> bool {
        !matches!(self, Self::Excluded | Self::NotAPart)
    }
}

/// Everything a walk collected
#[derive(Debug, Clone, Default)]
pub struct WalkOutput {
    pub solid: PartRegistry,
    pub sheet: PartRegistry,
    pub hardware: PartList,
    pub skipped: Vec<SkippedNode>,
}

impl WalkOutput {
    fn record(&mut self, outcome: NodeOutcome) {
        match outcome {
            NodeOutcome::Hardware { name } => self.hardware.add(name),
            NodeOutcome::Atomic(part) => match part.kind {
                StockKind::Solid => self.solid.add(part),
                StockKind::Sheet => self.sheet.add(part),
            },
            NodeOutcome::Unmeasurable { id, name, reason } => {
                self.skipped.push(SkippedNode { id, name, reason })
            }
            NodeOutcome::Excluded | NodeOutcome::NotAPart | NodeOutcome::Container => {}
        }
    }
}

/// Walks one scene with one configuration
pub struct SceneWalker<'a> {
    scene: &'a Scene,
    config: &'a CutlistConfig,
    format: LengthFormat,
    analyzer: DimensionAnalyzer,
    binder: EdgeBinder<'a>,
}

impl<'a> SceneWalker<'a> {
    pub fn new(scene: &'a Scene, config: &'a CutlistConfig) -> Self {
        Self {
            scene,
            config,
            format: config.length_format(),
            analyzer: DimensionAnalyzer::new(),
            binder: EdgeBinder::new(config),
        }
    }

    /// Walk the scene's top-level entities.
    ///
    /// Top-level parts take the scene title as their sub-assembly.
    pub fn walk(&self, selection: &Selection) -> SceneResult<WalkOutput> {
        let mut out = WalkOutput::default();
        self.walk_level(
            &self.scene.entities,
            1,
            &self.scene.title,
            &Matrix4::identity(),
            Some(selection),
            &mut out,
        )?;
        Ok(out)
    }

    /// Walk one entity list. Returns true if any entity is a component.
    fn walk_level(
        &self,
        entities: &'a [Entity],
        level: usize,
        sub_assembly: &str,
        parent_transform: &Matrix4<f64>,
        selection: Option<&Selection>,
        out: &mut WalkOutput,
    ) -> SceneResult<bool> {
        if level > self.config.max_depth {
            return Err(SceneError::DepthLimitExceeded {
                limit: self.config.max_depth,
                at: sub_assembly.to_string(),
            });
        }

        let span = debug_span!("level", level, sub_assembly);
        let _enter = span.enter();

        let mut has_components = false;
        for entity in entities {
            let outcome =
                self.visit(entity, level, sub_assembly, parent_transform, selection, out)?;
            has_components |= outcome.has_components();
            out.record(outcome);
        }
        Ok(has_components)
    }

    /// Classify one entity, walking its children when needed
    pub fn visit(
        &self,
        entity: &'a Entity,
        level: usize,
        sub_assembly: &str,
        parent_transform: &Matrix4<f64>,
        selection: Option<&Selection>,
        out: &mut WalkOutput,
    ) -> SceneResult<NodeOutcome> {
        let Some(node) = self.scene.node(entity)? else {
            return Ok(NodeOutcome::NotAPart);
        };

        if !node.is_visible() || selection.is_some_and(|s| !s.contains(node.id())) {
            return Ok(NodeOutcome::Excluded);
        }

        let name = node.effective_name();
        let material = node
            .effective_material()
            .map(|m| m.name.as_str())
            .unwrap_or(NOT_ASSIGNED);

        if self.config.hardware_words.matches_any(material, name) {
            debug!(name, material, "hardware");
            return Ok(NodeOutcome::Hardware {
                name: name.to_string(),
            });
        }

        let world = parent_transform * node.transform();
        let expanded = self.walk_level(node.entities(), level + 1, name, &world, None, out)?;
        if expanded {
            debug!(name, "container");
            return Ok(NodeOutcome::Container);
        }

        self.measure(node, name, material, sub_assembly, &world)
    }

    fn measure(
        &self,
        node: Node<'a>,
        name: &str,
        material: &str,
        sub_assembly: &str,
        world: &Matrix4<f64>,
    ) -> SceneResult<NodeOutcome> {
        let Some(bounds) = node.bounds() else {
            warn!(id = %node.id(), name, "no definition found for group, skipping");
            return Ok(NodeOutcome::Unmeasurable {
                id: node.id(),
                name: name.to_string(),
                reason: "bounding box could not be resolved".to_string(),
            });
        };

        let dims = match self
            .analyzer
            .analyze(bounds, &linear_part(world), self.scene.units)
        {
            Ok(dims) => dims,
            Err(err) => {
                warn!(id = %node.id(), name, %err, "node cannot be measured, skipping");
                return Ok(NodeOutcome::Unmeasurable {
                    id: node.id(),
                    name: name.to_string(),
                    reason: err.to_string(),
                });
            }
        };
        let edges = self
            .binder
            .bind(&dims.regions, node.faces(), dims.should_swap_length_width);
        let (length, width) = dims.part_sizes();

        let kind = if self.config.sheet_words.matches_any(material, name) {
            StockKind::Sheet
        } else {
            StockKind::Solid
        };
        let oriented = node.effective_material().is_some_and(|m| m.textured);

        let part = Part::builder(kind)
            .name(name)
            .sub_assembly(sub_assembly)
            .material(material)
            .dimensions(length, width, dims.thickness)
            .edges(edges)
            .oriented(oriented)
            .build(&self.format);

        debug!(name = %part.name, ?kind, length, width, thickness = dims.thickness, "part");
        Ok(NodeOutcome::Atomic(part))
    }
}
