//! # CutlistKit Scene
//!
//! Turns a nested component scene into cut list parts.
//!
//! The [`Scene`] model mirrors what a modelling host exposes: component
//! instances that share a [`Definition`], groups that own their entities,
//! faces with optional materials, and 4x4 transforms. The [`SceneWalker`]
//! descends through it, counting hardware, expanding containers and
//! measuring atomic nodes with the [`DimensionAnalyzer`] and
//! [`EdgeBinder`]. [`Reporter`] runs one complete discovery session.

pub mod dimensions;
pub mod edges;
pub mod error;
pub mod model;
pub mod reporter;
pub mod walker;

pub use dimensions::{Dimensions, DimensionAnalyzer, Regions, Side};
pub use edges::EdgeBinder;
pub use error::{SceneError, SceneResult};
pub use model::{
    Definition, DefinitionId, Entity, EntityId, Face, Group, Instance, Material, Node, Scene,
    Selection,
};
pub use reporter::{CutlistReport, Discovery, Reporter, SkippedNode};
pub use walker::{NodeOutcome, SceneWalker, WalkOutput};
