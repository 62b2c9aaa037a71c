//! Edge binding
//!
//! Each side region of a part takes the material of the largest face whose
//! centre lies inside it. The bound material is then looked up in the edge
//! material rules to find its banding thickness and output slot.

use crate::dimensions::{Regions, Side};
use crate::model::Face;
use cutlistkit_parts::{Edge, EdgeSet};
use cutlistkit_settings::CutlistConfig;
use tracing::debug;

/// Binds side faces to edge materials
#[derive(Debug, Clone, Copy)]
pub struct EdgeBinder<'a> {
    config: &'a CutlistConfig,
}

impl<'a> EdgeBinder<'a> {
    pub fn new(config: &'a CutlistConfig) -> Self {
        Self { config }
    }

    /// Bind faces to the four side edges.
    ///
    /// `faces` are in the same local space as `regions`. With
    /// `swap_length_width` the result is turned a quarter to match the
    /// swapped length and width.
    pub fn bind<'f, I>(&self, regions: &Regions, faces: I, swap_length_width: bool) -> EdgeSet
    where
        I: IntoIterator<Item = &'f Face>,
    {
        let sides = regions.all();
        let mut holders: [Option<&Face>; 6] = [None; 6];

        for face in faces {
            if face.material.is_none() {
                continue;
            }
            let center = face.bounds.center();
            for (slot, (_, region)) in holders.iter_mut().zip(sides.iter()) {
                if !region.contains(&center) {
                    continue;
                }
                match slot {
                    Some(holder) if face.area <= holder.area => {}
                    _ => *slot = Some(face),
                }
            }
        }

        let mut edges = EdgeSet::default();
        for ((side, _), holder) in sides.iter().zip(holders) {
            let target = match side {
                Side::Left => &mut edges.left,
                Side::Right => &mut edges.right,
                Side::Up => &mut edges.up,
                Side::Down => &mut edges.down,
                Side::Front | Side::Back => continue,
            };
            if let Some(material) = holder.and_then(|face| face.material.as_ref()) {
                *target = self.resolve(&material.name);
            }
        }

        if swap_length_width {
            edges.rotate();
        }
        edges
    }

    /// Edge for a material, with thickness and slot from the first
    /// matching rule. Unmatched materials keep zero thickness and slot 0.
    pub fn resolve(&self, material: &str) -> Edge {
        let mut edge = Edge::with_material(material);
        if let Some(rule) = self.config.edge_rule_for(material) {
            edge.thickness = rule.thickness_mm;
            edge.output_index = rule.output_index;
        } else {
            debug!(material, "no edge material rule matches");
        }
        edge
    }
}
