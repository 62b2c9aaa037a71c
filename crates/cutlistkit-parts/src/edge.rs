//! Edge banding records

use serde::{Deserialize, Serialize};

/// Banding on one side face of a part
///
/// Two edges are equal when they carry the same material and thickness.
/// The output index is a display slot chosen by the edge-material rule and
/// does not take part in equality.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Edge {
    /// Banding material name, `None` when the side face has no material
    pub material: Option<String>,
    /// Banding thickness in millimetres
    pub thickness: f64,
    /// Output slot assigned by the matching edge-material rule
    pub output_index: u32,
}

impl Edge {
    /// An edge carrying `material` with no banding rule applied yet
    pub fn with_material(material: impl Into<String>) -> Self {
        Self {
            material: Some(material.into()),
            ..Self::default()
        }
    }

    /// True if a material was bound to this edge
    pub fn is_bound(&self) -> bool {
        self.material.is_some()
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.material == other.material && self.thickness == other.thickness
    }
}

/// The four side edges of a part
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeSet {
    pub up: Edge,
    pub down: Edge,
    pub left: Edge,
    pub right: Edge,
}

impl EdgeSet {
    /// Quarter-turn the edge roles: up moves to right, right to down,
    /// down to left and left to up.
    pub fn rotate(&mut self) {
        let up = std::mem::take(&mut self.up);
        self.up = std::mem::replace(&mut self.left, std::mem::take(&mut self.down));
        self.down = std::mem::replace(&mut self.right, up);
    }

    /// Banding removed from the length (left and right edges)
    pub fn length_allowance(&self) -> f64 {
        self.left.thickness + self.right.thickness
    }

    /// Banding removed from the width (up and down edges)
    pub fn width_allowance(&self) -> f64 {
        self.up.thickness + self.down.thickness
    }

    /// Output indices in display order: up, down, left, right
    pub fn output_indices(&self) -> [u32; 4] {
        [
            self.up.output_index,
            self.down.output_index,
            self.left.output_index,
            self.right.output_index,
        ]
    }
}
