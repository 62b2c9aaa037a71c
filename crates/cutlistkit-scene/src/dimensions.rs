//! Dimension analysis
//!
//! Measures an atomic node: its world-space extents, which axis is the
//! thickness, and the six side regions of its local bounding box that edge
//! binding tests faces against.
//!
//! The thickness axis decides how length and width are laid out:
//!
//! | thickness | length | width | left / right | down / up | back / front |
//! |-----------|--------|-------|--------------|-----------|--------------|
//! | Z         | X      | Y     | X min / max  | Y min / max | Z min / max |
//! | Y         | Z      | X     | Z min / max  | X min / max | Y min / max |
//! | X         | Y      | Z     | Y min / max  | Z min / max | X min / max |
//!
//! With Y as thickness the grain axis ends up as width, so those parts are
//! turned a quarter: the edges rotate and length and width swap.

use cutlistkit_core::{axis_scales, Axis, BoundingBox, Error, LengthUnit, Result};
use nalgebra::{Matrix3, Vector3};
use serde::Serialize;
use tracing::debug;

// Corner indices of each box face, see `cutlistkit_core::geometry`.
const X_MIN: [usize; 4] = [0, 2, 4, 6];
const X_MAX: [usize; 4] = [1, 3, 5, 7];
const Y_MIN: [usize; 4] = [0, 1, 4, 5];
const Y_MAX: [usize; 4] = [2, 3, 6, 7];
const Z_MIN: [usize; 4] = [0, 1, 2, 3];
const Z_MAX: [usize; 4] = [4, 5, 6, 7];

/// A side of a part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Left,
    Right,
    Up,
    Down,
    Front,
    Back,
}

/// The six side regions of a node's local bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Regions {
    pub left: BoundingBox,
    pub right: BoundingBox,
    pub up: BoundingBox,
    pub down: BoundingBox,
    pub front: BoundingBox,
    pub back: BoundingBox,
}

impl Regions {
    fn from_faces(bounds: &BoundingBox, faces: [[usize; 4]; 6]) -> Self {
        let [left, right, up, down, front, back] = faces.map(|corners| bounds.sub_box(corners));
        Self {
            left,
            right,
            up,
            down,
            front,
            back,
        }
    }

    /// Every region with its side
    pub fn all(&self) -> [(Side, &BoundingBox); 6] {
        [
            (Side::Left, &self.left),
            (Side::Right, &self.right),
            (Side::Up, &self.up),
            (Side::Down, &self.down),
            (Side::Front, &self.front),
            (Side::Back, &self.back),
        ]
    }
}

/// Measured size and layout of a node
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    pub thickness_axis: Axis,
    /// Length in mm, before any quarter turn
    pub length: f64,
    /// Width in mm, before any quarter turn
    pub width: f64,
    /// Thickness in mm
    pub thickness: f64,
    /// World extents in mm along local X, Y, Z
    pub extents: Vector3<f64>,
    pub regions: Regions,
    pub should_swap_length_width: bool,
}

impl Dimensions {
    /// Length and width of the finished part, after the quarter turn
    pub fn part_sizes(&self) -> (f64, f64) {
        if self.should_swap_length_width {
            (self.width, self.length)
        } else {
            (self.length, self.width)
        }
    }
}

/// Measures atomic nodes
#[derive(Debug, Clone, Copy, Default)]
pub struct DimensionAnalyzer;

impl DimensionAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Measure a node.
    ///
    /// * `bounds` - local bounding box in `units`
    /// * `linear` - rotation and scale of the local-to-world transform
    pub fn analyze(
        &self,
        bounds: &BoundingBox,
        linear: &Matrix3<f64>,
        units: LengthUnit,
    ) -> Result<Dimensions> {
        let scales = axis_scales(linear);
        if let Some(axis) = scales.iter().position(|s| !s.is_finite() || *s == 0.0) {
            return Err(Error::DegenerateTransform {
                reason: format!("scale along local axis {} is {}", axis, scales[axis]),
            });
        }

        let extents = bounds
            .extents()
            .component_mul(&scales)
            .map(|e| units.to_mm(e));
        let (x, y, z) = (extents.x, extents.y, extents.z);

        let thickness_axis = thickness_axis(x, y, z);
        let (length, width, thickness, faces, swap) = match thickness_axis {
            Axis::Z => (x, y, z, [X_MIN, X_MAX, Y_MAX, Y_MIN, Z_MAX, Z_MIN], false),
            Axis::Y => (z, x, y, [Z_MIN, Z_MAX, X_MAX, X_MIN, Y_MAX, Y_MIN], true),
            Axis::X => (y, z, x, [Y_MIN, Y_MAX, Z_MAX, Z_MIN, X_MAX, X_MIN], false),
        };

        debug!(
            axis = %thickness_axis,
            length, width, thickness, swap, "measured node"
        );

        Ok(Dimensions {
            thickness_axis,
            length,
            width,
            thickness,
            extents,
            regions: Regions::from_faces(bounds, faces),
            should_swap_length_width: swap,
        })
    }
}

/// Axis with the smallest extent; ties prefer Z, then Y
pub fn thickness_axis(x: f64, y: f64, z: f64) -> Axis {
    if z <= y && z <= x {
        Axis::Z
    } else if y <= x {
        Axis::Y
    } else {
        Axis::X
    }
}
