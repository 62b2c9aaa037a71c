//! Geometry helpers
//!
//! Axis-aligned bounding boxes in a node's local space and the transform
//! measurements the dimension analysis needs. Corner numbering follows the
//! usual modelling-host convention: bit 0 of the index selects max X,
//! bit 1 max Y and bit 2 max Z.
//!
//! ```text
//!        6-------7
//!       /|      /|
//!      4-------5 |
//!      | 2-----|-3
//!      |/      |/
//!      0-------1
//! ```

use crate::error::{Error, Result};
use nalgebra::{Matrix3, Matrix4, Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute slack used when testing whether a point lies inside a box.
///
/// Face regions are flat boxes, so an exact comparison would miss face
/// centres that carry rounding noise from the host.
pub const CONTAINMENT_TOLERANCE: f64 = 1.0e-6;

/// One of the three model axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Index of the axis in a vector (X=0, Y=1, Z=2)
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
            Self::Z => write!(f, "Z"),
        }
    }
}

/// Axis-aligned bounding box
///
/// Deserialized corners are reordered like [`BoundingBox::new`], so `min`
/// never exceeds `max` on any axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBounds")]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

#[derive(Deserialize)]
struct RawBounds {
    min: Point3<f64>,
    max: Point3<f64>,
}

impl From<RawBounds> for BoundingBox {
    fn from(raw: RawBounds) -> Self {
        Self::new(raw.min, raw.max)
    }
}

impl BoundingBox {
    /// Create a box from two opposite corners, in any order
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Box spanning the origin and the given extents
    pub fn from_size(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::origin(), Point3::new(x, y, z))
    }

    /// Smallest box containing every point
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point3<f64>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next().ok_or(Error::EmptyBounds)?;
        let mut bounds = Self::new(first, first);
        for point in iter {
            bounds.add_point(&point);
        }
        Ok(bounds)
    }

    /// Grow the box to include a point
    pub fn add_point(&mut self, point: &Point3<f64>) {
        self.min = Point3::new(
            self.min.x.min(point.x),
            self.min.y.min(point.y),
            self.min.z.min(point.z),
        );
        self.max = Point3::new(
            self.max.x.max(point.x),
            self.max.y.max(point.y),
            self.max.z.max(point.z),
        );
    }

    /// Corner `index` (0..8), see the module docs for numbering
    pub fn corner(&self, index: usize) -> Point3<f64> {
        debug_assert!(index < 8, "bounding box corner index out of range");
        Point3::new(
            if index & 1 == 0 { self.min.x } else { self.max.x },
            if index & 2 == 0 { self.min.y } else { self.max.y },
            if index & 4 == 0 { self.min.z } else { self.max.z },
        )
    }

    /// All eight corners in index order
    pub fn corners(&self) -> [Point3<f64>; 8] {
        std::array::from_fn(|i| self.corner(i))
    }

    /// Smallest box containing the given corners of this box
    pub fn sub_box(&self, corners: [usize; 4]) -> Self {
        let mut bounds = Self::new(self.corner(corners[0]), self.corner(corners[0]));
        for &index in &corners[1..] {
            bounds.add_point(&self.corner(index));
        }
        bounds
    }

    /// Centre point
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Extents along X, Y and Z
    pub fn extents(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Extent along X
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along Y
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Extent along Z
    pub fn depth(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// Inclusive containment test with [`CONTAINMENT_TOLERANCE`] slack
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        (0..3).all(|i| {
            point[i] >= self.min[i] - CONTAINMENT_TOLERANCE
                && point[i] <= self.max[i] + CONTAINMENT_TOLERANCE
        })
    }
}

/// The 3x3 linear part (rotation and scale) of an affine transform
pub fn linear_part(transform: &Matrix4<f64>) -> Matrix3<f64> {
    transform.fixed_view::<3, 3>(0, 0).into_owned()
}

/// Scale a transform applies along each local axis.
///
/// Each scale is the Euclidean norm of the matching basis column, which
/// is unaffected by any rotation composed into the transform.
pub fn axis_scales(linear: &Matrix3<f64>) -> Vector3<f64> {
    Vector3::new(
        linear.column(0).norm(),
        linear.column(1).norm(),
        linear.column(2).norm(),
    )
}
