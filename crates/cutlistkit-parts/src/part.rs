//! Cut list parts
//!
//! A [`Part`] is one atomic piece of stock with normalised dimensions.
//! Lengths are stored in millimetres; the string accessors render them in
//! whatever [`LengthFormat`] the caller hands in.

use crate::edge::EdgeSet;
use cutlistkit_core::LengthFormat;
use serde::{Deserialize, Serialize};

/// Name used when a node and all of its definitions are unnamed
pub const NONAME: &str = "noname";

/// Material used when neither the node nor its faces carry one
pub const NOT_ASSIGNED: &str = "not assigned";

const MM3_PER_M3: f64 = 1.0e9;
const MM2_PER_M2: f64 = 1.0e6;

/// Stock a part is cut from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockKind {
    /// Solid timber, measured by volume
    Solid,
    /// Sheet goods, measured by area
    Sheet,
}

impl StockKind {
    /// Label for the amount column
    pub fn amount_label(self) -> &'static str {
        match self {
            Self::Solid => "Cubic m",
            Self::Sheet => "Square m",
        }
    }
}

/// One atomic part of the cut list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub name: String,
    pub sub_assembly_name: String,
    pub material: String,
    /// Length in mm
    pub length: f64,
    /// Width in mm
    pub width: f64,
    /// Thickness in mm, never larger than length or width
    pub thickness: f64,
    /// Length net of left and right banding, in mm
    pub cutting_length: f64,
    /// Width net of up and down banding, in mm
    pub cutting_width: f64,
    pub edges: EdgeSet,
    /// Material has a directional texture
    pub oriented: bool,
    pub kind: StockKind,
}

impl Part {
    /// Start building a part of the given stock kind
    pub fn builder(kind: StockKind) -> PartBuilder {
        PartBuilder::new(kind)
    }

    /// Volume in cubic metres for solid stock, area in square metres for sheets
    pub fn amount(&self) -> f64 {
        match self.kind {
            StockKind::Solid => self.length * self.width * self.thickness / MM3_PER_M3,
            StockKind::Sheet => self.length * self.width / MM2_PER_M2,
        }
    }

    pub fn amount_label(&self) -> &'static str {
        self.kind.amount_label()
    }

    pub fn length_string(&self, fmt: &LengthFormat) -> String {
        fmt.format(self.length)
    }

    pub fn width_string(&self, fmt: &LengthFormat) -> String {
        fmt.format(self.width)
    }

    pub fn thickness_string(&self, fmt: &LengthFormat) -> String {
        fmt.format(self.thickness)
    }

    pub fn cutting_length_string(&self, fmt: &LengthFormat) -> String {
        fmt.format(self.cutting_length)
    }

    pub fn cutting_width_string(&self, fmt: &LengthFormat) -> String {
        fmt.format(self.cutting_width)
    }

    /// One-line description: `name (L, W, T) material`, using cutting sizes
    pub fn summary(&self, fmt: &LengthFormat) -> String {
        format!(
            "{} ({}, {}, {}) {}",
            self.name,
            self.cutting_length_string(fmt),
            self.cutting_width_string(fmt),
            self.thickness_string(fmt),
            self.material
        )
    }

    /// Fully independent copy of this part
    pub fn deep_clone(&self) -> Self {
        self.clone()
    }
}

/// Collects the measured values of a part and finalises the derived ones
#[derive(Debug, Clone)]
pub struct PartBuilder {
    kind: StockKind,
    name: String,
    sub_assembly_name: String,
    material: String,
    length: f64,
    width: f64,
    thickness: f64,
    edges: EdgeSet,
    oriented: bool,
}

impl PartBuilder {
    pub fn new(kind: StockKind) -> Self {
        Self {
            kind,
            name: String::new(),
            sub_assembly_name: String::new(),
            material: NOT_ASSIGNED.to_string(),
            length: 0.0,
            width: 0.0,
            thickness: 0.0,
            edges: EdgeSet::default(),
            oriented: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn sub_assembly(mut self, name: impl Into<String>) -> Self {
        self.sub_assembly_name = name.into();
        self
    }

    pub fn material(mut self, material: impl Into<String>) -> Self {
        self.material = material.into();
        self
    }

    /// Length, width and thickness in mm
    pub fn dimensions(mut self, length: f64, width: f64, thickness: f64) -> Self {
        self.length = length;
        self.width = width;
        self.thickness = thickness;
        self
    }

    pub fn edges(mut self, edges: EdgeSet) -> Self {
        self.edges = edges;
        self
    }

    pub fn oriented(mut self, oriented: bool) -> Self {
        self.oriented = oriented;
        self
    }

    /// Compute cutting sizes and settle the name.
    ///
    /// `fmt` renders the dimensions that disambiguate an unnamed part.
    pub fn build(self, fmt: &LengthFormat) -> Part {
        let cutting_length = (self.length - self.edges.length_allowance()).max(0.0);
        let cutting_width = (self.width - self.edges.width_allowance()).max(0.0);

        let trimmed = self.name.trim();
        let name = if trimmed.is_empty() || trimmed == NONAME {
            synthesized_name(fmt, self.length, self.width, self.thickness)
        } else {
            trimmed.to_string()
        };

        let material = match self.material.trim() {
            "" => NOT_ASSIGNED.to_string(),
            m => m.to_string(),
        };

        Part {
            name,
            sub_assembly_name: self.sub_assembly_name.trim().to_string(),
            material,
            length: self.length,
            width: self.width,
            thickness: self.thickness,
            cutting_length,
            cutting_width,
            edges: self.edges,
            oriented: self.oriented,
            kind: self.kind,
        }
    }
}

/// `noname_` followed by the unit-suffixed dimensions, sanitised so it can
/// be used as an identifier in exported lists.
fn synthesized_name(fmt: &LengthFormat, length: f64, width: f64, thickness: f64) -> String {
    let raw = format!(
        "{}_{}{}{}",
        NONAME,
        fmt.format_with_unit(length),
        fmt.format_with_unit(width),
        fmt.format_with_unit(thickness)
    );
    raw.chars()
        .filter(|c| !matches!(c, '\'' | '~' | '"'))
        .map(|c| match c {
            ' ' => '_',
            '/' => '-',
            other => other,
        })
        .collect()
}
