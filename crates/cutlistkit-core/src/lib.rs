//! # CutlistKit Core
//!
//! Core types and utilities shared by the CutlistKit crates:
//! length units and display formatting, the word matcher used for
//! classifying parts by name or material, and the small amount of
//! geometry the cut list needs (bounding boxes, transform scales).

pub mod error;
pub mod geometry;
pub mod units;
pub mod words;

pub use error::{Error, Result};
pub use geometry::{axis_scales, linear_part, Axis, BoundingBox, CONTAINMENT_TOLERANCE};
pub use units::{format_length, get_unit_label, LengthFormat, LengthUnit};
pub use words::{matches, WordList};
