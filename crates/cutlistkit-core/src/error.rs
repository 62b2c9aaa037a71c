//! Error handling for CutlistKit core
//!
//! The core crate is mostly infallible: malformed word tokens are skipped
//! and missing data resolves to sentinels. What remains are unit and
//! geometry errors raised while parsing host data.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for CutlistKit core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A length unit name could not be recognised
    #[error("Unknown length unit: {0}")]
    UnknownUnit(String),

    /// A bounding box was built from no points at all
    #[error("Bounding box is empty")]
    EmptyBounds,

    /// A transform could not be used to measure a node
    #[error("Degenerate transform: {reason}")]
    DegenerateTransform {
        /// Why the transform was rejected.
        reason: String,
    },
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
