//! Error types for scene traversal
//!
//! Most irregularities in a scene are recoverable and never surface here:
//! missing names and materials resolve to sentinels, and nodes that cannot
//! be measured are skipped and reported. What remains are
//! structural faults in the scene description itself.

use crate::model::{DefinitionId, EntityId};
use thiserror::Error;

/// Errors raised while loading or walking a scene
#[derive(Error, Debug)]
pub enum SceneError {
    /// An instance refers to a definition the scene does not contain
    #[error("Instance {instance} refers to unknown definition {definition}")]
    UnknownDefinition {
        instance: EntityId,
        definition: DefinitionId,
    },

    /// Nesting went deeper than the configured limit
    #[error("Scene nesting exceeds the depth limit of {limit} (below '{at}')")]
    DepthLimitExceeded { limit: usize, at: String },

    /// The selection handed to the reporter is empty
    #[error("Nothing is selected")]
    NothingSelected,

    /// The scene description could not be parsed
    #[error("Invalid scene description: {0}")]
    Parse(#[from] serde_json::Error),

    /// I/O error while reading a scene file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for scene operations
pub type SceneResult<T> = Result<T, SceneError>;
