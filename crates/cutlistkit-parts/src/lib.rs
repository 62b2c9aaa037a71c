//! # CutlistKit Parts
//!
//! The product side of a cut list: [`Part`] values with their four banded
//! [`Edge`]s, the [`PartList`] counter used for hardware, and the
//! [`PartRegistry`] that keeps solid and sheet parts in discovery order
//! while indexing them by material and thickness for partitioning.

pub mod edge;
pub mod part;
pub mod part_list;
pub mod registry;
pub mod summary;

pub use edge::{Edge, EdgeSet};
pub use part::{Part, PartBuilder, StockKind, NONAME, NOT_ASSIGNED};
pub use part_list::PartList;
pub use registry::{PartKey, PartRegistry};
pub use summary::{CompactRow, MaterialTotal};
