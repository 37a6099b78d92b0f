//! Spatial indexing for graph nodes.
//!
//! Two structures live here:
//! - [`BucketGrid`]: a coarse hash over insertion-time positions, kept for
//!   inspection; the force pass does not read it.
//! - [`SpatialIndex`]: an R-tree over current positions for hit testing
//!   (nearest node, rectangle selection) by interactive drivers.

mod grid;
mod rtree;

pub use grid::{BucketGrid, Cell, DEFAULT_CELL_SIZE};
pub use rtree::SpatialIndex;
