//! Coarse spatial hash over insertion-time positions.
//!
//! Maps a grid cell (floor division of each coordinate by a fixed cell
//! size) to the nodes whose position fell in that cell when they were
//! inserted. The grid is populated on insertion only and is never updated
//! as the simulation moves nodes, so entries reflect where a node started,
//! not where it is. Force computation does not consult it.

use std::collections::HashMap;

use crate::graph::NodeId;
use crate::math::Vec2;

/// Default cell size in graph-space units.
pub const DEFAULT_CELL_SIZE: f64 = 10.0;

/// Grid cell key: floor(coordinate / cell size) per axis.
pub type Cell = (i64, i64);

/// Insertion-time spatial hash.
#[derive(Debug, Clone)]
pub struct BucketGrid {
    cells: HashMap<Cell, Vec<NodeId>>,
    cell_size: f64,
}

impl BucketGrid {
    /// Create an empty grid with the default cell size.
    pub fn new() -> Self {
        Self::with_cell_size(DEFAULT_CELL_SIZE)
    }

    /// Create an empty grid with a custom cell size.
    pub fn with_cell_size(cell_size: f64) -> Self {
        Self {
            cells: HashMap::new(),
            cell_size,
        }
    }

    /// The cell a position falls in.
    pub fn cell_of(&self, position: Vec2) -> Cell {
        (
            (position.x / self.cell_size).floor() as i64,
            (position.y / self.cell_size).floor() as i64,
        )
    }

    /// Record a node under the cell of its position.
    pub fn insert(&mut self, id: NodeId, position: Vec2) {
        let cell = self.cell_of(position);
        self.cells.entry(cell).or_default().push(id);
    }

    /// Nodes recorded in a cell, in insertion order.
    pub fn nodes_in_cell(&self, cell: Cell) -> &[NodeId] {
        self.cells.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of non-empty cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Total number of recorded nodes.
    pub fn len(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }

    /// Check if the grid is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Default for BucketGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_assignment() {
        let grid = BucketGrid::new();
        assert_eq!(grid.cell_of(Vec2::new(0.0, 0.0)), (0, 0));
        assert_eq!(grid.cell_of(Vec2::new(9.9, 9.9)), (0, 0));
        assert_eq!(grid.cell_of(Vec2::new(10.0, 0.0)), (1, 0));
        assert_eq!(grid.cell_of(Vec2::new(25.0, -5.0)), (2, -1));
    }

    #[test]
    fn test_negative_coordinates_floor() {
        // Floor division, not truncation: -0.1 lands in cell -1.
        let grid = BucketGrid::new();
        assert_eq!(grid.cell_of(Vec2::new(-0.1, -10.0)), (-1, -1));
        assert_eq!(grid.cell_of(Vec2::new(-10.1, 0.0)), (-2, 0));
    }

    #[test]
    fn test_insert_groups_by_cell() {
        let mut grid = BucketGrid::new();
        grid.insert(NodeId(0), Vec2::new(1.0, 1.0));
        grid.insert(NodeId(1), Vec2::new(8.0, 3.0));
        grid.insert(NodeId(2), Vec2::new(15.0, 0.0));

        assert_eq!(grid.nodes_in_cell((0, 0)), &[NodeId(0), NodeId(1)]);
        assert_eq!(grid.nodes_in_cell((1, 0)), &[NodeId(2)]);
        assert_eq!(grid.nodes_in_cell((5, 5)), &[] as &[NodeId]);
        assert_eq!(grid.cell_count(), 2);
        assert_eq!(grid.len(), 3);
    }

    #[test]
    fn test_custom_cell_size() {
        let mut grid = BucketGrid::with_cell_size(2.0);
        grid.insert(NodeId(0), Vec2::new(3.0, 3.0));
        assert_eq!(grid.nodes_in_cell((1, 1)), &[NodeId(0)]);
    }

    #[test]
    fn test_empty() {
        let grid = BucketGrid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.len(), 0);
    }
}
