//! R-tree point index over current node positions.
//!
//! Backs the engine's hit-testing queries (nearest node to a click,
//! nodes inside a selection rectangle). The tree is a snapshot: the
//! engine rebuilds it after positions change, which with bulk loading
//! is cheaper than per-node updates every simulation step.

use rstar::primitives::GeomWithData;
use rstar::{AABB, RTree};

use crate::graph::NodeId;
use crate::math::Vec2;

type IndexedPoint = GeomWithData<[f64; 2], NodeId>;

/// Point index for hit testing.
#[derive(Debug, Default)]
pub struct SpatialIndex {
    tree: RTree<IndexedPoint>,
}

impl SpatialIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Replace the index contents by bulk-loading `(id, position)` pairs.
    pub fn rebuild(&mut self, points: impl IntoIterator<Item = (NodeId, Vec2)>) {
        let points: Vec<IndexedPoint> = points
            .into_iter()
            .map(|(id, p)| IndexedPoint::new([p.x, p.y], id))
            .collect();
        self.tree = RTree::bulk_load(points);
    }

    /// The node closest to a point, if the index is non-empty.
    pub fn nearest(&self, p: Vec2) -> Option<NodeId> {
        self.tree.nearest_neighbor(&[p.x, p.y]).map(|pt| pt.data)
    }

    /// The node closest to a point, if any lies within `max_distance`.
    pub fn nearest_within(&self, p: Vec2, max_distance: f64) -> Option<NodeId> {
        self.tree
            .nearest_neighbor_iter_with_distance_2(&[p.x, p.y])
            .next()
            .filter(|&(_, d2)| d2 <= max_distance * max_distance)
            .map(|(pt, _)| pt.data)
    }

    /// All nodes inside the axis-aligned rectangle spanned by `lo` and `hi`.
    pub fn in_rect(&self, lo: Vec2, hi: Vec2) -> Vec<NodeId> {
        let envelope = AABB::from_corners([lo.x, lo.y], [hi.x, hi.y]);
        self.tree
            .locate_in_envelope(&envelope)
            .map(|pt| pt.data)
            .collect()
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(points: &[(u32, f64, f64)]) -> SpatialIndex {
        let mut index = SpatialIndex::new();
        index.rebuild(
            points
                .iter()
                .map(|&(id, x, y)| (NodeId(id), Vec2::new(x, y))),
        );
        index
    }

    #[test]
    fn test_nearest() {
        let index = index_of(&[(0, 0.0, 0.0), (1, 10.0, 10.0), (2, 5.0, 5.0)]);

        assert_eq!(index.nearest(Vec2::new(0.0, 0.0)), Some(NodeId(0)));
        assert_eq!(index.nearest(Vec2::new(6.0, 6.0)), Some(NodeId(2)));
        assert_eq!(index.nearest(Vec2::new(11.0, 11.0)), Some(NodeId(1)));
    }

    #[test]
    fn test_nearest_on_empty() {
        let index = SpatialIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.nearest(Vec2::ZERO), None);
    }

    #[test]
    fn test_nearest_within() {
        let index = index_of(&[(0, 0.0, 0.0), (1, 10.0, 10.0)]);

        assert_eq!(index.nearest_within(Vec2::ZERO, 5.0), Some(NodeId(0)));
        assert_eq!(index.nearest_within(Vec2::new(5.0, 5.0), 1.0), None);
        // Node 0 is ~7.07 away from (5, 5).
        assert_eq!(
            index.nearest_within(Vec2::new(5.0, 5.0), 8.0),
            Some(NodeId(0))
        );
    }

    #[test]
    fn test_in_rect() {
        let index = index_of(&[(0, 0.0, 0.0), (1, 5.0, 5.0), (2, 10.0, 10.0)]);

        let hits = index.in_rect(Vec2::new(-1.0, -1.0), Vec2::new(6.0, 6.0));
        assert_eq!(hits.len(), 2);
        assert!(hits.contains(&NodeId(0)));
        assert!(hits.contains(&NodeId(1)));
    }

    #[test]
    fn test_rebuild_replaces_contents() {
        let mut index = index_of(&[(0, 0.0, 0.0)]);
        index.rebuild([(NodeId(1), Vec2::new(1.0, 1.0)), (NodeId(2), Vec2::new(2.0, 2.0))]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.nearest(Vec2::ZERO), Some(NodeId(1)));
    }
}
