//! SpringGraph - incremental graph store and simulation driver.
//!
//! The SpringGraph stores the topology in petgraph's StableGraph and keeps
//! per-node positions and velocities in parallel buffers. Indices are dense
//! and stable because the graph only grows: there is no node or edge
//! removal, and no operation ever decreases the node count.
//!
//! An undirected logical edge is stored exactly once, as a directed edge
//! from the larger (younger) index to the smaller (older) one. That halves
//! the bookkeeping and gives every edge a canonical orientation; queries
//! normalize their arguments so the storage direction is not observable.

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use tracing::{debug, trace};

use crate::error::GraphError;
use crate::layout::{LayoutConfig, forces, integrate};
use crate::math::Vec2;
use crate::spatial::{BucketGrid, SpatialIndex};

use super::node::NodeId;

/// Running axis-aligned bounding box over every position ever observed.
///
/// Seeded with the infinity sentinels so the first real position tightens
/// both corners; sentinels are only compared against, never combined
/// arithmetically with positions. The box never shrinks.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    lowest: Vec2,
    highest: Vec2,
}

impl Bounds {
    fn new() -> Self {
        Self {
            lowest: Vec2::INFINITY,
            highest: Vec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    fn include(&mut self, p: Vec2) {
        if p.x < self.lowest.x {
            self.lowest.x = p.x;
        }
        if p.y < self.lowest.y {
            self.lowest.y = p.y;
        }
        if p.x > self.highest.x {
            self.highest.x = p.x;
        }
        if p.y > self.highest.y {
            self.highest.y = p.y;
        }
    }
}

/// The incremental force-directed layout graph.
///
/// This struct manages:
/// - Graph topology via petgraph (canonical younger→older edge storage)
/// - Position/velocity buffers indexed by [`NodeId`]
/// - The monotonic bounding box of all observed positions
/// - The insertion-time bucket grid
/// - An R-tree over current positions for hit testing
pub struct SpringGraph {
    graph: StableDiGraph<(), ()>,
    positions: Vec<Vec2>,
    velocities: Vec<Vec2>,
    bounds: Bounds,
    buckets: BucketGrid,
    spatial: SpatialIndex,
    spatial_stale: bool,
}

impl SpringGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: StableDiGraph::new(),
            positions: Vec::new(),
            velocities: Vec::new(),
            bounds: Bounds::new(),
            buckets: BucketGrid::new(),
            spatial: SpatialIndex::new(),
            spatial_stale: false,
        }
    }

    /// Create a graph with pre-allocated capacity.
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            graph: StableDiGraph::with_capacity(node_capacity, edge_capacity),
            positions: Vec::with_capacity(node_capacity),
            velocities: Vec::with_capacity(node_capacity),
            bounds: Bounds::new(),
            buckets: BucketGrid::new(),
            spatial: SpatialIndex::new(),
            spatial_stale: false,
        }
    }

    // =========================================================================
    // Node Operations
    // =========================================================================

    /// Insert an unconnected node at `position`, with zero velocity.
    ///
    /// Returns the new index, always equal to the pre-call node count.
    pub fn insert_node(&mut self, position: Vec2) -> NodeId {
        let id = self.push_node(position);
        trace!(%id, %position, "inserted node");
        id
    }

    /// Insert a node at `position` with edges to the given existing nodes.
    ///
    /// Every entry in `adjacent` must already be in the graph; otherwise
    /// `InvalidReference` is returned and nothing is inserted. Duplicate
    /// entries collapse to a single edge. The new node has the highest
    /// index, so its edges are already in canonical orientation.
    pub fn insert_node_adjacent(
        &mut self,
        position: Vec2,
        adjacent: &[NodeId],
    ) -> Result<NodeId, GraphError> {
        for &neighbor in adjacent {
            self.check_reference(neighbor)?;
        }

        let id = self.push_node(position);
        for &neighbor in adjacent {
            self.record_edge(id, neighbor);
        }
        trace!(%id, %position, degree = adjacent.len(), "inserted node");
        Ok(id)
    }

    fn push_node(&mut self, position: Vec2) -> NodeId {
        let index = self.graph.add_node(());
        let id = NodeId(index.index() as u32);

        self.positions.push(position);
        self.velocities.push(Vec2::ZERO);
        self.bounds.include(position);
        self.buckets.insert(id, position);
        self.spatial_stale = true;
        id
    }

    /// Get the number of nodes.
    pub fn node_count(&self) -> u32 {
        self.positions.len() as u32
    }

    /// Get a node's position.
    pub fn position(&self, id: NodeId) -> Option<Vec2> {
        self.positions.get(id.index()).copied()
    }

    /// Get a node's velocity.
    pub fn velocity(&self, id: NodeId) -> Option<Vec2> {
        self.velocities.get(id.index()).copied()
    }

    /// All positions, indexed by node id.
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// All velocities, indexed by node id.
    pub fn velocities(&self) -> &[Vec2] {
        &self.velocities
    }

    /// Overwrite a node's position, extending the bounding box.
    ///
    /// Velocity is untouched, as is the insertion-time bucket grid.
    pub fn update_position(&mut self, id: NodeId, position: Vec2) -> Result<(), GraphError> {
        self.check_reference(id)?;
        self.positions[id.index()] = position;
        self.bounds.include(position);
        self.spatial_stale = true;
        Ok(())
    }

    // =========================================================================
    // Edge Operations
    // =========================================================================

    /// Make `(a, b)` an edge.
    ///
    /// Self-loops and references to missing nodes are rejected with
    /// `InvalidReference` without mutating the graph. Inserting an edge
    /// that already exists (in either argument order) is a no-op.
    pub fn insert_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
        self.check_reference(a)?;
        self.check_reference(b)?;
        if a == b {
            return Err(GraphError::InvalidReference(a));
        }

        let (owner, older) = if a > b { (a, b) } else { (b, a) };
        if self.record_edge(owner, older) {
            trace!(%owner, %older, "inserted edge");
        }
        Ok(())
    }

    /// Record a canonical `owner → older` edge unless it already exists.
    fn record_edge(&mut self, owner: NodeId, older: NodeId) -> bool {
        let from = NodeIndex::new(owner.index());
        let to = NodeIndex::new(older.index());
        if self.graph.find_edge(from, to).is_some() {
            return false;
        }
        self.graph.add_edge(from, to, ());
        true
    }

    /// Return true if `(a, b)` is an edge, in either argument order.
    pub fn is_edge(&self, a: NodeId, b: NodeId) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        let (owner, older) = if a > b { (a, b) } else { (b, a) };
        self.graph
            .find_edge(NodeIndex::new(owner.index()), NodeIndex::new(older.index()))
            .is_some()
    }

    /// Get the number of edges.
    pub fn edge_count(&self) -> u32 {
        self.graph.edge_count() as u32
    }

    /// Neighbors of a node, regardless of which endpoint owns the record.
    ///
    /// Empty for an id that is not in the graph.
    pub fn neighbors_of(&self, id: NodeId) -> Vec<NodeId> {
        if !self.contains(id) {
            return Vec::new();
        }
        self.graph
            .neighbors_undirected(NodeIndex::new(id.index()))
            .map(|n| NodeId(n.index() as u32))
            .collect()
    }

    /// Every stored edge as a canonical `(owner, older)` pair.
    ///
    /// Pairs are ordered by owner, then by per-owner insertion order, so
    /// the result is a deterministic function of the insertion history.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut pairs = Vec::with_capacity(self.graph.edge_count());
        for index in self.graph.node_indices() {
            let owner = NodeId(index.index() as u32);
            // petgraph yields outgoing edges newest-first; restore insertion order.
            let mut owned: Vec<NodeId> = self
                .graph
                .edges(index)
                .map(|e| NodeId(e.target().index() as u32))
                .collect();
            owned.reverse();
            pairs.extend(owned.into_iter().map(|older| (owner, older)));
        }
        pairs
    }

    // =========================================================================
    // Simulation
    // =========================================================================

    /// Advance the simulation by one tick.
    ///
    /// Forces for all nodes are accumulated from a single snapshot of the
    /// positions, then every node is integrated and the bounding box is
    /// extended with its new position. The call is synchronous: positions
    /// are consistent for reading as soon as it returns.
    pub fn step(&mut self, config: &LayoutConfig) {
        let mut net = vec![Vec2::ZERO; self.positions.len()];

        forces::accumulate_spring(
            &mut net,
            &self.positions,
            self.graph
                .edge_references()
                .map(|e| (e.source().index(), e.target().index())),
            config.spring_factor,
        );
        forces::accumulate_repulsion(&mut net, &self.positions, config.repulse_factor);

        integrate::advance(&mut self.positions, &mut self.velocities, &net, config.dt);
        for &p in &self.positions {
            self.bounds.include(p);
        }
        self.spatial_stale = true;

        debug!(
            nodes = self.positions.len(),
            edges = self.graph.edge_count(),
            "advanced one step"
        );
    }

    /// Advance the simulation by `n` ticks.
    pub fn step_n(&mut self, config: &LayoutConfig, n: u32) {
        for _ in 0..n {
            self.step(config);
        }
    }

    // =========================================================================
    // Spatial Queries
    // =========================================================================

    /// Find the node nearest to a point, by current position.
    pub fn nearest_node(&mut self, p: Vec2) -> Option<NodeId> {
        self.refresh_spatial();
        self.spatial.nearest(p)
    }

    /// Find the nearest node within a maximum distance.
    pub fn nearest_node_within(&mut self, p: Vec2, max_distance: f64) -> Option<NodeId> {
        self.refresh_spatial();
        self.spatial.nearest_within(p, max_distance)
    }

    /// Find all nodes inside a rectangle, by current position.
    pub fn nodes_in_rect(&mut self, lo: Vec2, hi: Vec2) -> Vec<NodeId> {
        self.refresh_spatial();
        self.spatial.in_rect(lo, hi)
    }

    fn refresh_spatial(&mut self) {
        if self.spatial_stale {
            self.spatial.rebuild(
                self.positions
                    .iter()
                    .enumerate()
                    .map(|(i, &p)| (NodeId(i as u32), p)),
            );
            self.spatial_stale = false;
        }
    }

    /// The insertion-time bucket grid.
    pub fn buckets(&self) -> &BucketGrid {
        &self.buckets
    }

    // =========================================================================
    // Utilities
    // =========================================================================

    /// The running bounding box as `(lowest, highest)` corners.
    ///
    /// While the graph is empty the corners are the `+inf`/`-inf`
    /// sentinels; the first inserted node tightens both.
    pub fn bounding_box(&self) -> (Vec2, Vec2) {
        (self.bounds.lowest, self.bounds.highest)
    }

    fn contains(&self, id: NodeId) -> bool {
        id.index() < self.positions.len()
    }

    fn check_reference(&self, id: NodeId) -> Result<(), GraphError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(GraphError::InvalidReference(id))
        }
    }
}

impl Default for SpringGraph {
    fn default() -> Self {
        Self::new()
    }
}
