//! Graph store: topology, per-node state, and the step driver.
//!
//! Topology lives in petgraph's StableGraph; positions and velocities are
//! kept in parallel arrays indexed by [`NodeId`] for cache-friendly force
//! accumulation. Edges carry no identity of their own: an undirected edge
//! is a canonical (larger index → smaller index) pair.

mod engine;
mod node;

pub use engine::SpringGraph;
pub use node::NodeId;
