//! Graphspring - incremental force-directed graph layout.
//!
//! Build a graph one node at a time (optionally wiring each new node to
//! existing ones), then repeatedly call [`SpringGraph::step`] to relax the
//! embedding: every edge acts as a zero-length spring and every node pair
//! exchanges an inverse-square pairwise force, integrated with
//! semi-implicit Euler. Rendering is out of scope; a driver reads node
//! positions and edges between steps and maps them to its own display
//! coordinates.
//!
//! # Architecture
//!
//! - `math`: the `Vec2` value type
//! - `graph`: incremental graph store (petgraph-backed) with per-node
//!   position and velocity buffers
//! - `layout`: force accumulation and the integrator
//! - `spatial`: insertion-time bucket grid plus an R-tree for hit testing
//! - `export`: TikZ output and plain-text position dumps
//!
//! # Example
//!
//! ```
//! use graphspring::{LayoutConfig, SpringGraph, Vec2};
//!
//! let mut g = SpringGraph::new();
//! let u = g.insert_node(Vec2::new(-10.0, 0.0));
//! let v = g.insert_node(Vec2::new(10.0, 0.0));
//! g.insert_edge(u, v)?;
//!
//! g.step_n(&LayoutConfig::default(), 10);
//! let (lowest, highest) = g.bounding_box();
//! assert!(lowest.x <= -10.0 && highest.x >= 10.0);
//! # Ok::<(), graphspring::GraphError>(())
//! ```

pub mod error;
pub mod export;
pub mod graph;
pub mod layout;
pub mod math;
pub mod spatial;

pub use error::GraphError;
pub use export::{dump_positions, to_tikz};
pub use graph::{NodeId, SpringGraph};
pub use layout::LayoutConfig;
pub use math::Vec2;
