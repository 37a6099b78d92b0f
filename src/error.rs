//! Error type for graph mutations.

use thiserror::Error;

use crate::graph::NodeId;

/// Errors returned by graph mutations.
///
/// These indicate caller bugs (dangling indices, self-loops) rather than
/// runtime conditions; the engine performs no I/O and has no retryable
/// failure modes. A failed mutation leaves the graph unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge or adjacency argument named a node that does not exist,
    /// or attempted to connect a node to itself.
    #[error("invalid node reference: {0}")]
    InvalidReference(NodeId),
}
