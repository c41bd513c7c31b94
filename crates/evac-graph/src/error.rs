//! Road-graph error type.

use thiserror::Error;

use evac_core::NodeId;

/// Errors produced by `evac-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error("graph has nodes but no exit node was marked")]
    NoExitNodes,
}

pub type GraphResult<T> = Result<T, GraphError>;
