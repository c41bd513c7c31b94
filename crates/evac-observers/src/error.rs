//! Observer construction errors.

use thiserror::Error;

/// Errors raised while building a sensor layout.
///
/// These are construction-time misconfigurations, not steady-state
/// conditions — see §7's distinction between fatal builder errors and
/// recoverable per-tick degradations.
#[derive(Debug, Error)]
pub enum ObserversError {
    #[error("requested {requested} sensor nodes but the graph only has {available} nodes")]
    NotEnoughNodes { requested: usize, available: usize },

    #[error("cannot place sensors on an empty graph")]
    EmptyGraph,
}

pub type ObserversResult<T> = Result<T, ObserversError>;
