//! Population synthesis error type.

use thiserror::Error;

/// Errors produced by [`crate::population::PopulationBuilder`].
///
/// Both variants are construction-time misconfigurations, caught before the
/// tick loop starts, never mid-run.
#[derive(Debug, Error)]
pub enum PopulationError {
    #[error("cannot build a population against a road graph with no nodes")]
    EmptyGraph,

    #[error("road graph has no rendezvous nodes but grouped agents need one")]
    NoRendezvousNodes,
}

pub type PopulationResult<T> = Result<T, PopulationError>;
