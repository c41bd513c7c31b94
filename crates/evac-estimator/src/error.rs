//! Estimator construction errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("cannot build particles for an empty population")]
    EmptyPopulation,

    #[error("cannot place particles on an empty road graph")]
    EmptyGraph,

    #[error("particle count per agent must be at least 1, got {0}")]
    ZeroParticles(usize),
}

pub type EstimatorResult<T> = Result<T, EstimatorError>;
