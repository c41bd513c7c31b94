//! Errors surfaced while assembling or running a [`crate::Sim`].

use evac_estimator::EstimatorError;
use evac_observers::ObserversError;
use evac_population::PopulationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("population synthesis failed: {0}")]
    Population(#[from] PopulationError),

    #[error("sensor layout failed: {0}")]
    Observers(#[from] ObserversError),

    #[error("estimator construction failed: {0}")]
    Estimator(#[from] EstimatorError),
}

pub type SimResult<T> = Result<T, SimError>;
