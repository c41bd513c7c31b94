//! `evac-estimator` — a particle filter that localizes an anonymous
//! population from noisy, identity-free sensor counts alone.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                     |
//! |--------------------|----------------------------------------------------------------|
//! | [`particles`]      | `ParticleSet`: flat agent-major particle storage                |
//! | [`likelihood`]     | `ProbabilityTable`: per-particle, per-node likelihood kernel     |
//! | [`sampling`]       | `weighted_sample`, `binomial_pmf` — shared stochastic primitives |
//! | [`correspondence`] | `Association`, `CorrespondenceVector`, hypothesis construction   |
//! | [`mh`]             | Metropolis-Hastings resampling over the hypothesis pool          |
//! | [`estimator`]      | `Estimator`, `EstimatorConfig` — the per-tick predict/measure API |
//! | [`error`]          | `EstimatorError`, `EstimatorResult<T>`                           |
//!
//! Every agent carries `n` particles; a measurement step treats those `n`
//! particles per agent jointly as `n` correspondence vectors — full
//! hypotheses about which agent matched which sensor reading — refined by
//! Metropolis-Hastings before being written back as the agent's new particle
//! set. This is the anonymous data-association problem at the center of the
//! estimator: sensors report counts, never identities.

pub mod correspondence;
pub mod error;
pub mod estimator;
pub mod likelihood;
pub mod mh;
pub mod particles;
pub mod sampling;


pub use correspondence::{Association, CorrespondenceVector};
pub use error::{EstimatorError, EstimatorResult};
pub use estimator::{Estimator, EstimatorConfig};
pub use likelihood::ProbabilityTable;
pub use particles::ParticleSet;
