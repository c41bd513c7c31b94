//! `evac-behavior` — the shared E/R/W/X/S transition rules underlying both
//! the real-agent simulation step and the estimator's particle prediction
//! step.
//!
//! # Crate layout
//!
//! | Module              | Contents                                                        |
//! |----------------------|-----------------------------------------------------------------|
//! | [`kernel`]           | Transition rules common to both callers (E, R, X, S; not W)     |
//! | [`sim_kernel`]       | Real-agent step: group co-movement, W released by reunion       |
//! | [`estimator_kernel`] | Particle step: W released by the global `P_tr` probability      |
//! | [`error`]            | `BehaviorError`, `BehaviorResult<T>`                             |
//!
//! Mode W is the one place the two callers genuinely diverge: a real agent
//! knows its group's other locations and releases on exact reunion, while a
//! particle has no group information and releases stochastically. Every
//! other mode is byte-for-byte identical logic, which is why it lives in one
//! shared [`kernel`] module rather than being duplicated.

pub mod error;
pub mod estimator_kernel;
pub mod kernel;
pub mod sim_kernel;

#[cfg(test)]
mod tests;

pub use error::{BehaviorError, BehaviorResult};
pub use estimator_kernel::step_particle;
pub use kernel::P_IDLE;
pub use sim_kernel::step_population;
