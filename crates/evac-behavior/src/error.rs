//! Behavior kernel error type.

use thiserror::Error;

/// Errors surfaced by the transition kernels.
///
/// Both kernels are infallible on the hot path — a corrupted or
/// under-specified agent state is logged and treated as a no-op rather than
/// propagated, so this type exists for the log message, not as a `Result::Err`
/// a caller is expected to handle.
#[derive(Debug, Error)]
pub enum BehaviorError {
    /// A grouped agent in mode R or W had no rendezvous node recorded. This
    /// should be unreachable given how `evac-population` constructs groups;
    /// treated as a no-op (agent remains in place) rather than a panic.
    #[error("agent in a rendezvous-dependent mode has no rendezvous node; no-op")]
    UnknownBehavior,
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
