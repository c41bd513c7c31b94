//! Particle transition kernel: the shared E/R/X/S rules, with mode W
//! released by the estimator's global transition probability `P_tr` instead
//! of group co-location (particle identities carry no group information).

use evac_core::{BehaviorState, NodeId, SimRng};
use evac_graph::RoadGraph;

use crate::kernel::{self, P_IDLE};

/// `P_0` in the `P_tr` recurrence: `P_tr <- (1 - P_0) * P_tr + P_0`.
const P_0: f64 = 0.1;

/// Advance one particle by one tick, threading the shared `P_tr` through the
/// Wait-release roll.
///
/// `P_tr` accumulates across every particle and every tick — it is owned by
/// the caller (the estimator's top-level predict loop), not by any one
/// particle, per the spec's "keep it as a scalar threaded through predict
/// returns" note.
pub fn step_particle(
    location: NodeId,
    behavior: BehaviorState,
    rendezvous_node: Option<NodeId>,
    graph: &RoadGraph,
    rng: &mut SimRng,
    p_tr: &mut f64,
) -> (NodeId, BehaviorState) {
    match kernel::step_active(location, behavior, rendezvous_node, graph, rng) {
        Some(next) => next,
        None => wait(location, rng, p_tr),
    }
}

/// W release for a particle: spontaneous transition gated by `P_tr`.
///
/// Mirrors `original_source/EstimatorBehavior.py::estimator_wait`: the
/// `P_IDLE` do-nothing check is independent of (and precedes) the `P_tr`
/// update, so `P_tr` only accumulates on ticks where the particle actually
/// rolls for release.
fn wait(location: NodeId, rng: &mut SimRng, p_tr: &mut f64) -> (NodeId, BehaviorState) {
    if rng.gen_bool(P_IDLE) {
        return (location, BehaviorState::Wait);
    }

    *p_tr = (1.0 - P_0) * *p_tr + P_0;

    if rng.gen_bool(*p_tr) {
        (location, BehaviorState::Evacuating)
    } else {
        (location, BehaviorState::Wait)
    }
}
