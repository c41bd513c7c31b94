//! Shared E/R/X/S transition rules underlying both the simulation kernel and
//! the estimator kernel.
//!
//! Mode W is deliberately not handled here: a real agent releases from W
//! based on group co-location, while a particle releases based on the
//! estimator's global transition probability. Both of those live in their
//! respective kernel modules; this module only carries the logic that is
//! byte-for-byte identical between the two.

use evac_core::{BehaviorState, NodeId, SimRng};
use evac_graph::RoadGraph;
use log::warn;

use crate::error::BehaviorError;

/// Probability that an agent (or particle) in a non-terminal mode does
/// nothing this tick, regardless of which mode it's in.
pub const P_IDLE: f64 = 0.1;

/// Advance one (location, behavior) pair through a single tick for every mode
/// except `Wait`. Returns `None` when `behavior` is `Wait` — the caller must
/// handle that case itself.
///
/// Rolls the [`P_IDLE`] do-nothing check first for `Evacuating` and
/// `Rendezvous` (mirroring the source's do-nothing check at the top of each
/// active-mode transition); `Exited` and `Stay` are unconditional no-ops and
/// never roll it, since they never transition regardless.
pub(crate) fn step_active(
    location: NodeId,
    behavior: BehaviorState,
    rendezvous_node: Option<NodeId>,
    graph: &RoadGraph,
    rng: &mut SimRng,
) -> Option<(NodeId, BehaviorState)> {
    match behavior {
        BehaviorState::Evacuating => Some(evacuate(location, graph, rng)),
        BehaviorState::Rendezvous => Some(advance_to_rendezvous(
            location,
            rendezvous_node,
            graph,
            rng,
        )),
        BehaviorState::Exited | BehaviorState::Stay => Some((location, behavior)),
        BehaviorState::Wait => None,
    }
}

fn evacuate(location: NodeId, graph: &RoadGraph, rng: &mut SimRng) -> (NodeId, BehaviorState) {
    if rng.gen_bool(P_IDLE) {
        return (location, BehaviorState::Evacuating);
    }
    if graph.is_exit(location) {
        return (location, BehaviorState::Exited);
    }
    let path = graph.shortest_exit_path(location);
    let next = path.get(1).copied().unwrap_or(location);
    (next, BehaviorState::Evacuating)
}

fn advance_to_rendezvous(
    location: NodeId,
    rendezvous_node: Option<NodeId>,
    graph: &RoadGraph,
    rng: &mut SimRng,
) -> (NodeId, BehaviorState) {
    if rng.gen_bool(P_IDLE) {
        return (location, BehaviorState::Rendezvous);
    }
    let Some(target) = rendezvous_node else {
        warn!("{}", BehaviorError::UnknownBehavior);
        return (location, BehaviorState::Rendezvous);
    };
    if location == target {
        return (location, BehaviorState::Wait);
    }
    match graph.shortest_path(location, target) {
        Ok(path) => {
            let next = path.get(1).copied().unwrap_or(location);
            (next, BehaviorState::Rendezvous)
        }
        Err(_) => {
            warn!(
                "no route from {} to rendezvous node {}; holding in place",
                location, target
            );
            (location, BehaviorState::Rendezvous)
        }
    }
}
