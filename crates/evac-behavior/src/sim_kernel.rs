//! Real-agent transition kernel: group co-movement on top of the shared
//! E/R/X/S rules, and mode W released by group reunion.

use evac_core::{AgentId, BehaviorState, NodeId, SimRng};
use evac_graph::RoadGraph;
use evac_population::{Agent, Population};

use crate::kernel::{self, P_IDLE};

/// Advance every agent in `population` by one tick.
///
/// Recomputes `togetherWith` first (per-group co-location), then advances
/// each agent in a deterministic order (by current location, then by
/// [`AgentId`], matching the source's iteration-by-location-bucket
/// discipline while making the order reproducible under a seeded RNG). An
/// agent already force-matched to an earlier agent's post-transition state
/// this tick is skipped — it does not get its own kernel roll.
pub fn step_population(population: &mut Population, graph: &RoadGraph, rng: &mut SimRng) {
    population.recompute_together_with();

    let agent_count = population.len();
    let mut order: Vec<AgentId> = (0..agent_count).map(|i| AgentId(i as u32)).collect();
    order.sort_by_key(|&a| (population.agent(a).location, a));

    let mut next_state: Vec<(NodeId, BehaviorState)> = population
        .agents()
        .iter()
        .map(|a| (a.location, a.behavior))
        .collect();
    let mut advanced = vec![false; agent_count];

    for &aid in &order {
        if advanced[aid.index()] {
            continue;
        }
        let agent = population.agent(aid);
        let next = match agent.behavior {
            BehaviorState::Wait => wait(agent, population, rng),
            _ => kernel::step_active(
                agent.location,
                agent.behavior,
                agent.rendezvous_node,
                graph,
                rng,
            )
            .expect("non-Wait modes always produce a transition"),
        };
        next_state[aid.index()] = next;
        advanced[aid.index()] = true;

        for &m in &agent.together_with {
            next_state[m.index()] = next;
            advanced[m.index()] = true;
        }
    }

    for (i, agent) in population.agents_mut().iter_mut().enumerate() {
        (agent.location, agent.behavior) = next_state[i];
    }
}

/// W release for a real agent: full group reunion test.
///
/// Mirrors `original_source/Behavior.py::wait` — filters group-member
/// locations down to those that differ from the agent's own, and releases
/// to `Evacuating` once that filtered set is empty.
fn wait(agent: &Agent, population: &Population, rng: &mut SimRng) -> (NodeId, BehaviorState) {
    if rng.gen_bool(P_IDLE) {
        return (agent.location, BehaviorState::Wait);
    }
    let group_id = agent
        .group_id
        .expect("an agent in mode Wait is always grouped");
    let all_reunited = population
        .group_members(group_id)
        .iter()
        .all(|&m| m == agent.id || population.agent(m).location == agent.location);

    if all_reunited {
        (agent.location, BehaviorState::Evacuating)
    } else {
        (agent.location, BehaviorState::Wait)
    }
}
