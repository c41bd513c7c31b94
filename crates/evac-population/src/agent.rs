//! Per-agent evacuation state.

use std::collections::HashSet;

use evac_core::{AgentId, BehaviorState, GroupId, NodeId};

/// A single simulated individual.
///
/// Demographic attributes (age, gender) are generation-time-only concerns of
/// [`crate::population::PopulationBuilder`] and are not carried on the agent
/// itself — only group membership, rendezvous target, and the mutable state
/// the behavior kernel and output layer need survive into `Agent`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id: AgentId,
    /// `None` for ungrouped (singleton) agents.
    pub group_id: Option<GroupId>,
    /// The rendezvous node this agent's group is converging on. `None` for
    /// ungrouped agents, who never enter mode R.
    pub rendezvous_node: Option<NodeId>,
    pub location: NodeId,
    pub behavior: BehaviorState,
    /// Other members of this agent's group currently co-located with it.
    /// Recomputed from scratch at the start of every tick.
    pub together_with: HashSet<AgentId>,
}

impl Agent {
    pub fn new(
        id: AgentId,
        group_id: Option<GroupId>,
        rendezvous_node: Option<NodeId>,
        location: NodeId,
        behavior: BehaviorState,
    ) -> Self {
        Self {
            id,
            group_id,
            rendezvous_node,
            location,
            behavior,
            together_with: HashSet::new(),
        }
    }

    pub fn is_grouped(&self) -> bool {
        self.group_id.is_some()
    }
}
