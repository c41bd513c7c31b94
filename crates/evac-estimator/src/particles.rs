//! The particle population: `n` location/precision hypotheses per agent.
//!
//! Particles are stored flat, agent-major: agent `a`'s particles occupy
//! `[a*n, (a+1)*n)` in every per-particle array. This mirrors
//! `original_source/Estimator.py::createEstimatorPopulation`'s `agentId`
//! list, which is built by the same nested loop order (outer over agents,
//! inner over particles).

use evac_core::{AgentId, BehaviorState, NodeId, SimRng};
use evac_graph::RoadGraph;
use evac_population::Population;

use crate::error::{EstimatorError, EstimatorResult};

/// Per-agent, per-particle state: location, inverse length-scale (`alpha`),
/// and behavior, plus the one value every particle of a given agent shares
/// (its rendezvous node, known a priori — only positions are hidden).
pub struct ParticleSet {
    agent_count: usize,
    n: usize,
    location: Vec<NodeId>,
    alpha: Vec<f64>,
    behavior: Vec<BehaviorState>,
    rendezvous_node: Vec<Option<NodeId>>,
}

impl ParticleSet {
    /// Build `n` particles for every agent in `population`, with behavior and
    /// rendezvous node copied from the agent's known role and location
    /// drawn uniformly at random over `graph`'s nodes (and `alpha`
    /// initialized to `init_alpha` for all of them), matching
    /// `Estimator.py::randomizeParticles`.
    pub fn new(
        population: &Population,
        graph: &RoadGraph,
        n: usize,
        init_alpha: f64,
        rng: &mut SimRng,
    ) -> EstimatorResult<Self> {
        if population.is_empty() {
            return Err(EstimatorError::EmptyPopulation);
        }
        if graph.is_empty() {
            return Err(EstimatorError::EmptyGraph);
        }
        if n == 0 {
            return Err(EstimatorError::ZeroParticles(n));
        }

        let agent_count = population.len();
        let node_count = graph.node_count();
        let mut location = Vec::with_capacity(agent_count * n);
        let mut alpha = Vec::with_capacity(agent_count * n);
        let mut behavior = Vec::with_capacity(agent_count * n);
        let mut rendezvous_node = Vec::with_capacity(agent_count);

        for agent in population.agents() {
            rendezvous_node.push(agent.rendezvous_node);
            for _ in 0..n {
                let r: usize = rng.gen_range(0..node_count);
                location.push(NodeId(r as u32));
                alpha.push(init_alpha);
                behavior.push(agent.behavior);
            }
        }

        Ok(Self {
            agent_count,
            n,
            location,
            alpha,
            behavior,
            rendezvous_node,
        })
    }

    pub fn agent_count(&self) -> usize {
        self.agent_count
    }

    /// Particles per agent — also the number of correspondence vectors
    /// resampled each measurement step (`numParts == numcVec` upstream).
    pub fn particles_per_agent(&self) -> usize {
        self.n
    }

    pub fn len(&self) -> usize {
        self.agent_count * self.n
    }

    pub fn is_empty(&self) -> bool {
        self.agent_count == 0
    }

    #[inline]
    pub fn flat(&self, agent: AgentId, k: usize) -> usize {
        agent.index() * self.n + k
    }

    #[inline]
    pub fn agent_of(&self, flat: usize) -> AgentId {
        AgentId((flat / self.n) as u32)
    }

    pub fn rendezvous_node(&self, agent: AgentId) -> Option<NodeId> {
        self.rendezvous_node[agent.index()]
    }

    pub fn location(&self, flat: usize) -> NodeId {
        self.location[flat]
    }

    pub fn set_location(&mut self, flat: usize, loc: NodeId) {
        self.location[flat] = loc;
    }

    pub fn alpha(&self, flat: usize) -> f64 {
        self.alpha[flat]
    }

    pub fn set_alpha(&mut self, flat: usize, a: f64) {
        self.alpha[flat] = a;
    }

    pub fn behavior(&self, flat: usize) -> BehaviorState {
        self.behavior[flat]
    }

    pub fn set_behavior(&mut self, flat: usize, b: BehaviorState) {
        self.behavior[flat] = b;
    }

    pub fn locations(&self) -> &[NodeId] {
        &self.location
    }

    pub fn alphas(&self) -> &[f64] {
        &self.alpha
    }
}
