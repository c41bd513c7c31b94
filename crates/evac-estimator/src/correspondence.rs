//! A single correspondence hypothesis: which sensor (if any) each agent is
//! associated with, and the particle location/precision sampled for it.
//!
//! Mirrors `original_source/EstimatorMeasurement.py::initializeCV` and its
//! three helpers (`associationOrder`, `associateAgents`,
//! `unassociatedPartSamp`).

use std::collections::HashSet;

use evac_core::{NodeId, SensorId, SimRng};
use evac_observers::Observers;

use crate::likelihood::ProbabilityTable;
use crate::particles::ParticleSet;
use crate::sampling::{binomial_pmf, weighted_sample};

/// An agent's assignment under one correspondence hypothesis.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Association {
    /// Not matched to any sensor this hypothesis.
    Unassociated,
    /// Matched to sensor `SensorId`.
    Sensor(SensorId),
}

impl Association {
    pub fn sensor(self) -> Option<SensorId> {
        match self {
            Association::Sensor(s) => Some(s),
            Association::Unassociated => None,
        }
    }
}

/// One full correspondence vector: an association, location, and alpha per
/// agent, all of length `agent_count`.
#[derive(Clone)]
pub struct CorrespondenceVector {
    pub assoc: Vec<Association>,
    pub location: Vec<NodeId>,
    pub alpha: Vec<f64>,
}

/// Sample one correspondence hypothesis from scratch: decide how many agents
/// each sensor's noisy count plausibly represents, randomly match agents to
/// sensors in that order, then sample a non-sensor particle for every agent
/// left unmatched.
pub fn initialize_one(
    particles: &ParticleSet,
    table: &ProbabilityTable,
    obs: &Observers,
    detection_prob: f64,
    rng: &mut SimRng,
) -> CorrespondenceVector {
    let (rand_list, num_assoc) = association_order(obs, detection_prob, particles.agent_count(), rng);
    let (cvec, mut flat_choice) = associate_agents(particles, table, obs, &rand_list, num_assoc, rng);
    unassociated_part_samp(particles, table, obs, &mut flat_choice, rng);

    let agent_count = particles.agent_count();
    let mut location = Vec::with_capacity(agent_count);
    let mut alpha = Vec::with_capacity(agent_count);
    for agent_idx in 0..agent_count {
        let flat = flat_choice[agent_idx].expect("every agent resolved by unassociated_part_samp");
        location.push(particles.location(flat));
        alpha.push(if cvec[agent_idx].sensor().is_some() {
            10.0
        } else {
            particles.alpha(flat)
        });
    }

    CorrespondenceVector {
        assoc: cvec,
        location,
        alpha,
    }
}

/// Estimate how many agents each sensor's noisy count plausibly represents
/// (by sampling over the binomial-thinning model in reverse), then return a
/// randomly shuffled list repeating each sensor that many times — the order
/// in which sensor observations get matched to agents.
///
/// Returns the list plus the number of entries to actually consume (capped
/// at the agent count, since there can never be more associated agents than
/// agents).
fn association_order(
    obs: &Observers,
    detection_prob: f64,
    agent_count: usize,
    rng: &mut SimRng,
) -> (Vec<SensorId>, usize) {
    let mut ordered = Vec::new();
    for (i, &meas) in obs.sensor_count().iter().enumerate() {
        let candidates: Vec<u32> = (meas..=2 * meas + 1).collect();
        let weights: Vec<f64> = candidates
            .iter()
            .map(|&n| binomial_pmf(meas, n, detection_prob))
            .collect();
        let idx = weighted_sample(&weights, rng);
        let randomized_cnt = candidates[idx];
        for _ in 0..randomized_cnt {
            ordered.push(SensorId(i as u32));
        }
    }
    let num_assoc = ordered.len().min(agent_count);
    rng.shuffle(&mut ordered);
    (ordered, num_assoc)
}

/// Walk `rand_assoc_list` in order, matching each sensor observation to an
/// unassociated particle drawn weighted by that particle's likelihood of
/// being at the sensor's node. Once any of an agent's particles is chosen,
/// every one of that agent's particles is removed from further consideration
/// (an agent can only be matched to one sensor per hypothesis).
fn associate_agents(
    particles: &ParticleSet,
    table: &ProbabilityTable,
    obs: &Observers,
    rand_assoc_list: &[SensorId],
    num_assoc: usize,
    rng: &mut SimRng,
) -> (Vec<Association>, Vec<Option<usize>>) {
    let agent_count = particles.agent_count();
    let n = particles.particles_per_agent();
    let mut cvec = vec![Association::Unassociated; agent_count];
    let mut flat_choice: Vec<Option<usize>> = vec![None; agent_count];
    let mut available = vec![true; particles.len()];

    for &sensor_id in rand_assoc_list.iter().take(num_assoc) {
        let sensor_node = obs.sensor_nodes()[sensor_id.index()];
        let mut candidate_flats = Vec::new();
        let mut weights = Vec::new();
        for flat in 0..particles.len() {
            if available[flat] {
                candidate_flats.push(flat);
                weights.push(table.get(flat, sensor_node));
            }
        }
        if candidate_flats.is_empty() {
            break;
        }
        let pick = weighted_sample(&weights, rng);
        let chosen_flat = candidate_flats[pick];
        let agent = particles.agent_of(chosen_flat);

        cvec[agent.index()] = Association::Sensor(sensor_id);
        flat_choice[agent.index()] = Some(chosen_flat);

        let start = agent.index() * n;
        for f in start..start + n {
            available[f] = false;
        }
    }

    (cvec, flat_choice)
}

/// Sample a particle for every agent left unmatched after
/// [`associate_agents`], weighted by the fraction of that particle's
/// likelihood mass lying on non-sensor nodes (an unassociated agent cannot,
/// by definition, be standing on a sensor node this hypothesis).
fn unassociated_part_samp(
    particles: &ParticleSet,
    table: &ProbabilityTable,
    obs: &Observers,
    flat_choice: &mut [Option<usize>],
    rng: &mut SimRng,
) {
    let n = particles.particles_per_agent();
    let sensor_nodes: HashSet<NodeId> = obs.sensor_nodes().iter().copied().collect();

    for agent_idx in 0..particles.agent_count() {
        if flat_choice[agent_idx].is_some() {
            continue;
        }
        let start = agent_idx * n;
        let mut weights = Vec::with_capacity(n);
        for k in 0..n {
            let flat = start + k;
            let row = table.row(flat);
            let total: f64 = row.iter().sum();
            let mass = if total < 1e-30 {
                0.0
            } else {
                row.iter()
                    .enumerate()
                    .filter(|&(node, _)| !sensor_nodes.contains(&NodeId(node as u32)))
                    .map(|(_, &v)| v / total)
                    .sum()
            };
            weights.push(mass);
        }
        let pick = weighted_sample(&weights, rng);
        flat_choice[agent_idx] = Some(start + pick);
    }
}
