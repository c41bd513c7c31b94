//! Metropolis-Hastings resampling over the pool of correspondence vectors.
//!
//! Mirrors `original_source/EstimatorMeasurement.py::MHresample` and its two
//! proposal kernels, `reassociate` and `mistakenIdentity`. Never
//! parallelized — see the crate-level note on determinism.

use evac_core::{NodeId, SensorId, SimRng};
use evac_observers::Observers;

use crate::correspondence::{Association, CorrespondenceVector};
use crate::likelihood::ProbabilityTable;
use crate::particles::ParticleSet;
use crate::sampling::{binomial_pmf, weighted_sample};

/// Probability of proposing a reassociation move each MH step; the
/// complement proposes a mistaken-identity swap instead.
pub const REASSOC_PROBABILITY: f64 = 0.99;

/// Extra MH sweeps run before the chain's state is trusted, on top of one
/// sweep per correspondence vector.
pub const BURN_IN: usize = 20;

/// Run `correspondence_vectors.len() + BURN_IN` MH sweeps in place over the
/// pool, each picking one vector uniformly at random and proposing either a
/// reassociation or a mistaken-identity move against it.
pub fn mh_resample(
    correspondence_vectors: &mut [CorrespondenceVector],
    particles: &ParticleSet,
    table: &ProbabilityTable,
    obs: &Observers,
    detection_prob: f64,
    rng: &mut SimRng,
) {
    let num_cv = correspondence_vectors.len();
    if num_cv == 0 {
        return;
    }
    for _ in 0..(num_cv + BURN_IN) {
        let cv_id = rng.gen_range(0..num_cv);
        let candidate = correspondence_vectors[cv_id].clone();
        let proposed = if rng.uniform01() <= REASSOC_PROBABILITY {
            reassociate(&candidate, particles, table, obs, detection_prob, rng)
        } else {
            mistaken_identity(&candidate, rng)
        };
        correspondence_vectors[cv_id] = proposed;
    }
}

/// Propose flipping one agent's sensor association (sensor -> unassociated
/// or vice versa), accepting by the Metropolis-Hastings ratio of sensing
/// likelihood times location-prior likelihood.
fn reassociate(
    candidate: &CorrespondenceVector,
    particles: &ParticleSet,
    table: &ProbabilityTable,
    obs: &Observers,
    detection_prob: f64,
    rng: &mut SimRng,
) -> CorrespondenceVector {
    let agent_count = particles.agent_count();
    let n = particles.particles_per_agent();
    let node_count = table.node_count();
    let num_sensors = obs.sensor_nodes().len();

    let hist_cand = histogram(&candidate.assoc, num_sensors);
    let cannot_flip_sensor: Vec<usize> = (0..num_sensors)
        .filter(|&s| hist_cand[s] <= obs.sensor_count()[s])
        .collect();
    let mut cannot_flip_agent = vec![false; agent_count];
    for &s in &cannot_flip_sensor {
        for (agent, &a) in candidate.assoc.iter().enumerate() {
            if a == Association::Sensor(SensorId(s as u32)) {
                cannot_flip_agent[agent] = true;
            }
        }
    }
    let allowed: Vec<usize> = (0..agent_count).filter(|&a| !cannot_flip_agent[a]).collect();
    if allowed.is_empty() {
        return candidate.clone();
    }

    let pick = weighted_sample(&vec![1.0; allowed.len()], rng);
    let ag_id = allowed[pick];

    let currently_unassoc = candidate.assoc[ag_id] == Association::Unassociated;
    let sensor_node_set: Vec<NodeId> = obs.sensor_nodes().to_vec();
    let allowed_flip_nodes: Vec<NodeId> = (0..node_count)
        .map(|n| NodeId(n as u32))
        .filter(|node| sensor_node_set.contains(node) == currently_unassoc)
        .collect();
    if allowed_flip_nodes.is_empty() {
        return candidate.clone();
    }

    let start = ag_id * n;
    let w_rows: Vec<f64> = (0..n)
        .map(|k| {
            allowed_flip_nodes
                .iter()
                .map(|&node| table.get(start + k, node))
                .sum()
        })
        .collect();
    let part_ind = weighted_sample(&w_rows, rng);
    let chosen_flat = start + part_ind;

    let w_cols: Vec<f64> = allowed_flip_nodes
        .iter()
        .map(|&node| table.get(chosen_flat, node))
        .collect();
    let node_ind = allowed_flip_nodes[weighted_sample(&w_cols, rng)];

    let new_sensor_ind = sensor_node_set.iter().position(|&n| n == node_ind);
    let old_sensor_ind = candidate.assoc[ag_id].sensor().map(|s| s.index());

    let mut assoc_prop = candidate.assoc.clone();
    assoc_prop[ag_id] = match new_sensor_ind {
        Some(s) => Association::Sensor(SensorId(s as u32)),
        None => Association::Unassociated,
    };

    let hist_prop = histogram(&assoc_prop, num_sensors);
    let p_cand_sense: Vec<f64> = (0..num_sensors)
        .map(|s| binomial_pmf(obs.sensor_count()[s], hist_cand[s], detection_prob).max(1e-12))
        .collect();
    let p_prop_sense: Vec<f64> = (0..num_sensors)
        .map(|s| binomial_pmf(obs.sensor_count()[s], hist_prop[s], detection_prob))
        .collect();
    let flipped = new_sensor_ind
        .or(old_sensor_ind)
        .expect("reassociation always flips exactly one association into being defined");
    let p_ratio_sense = p_prop_sense[flipped] / p_cand_sense[flipped];

    let non_sensor_nodes: Vec<NodeId> = (0..node_count)
        .map(|n| NodeId(n as u32))
        .filter(|node| !sensor_node_set.contains(node))
        .collect();
    let (sense_loc_cand, sense_loc_prop): (Vec<NodeId>, Vec<NodeId>) = match old_sensor_ind {
        None => (non_sensor_nodes, vec![sensor_node_set[new_sensor_ind.unwrap()]]),
        Some(old) => (vec![sensor_node_set[old]], non_sensor_nodes),
    };
    let agent_rows = start..start + n;
    let q_prior_cand: f64 = agent_rows
        .clone()
        .flat_map(|flat| sense_loc_cand.iter().map(move |&node| table.get(flat, node)))
        .sum();
    let q_prior_prop: f64 = agent_rows
        .flat_map(|flat| sense_loc_prop.iter().map(move |&node| table.get(flat, node)))
        .sum();
    if q_prior_prop < 1e-30 {
        return candidate.clone();
    }
    let p_ratio_prior = q_prior_cand / q_prior_prop;

    let p_ratio = p_ratio_prior * p_ratio_sense;
    let a_ratio = p_ratio.min(1.0);
    if rng.uniform01() > a_ratio {
        return candidate.clone();
    }

    let mut next = candidate.clone();
    next.assoc[ag_id] = assoc_prop[ag_id];
    next.location[ag_id] = node_ind;
    next.alpha[ag_id] = if new_sensor_ind.is_some() {
        10.0
    } else {
        particles.alpha(chosen_flat)
    };
    next
}

/// Swap two (uniformly, independently chosen) agents' entries wholesale.
/// Always accepted — the proposal is symmetric, so the MH ratio is 1.
fn mistaken_identity(candidate: &CorrespondenceVector, rng: &mut SimRng) -> CorrespondenceVector {
    let agent_count = candidate.assoc.len();
    let uniform = vec![1.0; agent_count];
    let ag1 = weighted_sample(&uniform, rng);
    let ag2 = weighted_sample(&uniform, rng);

    let mut next = candidate.clone();
    next.assoc.swap(ag1, ag2);
    next.location.swap(ag1, ag2);
    next.alpha.swap(ag1, ag2);
    next
}

fn histogram(assoc: &[Association], num_sensors: usize) -> Vec<u32> {
    let mut hist = vec![0u32; num_sensors];
    for a in assoc {
        if let Some(s) = a.sensor() {
            hist[s.index()] += 1;
        }
    }
    hist
}
