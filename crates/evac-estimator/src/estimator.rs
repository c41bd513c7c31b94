//! Top-level estimator: owns the particle pool and runs its two per-tick
//! steps, prediction and measurement.

use evac_core::SimRng;
use evac_graph::RoadGraph;
use evac_observers::Observers;
use evac_population::Population;
use log::debug;

use crate::correspondence::{initialize_one, CorrespondenceVector};
use crate::error::EstimatorResult;
use crate::likelihood::ProbabilityTable;
use crate::mh::mh_resample;
use crate::particles::ParticleSet;

/// Tunable parameters for an [`Estimator`] run, separate from a single
/// [`Estimator`] instance so the same configuration can seed several runs.
#[derive(Clone, Copy, Debug)]
pub struct EstimatorConfig {
    /// Particles maintained per agent (also the number of correspondence
    /// vectors resampled each measurement step).
    pub particles_per_agent: usize,
    /// Initial inverse length-scale assigned to every particle before the
    /// first measurement step sharpens any of them.
    pub init_alpha: f64,
    /// Sensor detection probability `P_b`, passed through to the binomial
    /// likelihood model.
    pub detection_prob: f64,
}

/// A particle filter tracking an anonymous population's locations and
/// behaviors from noisy sensor counts alone.
pub struct Estimator {
    particles: ParticleSet,
    /// Shared transition probability for mode W, accumulated across every
    /// particle-tick that rolls the wait-release check; see
    /// `evac_behavior::estimator_kernel`.
    p_tr: f64,
}

impl Estimator {
    pub fn new(
        population: &Population,
        graph: &RoadGraph,
        cfg: &EstimatorConfig,
        rng: &mut SimRng,
    ) -> EstimatorResult<Self> {
        let particles = ParticleSet::new(
            population,
            graph,
            cfg.particles_per_agent,
            cfg.init_alpha,
            rng,
        )?;
        Ok(Self { particles, p_tr: 0.0 })
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    /// Advance every particle through one tick of the shared behavior
    /// kernel. Mirrors `original_source/EstimatorBehavior.py::runPredictionStep`.
    pub fn predict(&mut self, graph: &RoadGraph, rng: &mut SimRng) {
        for flat in 0..self.particles.len() {
            let agent = self.particles.agent_of(flat);
            let loc = self.particles.location(flat);
            let behavior = self.particles.behavior(flat);
            let rendezvous = self.particles.rendezvous_node(agent);
            let (next_loc, next_behavior) = evac_behavior::step_particle(
                loc,
                behavior,
                rendezvous,
                graph,
                rng,
                &mut self.p_tr,
            );
            self.particles.set_location(flat, next_loc);
            self.particles.set_behavior(flat, next_behavior);
        }
    }

    /// Resample every particle's location and precision from a fresh sensor
    /// reading: build the likelihood table, draw `n` independent
    /// correspondence hypotheses, refine them by Metropolis-Hastings, then
    /// write each hypothesis back as one particle per agent. Mirrors
    /// `original_source/EstimatorMeasurement.py::runMeasurementStep`.
    pub fn measure(
        &mut self,
        obs: &Observers,
        dist_matrix: &[Vec<u32>],
        node_count: usize,
        detection_prob: f64,
        rng: &mut SimRng,
    ) {
        if obs.is_empty() {
            // c and S are always the same length here; an empty sensor set
            // is the only way this tick's measurement can be unavailable.
            debug!("measurement step skipped: no sensors this tick");
            return;
        }
        debug!("measurement step: {} sensors", obs.len());
        let table = ProbabilityTable::build(&self.particles, dist_matrix, node_count);
        let n = self.particles.particles_per_agent();

        let mut correspondence_vectors: Vec<CorrespondenceVector> = (0..n)
            .map(|_| initialize_one(&self.particles, &table, obs, detection_prob, rng))
            .collect();

        mh_resample(
            &mut correspondence_vectors,
            &self.particles,
            &table,
            obs,
            detection_prob,
            rng,
        );

        for (k, cv) in correspondence_vectors.iter().enumerate() {
            for agent_idx in 0..self.particles.agent_count() {
                let flat = agent_idx * n + k;
                self.particles.set_location(flat, cv.location[agent_idx]);
                self.particles.set_alpha(flat, cv.alpha[agent_idx]);
            }
        }
        debug!("measurement step complete: {n} correspondence vectors resampled");
    }
}
