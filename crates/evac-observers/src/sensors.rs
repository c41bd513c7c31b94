//! Sensor node placement and the noisy binomial measurement model.

use std::collections::HashSet;

use evac_core::{NodeId, SimRng};
use evac_graph::RoadGraph;
use evac_population::Population;
use log::debug;

use crate::{ObserversError, ObserversResult};

/// A fixed set of sensor nodes plus the noisy counts they most recently
/// observed.
///
/// `sensor_nodes` never changes after construction — only `sensor_count` and
/// `true_count` mutate, once per tick, via [`Observers::measure`].
pub struct Observers {
    sensor_nodes: Vec<NodeId>,
    sensor_count: Vec<u32>,
    true_count: Vec<u32>,
    detection_prob: f64,
}

impl Observers {
    pub fn sensor_nodes(&self) -> &[NodeId] {
        &self.sensor_nodes
    }

    pub fn sensor_count(&self) -> &[u32] {
        &self.sensor_count
    }

    /// True occupancy at each sensor node. Diagnostics only — the estimator
    /// never reads this; see §6.
    pub fn true_count(&self) -> &[u32] {
        &self.true_count
    }

    pub fn detection_prob(&self) -> f64 {
        self.detection_prob
    }

    pub fn len(&self) -> usize {
        self.sensor_nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensor_nodes.is_empty()
    }

    /// Record true occupancy at every sensor node and draw a noisy count by
    /// binomial thinning with parameter `detection_prob`.
    ///
    /// Mirrors `original_source/Observers.py::noisyMeasurementModel`: each
    /// agent present at a sensor node is independently "detected" with
    /// probability `detection_prob`.
    pub fn measure(&mut self, population: &Population, rng: &mut SimRng) {
        for (i, &node) in self.sensor_nodes.iter().enumerate() {
            let true_n = population
                .agents()
                .iter()
                .filter(|a| a.location == node)
                .count() as u32;
            self.true_count[i] = true_n;
            self.sensor_count[i] = binomial_thin(true_n, self.detection_prob, rng);
        }
        debug!(
            "measured {} sensors: true={:?} noisy={:?}",
            self.sensor_nodes.len(),
            self.true_count,
            self.sensor_count
        );
    }
}

/// Draw `Binomial(n, p)` by `n` independent Bernoulli(p) trials, routing
/// through the one shared RNG rather than a dedicated distribution sampler —
/// `n` is always small (agent counts at a single node), so this is both
/// simple and centralizes all randomness through [`SimRng`].
fn binomial_thin(n: u32, p: f64, rng: &mut SimRng) -> u32 {
    (0..n).filter(|_| rng.gen_bool(p)).count() as u32
}

/// Builds an [`Observers`] sensor layout against a [`RoadGraph`].
pub struct ObserversBuilder {
    force_exit: bool,
    force_rendezvous: bool,
    detection_prob: f64,
}

impl ObserversBuilder {
    pub fn new(detection_prob: f64) -> Self {
        Self {
            force_exit: false,
            force_rendezvous: false,
            detection_prob,
        }
    }

    /// Always place a sensor at every exit node before filling the rest of
    /// the budget with random nodes.
    pub fn force_exit(mut self, yes: bool) -> Self {
        self.force_exit = yes;
        self
    }

    /// Always place a sensor at every rendezvous node.
    pub fn force_rendezvous(mut self, yes: bool) -> Self {
        self.force_rendezvous = yes;
        self
    }

    /// Choose `n` distinct sensor nodes: exit/rendezvous nodes first (if
    /// requested), then uniformly random distinct nodes for the remainder.
    ///
    /// Mirrors `original_source/Observers.py::generateSensorNodes`.
    pub fn build(self, graph: &RoadGraph, n: usize, rng: &mut SimRng) -> ObserversResult<Observers> {
        if graph.is_empty() {
            return Err(ObserversError::EmptyGraph);
        }
        if n > graph.node_count() {
            return Err(ObserversError::NotEnoughNodes {
                requested: n,
                available: graph.node_count(),
            });
        }

        let mut chosen: Vec<NodeId> = Vec::with_capacity(n);
        let mut seen: HashSet<NodeId> = HashSet::with_capacity(n);

        if self.force_exit {
            for &node in graph.exit_nodes() {
                if chosen.len() >= n {
                    break;
                }
                if seen.insert(node) {
                    chosen.push(node);
                }
            }
        }
        if self.force_rendezvous {
            for &node in graph.rendezvous_nodes() {
                if chosen.len() >= n {
                    break;
                }
                if seen.insert(node) {
                    chosen.push(node);
                }
            }
        }

        let node_count = graph.node_count();
        while chosen.len() < n {
            let candidate = NodeId(rng.gen_range(0..node_count as u32));
            if seen.insert(candidate) {
                chosen.push(candidate);
            }
        }

        debug!("placed {} sensor nodes: {:?}", chosen.len(), chosen);

        Ok(Observers {
            sensor_count: vec![0; chosen.len()],
            true_count: vec![0; chosen.len()],
            sensor_nodes: chosen,
            detection_prob: self.detection_prob,
        })
    }
}
