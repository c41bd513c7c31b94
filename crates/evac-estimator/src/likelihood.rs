//! The per-particle, per-node likelihood table (`q_flat_loc` upstream).

use evac_core::NodeId;
use evac_graph::RoadGraph;

use crate::particles::ParticleSet;

/// `Q[flat][node]` is the likelihood of particle `flat` being viewed as
/// located at `node`: a Gaussian-like kernel in hop-distance, scaled by the
/// particle's own precision `alpha`.
///
/// Mirrors `original_source/EstimatorMeasurement.py::buildProbabilityTable`:
/// `Q(p, node) = alpha_p^2 * exp(-0.5 * (alpha_p * dist(loc_p, node))^2)`.
/// Higher `alpha` sharpens the kernel around the particle's current
/// hypothesis; sensor-associated particles get a fixed high `alpha` (see
/// [`crate::mh`]) so their mass concentrates tightly on their sensor node.
pub struct ProbabilityTable {
    rows: usize,
    node_count: usize,
    q: Vec<f64>,
}

impl ProbabilityTable {
    /// Build the table sequentially, one row at a time.
    pub fn build(particles: &ParticleSet, dist_matrix: &[Vec<u32>], node_count: usize) -> Self {
        let rows = particles.len();
        let mut q = vec![0.0; rows * node_count];
        for flat in 0..rows {
            fill_row(particles, dist_matrix, node_count, flat, &mut q[flat * node_count..(flat + 1) * node_count]);
        }
        Self {
            rows,
            node_count,
            q,
        }
    }

    /// Build the table with each particle's row computed on a data-parallel
    /// iterator (feature `parallel`). Rows have no cross-row dependency (§5),
    /// so this is a drop-in replacement for [`Self::build`] with identical
    /// output, never used for the MH sweep itself which must stay sequential.
    #[cfg(feature = "parallel")]
    pub fn build_parallel(particles: &ParticleSet, dist_matrix: &[Vec<u32>], node_count: usize) -> Self {
        use rayon::prelude::*;

        let rows = particles.len();
        let mut q = vec![0.0; rows * node_count];
        q.par_chunks_mut(node_count)
            .enumerate()
            .for_each(|(flat, row)| fill_row(particles, dist_matrix, node_count, flat, row));
        Self {
            rows,
            node_count,
            q,
        }
    }

    #[inline]
    pub fn get(&self, flat: usize, node: NodeId) -> f64 {
        self.q[flat * self.node_count + node.index()]
    }

    /// The full likelihood row for one particle, one entry per node.
    #[inline]
    pub fn row(&self, flat: usize) -> &[f64] {
        &self.q[flat * self.node_count..(flat + 1) * self.node_count]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }
}

fn fill_row(particles: &ParticleSet, dist_matrix: &[Vec<u32>], node_count: usize, flat: usize, row: &mut [f64]) {
    let loc = particles.location(flat);
    let alpha = particles.alpha(flat);
    for node in 0..node_count {
        let d = RoadGraph::dist(dist_matrix, loc, NodeId(node as u32));
        let scaled = if d == u32::MAX {
            f64::INFINITY
        } else {
            alpha * d as f64
        };
        row[node] = alpha * alpha * (-0.5 * scaled * scaled).exp();
    }
}
