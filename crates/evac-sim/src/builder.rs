//! Fluent builder for constructing a [`Sim`].

use evac_core::SimRng;
use evac_estimator::{Estimator, EstimatorConfig};
use evac_graph::RoadGraph;
use evac_observers::ObserversBuilder;
use evac_population::{GroupSizeCounts, PopulationBuilder};

use crate::config::SimConfig;
use crate::{Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — seed, tick count, population size, sensor layout,
///   estimator tuning
/// - [`RoadGraph`] — the fixed road network the run takes place on
///
/// # Example
///
/// ```rust,ignore
/// let graph = RoadGraphBuilder::new() /* ... */ .build()?;
/// let mut sim = SimBuilder::new(SimConfig::default(), graph).build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config: SimConfig,
    graph: RoadGraph,
}

impl SimBuilder {
    pub fn new(config: SimConfig, graph: RoadGraph) -> Self {
        Self { config, graph }
    }

    /// Synthesize the population, lay out sensors, and initialize the
    /// estimator's particle pool, all driven by one [`SimRng`] seeded from
    /// `config.seed`.
    pub fn build(self) -> SimResult<Sim> {
        let mut rng = SimRng::new(self.config.seed);

        let counts = GroupSizeCounts::from_total_size(self.config.population_size);
        let population = PopulationBuilder::new(counts).build(&self.graph, &mut rng)?;

        let observers = ObserversBuilder::new(self.config.detection_prob)
            .force_exit(self.config.force_exit_sensors)
            .force_rendezvous(self.config.force_rendezvous_sensors)
            .build(&self.graph, self.config.sensor_count, &mut rng)?;

        let estimator_cfg = EstimatorConfig {
            particles_per_agent: self.config.particle_count,
            init_alpha: self.config.init_alpha,
            detection_prob: self.config.detection_prob,
        };
        let estimator = Estimator::new(&population, &self.graph, &estimator_cfg, &mut rng)?;

        let dist_matrix = self.graph.build_dist_matrix();

        Ok(Sim {
            config: self.config,
            tick: 0,
            graph: self.graph,
            population,
            observers,
            estimator,
            dist_matrix,
            rng,
        })
    }
}
