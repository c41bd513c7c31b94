//! The `Sim` struct and its tick loop.

use evac_core::SimRng;
use evac_estimator::Estimator;
use evac_graph::RoadGraph;
use evac_observers::Observers;
use evac_population::Population;
use log::debug;

use crate::config::SimConfig;
use crate::observer::SimObserver;

/// The main simulation runner.
///
/// Drives, in order, the four steps §5 of the design fixes as the tick
/// discipline: simulator step, sensor measurement, estimator predict,
/// estimator update. Single-threaded throughout — one seeded [`SimRng`]
/// feeds every stochastic call across all four steps, in this order, every
/// tick, so a run is fully reproducible from `config.seed`.
///
/// Create via [`crate::SimBuilder`].
pub struct Sim {
    pub config: SimConfig,
    pub tick: u64,
    pub graph: RoadGraph,
    pub population: Population,
    pub observers: Observers,
    pub estimator: Estimator,
    pub dist_matrix: Vec<Vec<u32>>,
    pub rng: SimRng,
}

impl Sim {
    /// Run from the current tick up to `config.ticks`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.tick < self.config.ticks {
            observer.on_tick_start(self.tick);
            self.process_tick();
            observer.on_tick_end(self.tick, &self.population, &self.observers, &self.estimator);
            self.tick += 1;
        }
        observer.on_sim_end(self.tick);
    }

    /// Run exactly `n` ticks from the current position, ignoring `config.ticks`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            observer.on_tick_start(self.tick);
            self.process_tick();
            observer.on_tick_end(self.tick, &self.population, &self.observers, &self.estimator);
            self.tick += 1;
        }
    }

    fn process_tick(&mut self) {
        evac_behavior::step_population(&mut self.population, &self.graph, &mut self.rng);
        self.observers.measure(&self.population, &mut self.rng);
        self.estimator.predict(&self.graph, &mut self.rng);
        self.estimator.measure(
            &self.observers,
            &self.dist_matrix,
            self.graph.node_count(),
            self.config.detection_prob,
            &mut self.rng,
        );
        debug!("tick {} complete", self.tick);
    }
}
