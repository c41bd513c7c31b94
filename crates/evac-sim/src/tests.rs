//! Integration tests for `evac-sim`.

use evac_core::NodeId;
use evac_graph::{RoadGraph, RoadGraphBuilder};

use crate::{NoopObserver, SimBuilder, SimConfig, SimObserver};

/// A 5-node path 0-1-2-3-4, exit at 4, rendezvous at 2.
fn path_graph() -> RoadGraph {
    let mut b = RoadGraphBuilder::new();
    b.add_nodes(5);
    for i in 0..4 {
        b.add_edge(NodeId(i), NodeId(i + 1));
    }
    b.mark_exit(NodeId(4));
    b.mark_rendezvous(NodeId(2));
    b.build().unwrap()
}

fn small_config(ticks: u64) -> SimConfig {
    SimConfig {
        seed: 7,
        ticks,
        population_size: 10,
        sensor_count: 2,
        force_exit_sensors: true,
        force_rendezvous_sensors: true,
        detection_prob: 0.8,
        particle_count: 5,
        init_alpha: 0.2,
    }
}

#[test]
fn builds_successfully_with_defaults() {
    let sim = SimBuilder::new(small_config(5), path_graph()).build().unwrap();
    assert!(!sim.population.is_empty());
    assert_eq!(sim.tick, 0);
}

#[test]
fn rejects_population_when_graph_has_no_rendezvous_for_groups() {
    let mut b = RoadGraphBuilder::new();
    b.add_nodes(2);
    b.add_edge(NodeId(0), NodeId(1));
    b.mark_exit(NodeId(1));
    let graph = b.build().unwrap();

    // population_size of 10 synthesizes pairs/triples/quads, which need a
    // rendezvous node this graph doesn't have.
    let result = SimBuilder::new(small_config(5), graph).build();
    assert!(result.is_err());
}

#[test]
fn run_advances_tick_to_configured_total() {
    let mut sim = SimBuilder::new(small_config(6), path_graph()).build().unwrap();
    sim.run(&mut NoopObserver);
    assert_eq!(sim.tick, 6);
}

#[test]
fn run_ticks_advances_incrementally() {
    let mut sim = SimBuilder::new(small_config(100), path_graph()).build().unwrap();
    sim.run_ticks(3, &mut NoopObserver);
    assert_eq!(sim.tick, 3);
    sim.run_ticks(4, &mut NoopObserver);
    assert_eq!(sim.tick, 7);
}

#[test]
fn every_particle_location_stays_within_graph_after_a_run() {
    let mut sim = SimBuilder::new(small_config(8), path_graph()).build().unwrap();
    sim.run(&mut NoopObserver);

    let particles = sim.estimator.particles();
    for flat in 0..particles.len() {
        assert!(particles.location(flat).index() < sim.graph.node_count());
        assert!(particles.alpha(flat) > 0.0);
    }
}

#[test]
fn observer_called_correct_number_of_times() {
    struct TickCounter {
        starts: usize,
        ends: usize,
    }
    impl SimObserver for TickCounter {
        fn on_tick_start(&mut self, _tick: u64) {
            self.starts += 1;
        }
        fn on_tick_end(
            &mut self,
            _tick: u64,
            _population: &evac_population::Population,
            _observers: &evac_observers::Observers,
            _estimator: &evac_estimator::Estimator,
        ) {
            self.ends += 1;
        }
    }

    let mut sim = SimBuilder::new(small_config(4), path_graph()).build().unwrap();
    let mut obs = TickCounter { starts: 0, ends: 0 };
    sim.run(&mut obs);
    assert_eq!(obs.starts, 4);
    assert_eq!(obs.ends, 4);
}

#[test]
fn sensor_nodes_include_the_forced_exit_and_rendezvous_nodes() {
    let sim = SimBuilder::new(small_config(1), path_graph()).build().unwrap();
    assert!(sim.observers.sensor_nodes().contains(&NodeId(4)));
    assert!(sim.observers.sensor_nodes().contains(&NodeId(2)));
}

#[test]
fn deterministic_given_the_same_seed() {
    let graph_a = path_graph();
    let graph_b = path_graph();
    let mut sim_a = SimBuilder::new(small_config(5), graph_a).build().unwrap();
    let mut sim_b = SimBuilder::new(small_config(5), graph_b).build().unwrap();

    sim_a.run(&mut NoopObserver);
    sim_b.run(&mut NoopObserver);

    let locs_a: Vec<NodeId> = sim_a.population.agents().iter().map(|a| a.location).collect();
    let locs_b: Vec<NodeId> = sim_b.population.agents().iter().map(|a| a.location).collect();
    assert_eq!(locs_a, locs_b);
}
