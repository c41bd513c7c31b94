//! Integration tests for `evac-output`'s log writers.

use std::fs;

use evac_core::NodeId;
use evac_graph::{RoadGraph, RoadGraphBuilder};
use evac_sim::{SimBuilder, SimConfig, SimObserver};

use crate::SimOutputObserver;

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
        seed: 3,
        ticks,
        population_size: 8,
        sensor_count: 2,
        force_exit_sensors: true,
        force_rendezvous_sensors: false,
        detection_prob: 0.8,
        particle_count: 4,
        init_alpha: 0.2,
    }
}

#[test]
fn particle_and_observer_logs_are_written_with_one_block_per_tick() {
    let dir = tempfile::tempdir().unwrap();
    let particle_path = dir.path().join("particles.csv");
    let observer_path = dir.path().join("observers.csv");

    let mut sim = SimBuilder::new(small_config(3), path_graph()).build().unwrap();
    let mut obs = SimOutputObserver::create(&particle_path, &observer_path).unwrap();
    sim.run(&mut obs);
    assert!(obs.take_error().is_none());

    let particle_contents = fs::read_to_string(&particle_path).unwrap();
    // One "time_step" header line per tick, plus one row per agent.
    let header_lines = particle_contents
        .lines()
        .filter(|l| l.starts_with("time_step"))
        .count();
    assert_eq!(header_lines, 3);
    let agent_lines = particle_contents.lines().count() - header_lines;
    assert_eq!(agent_lines, 3 * sim.population.len());

    let observer_contents = fs::read_to_string(&observer_path).unwrap();
    let lines: Vec<&str> = observer_contents.lines().collect();
    assert_eq!(lines[0], "time_step,loc_0,sensor_0,true_0,loc_1,sensor_1,true_1");
    assert_eq!(lines.len(), 1 + 3);
}

#[test]
fn finish_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let particle_path = dir.path().join("particles.csv");
    let observer_path = dir.path().join("observers.csv");

    let mut sim = SimBuilder::new(small_config(1), path_graph()).build().unwrap();
    let mut obs = SimOutputObserver::create(&particle_path, &observer_path).unwrap();
    sim.run(&mut obs);
    obs.on_sim_end(1);
    assert!(obs.take_error().is_none());
}
