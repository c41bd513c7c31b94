//! Plain-data run configuration.

/// Everything needed to reproduce a run given a fixed [`evac_graph::RoadGraph`]:
/// the RNG seed, population generation parameters, and estimator tuning.
///
/// Deliberately plain data — no behavior, no references — so it can be
/// logged, serialized (behind the `serde` feature), or round-tripped through
/// a config file by a driver binary without this crate knowing anything
/// about TOML or JSON.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Seed for the single process-wide RNG.
    pub seed: u64,
    /// Number of ticks to run.
    pub ticks: u64,
    /// Total synthesized population size, split into singleton/pair/triple/
    /// quad groups per [`evac_population::GroupSizeCounts::from_total_size`].
    pub population_size: u32,
    /// Number of sensor nodes.
    pub sensor_count: usize,
    /// Always place a sensor at every exit node.
    pub force_exit_sensors: bool,
    /// Always place a sensor at every rendezvous node.
    pub force_rendezvous_sensors: bool,
    /// Sensor detection probability `P_b`.
    pub detection_prob: f64,
    /// Particles maintained per agent.
    pub particle_count: usize,
    /// Initial inverse length-scale assigned to every particle.
    pub init_alpha: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            ticks: 100,
            population_size: 100,
            sensor_count: 5,
            force_exit_sensors: true,
            force_rendezvous_sensors: false,
            detection_prob: 0.9,
            particle_count: 20,
            init_alpha: 0.2,
        }
    }
}
