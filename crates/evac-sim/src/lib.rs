//! `evac-sim` — tick loop orchestrator wiring population synthesis, the
//! shared behavior kernel, sensor observers, and the particle-filter
//! estimator into one reproducible run.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.ticks:
//!   ① Simulate — step_population: advance every real agent's FSM state
//!   ② Measure  — observers.measure: thin true per-node counts through P_b
//!   ③ Predict  — estimator.predict: advance every particle's FSM state
//!   ④ Update   — estimator.measure: MH-resample particles against the
//!                 sensor reading just taken
//! ```
//!
//! All four steps draw from one seeded [`evac_core::SimRng`], in this fixed
//! order, every tick — the ordering and the single-RNG discipline are what
//! make a run reproducible from `config.seed` alone.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use evac_sim::{NoopObserver, SimBuilder, SimConfig};
//!
//! let graph = /* build a RoadGraph */;
//! let mut sim = SimBuilder::new(SimConfig::default(), graph).build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
