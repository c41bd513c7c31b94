//! `evac-output` — advisory per-tick text-line logs.
//!
//! Two logs, neither consumed back by any parser in this workspace:
//!
//! | File                 | Header                                     | One row per   |
//! |----------------------|---------------------------------------------|---------------|
//! | particle log         | `time_step` block header + per-agent rows   | tick, then agent |
//! | observer log         | `time_step,loc_i,sensor_i,true_i,…`         | tick          |
//!
//! Both are driven by [`SimOutputObserver`], which implements
//! `evac_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use evac_output::SimOutputObserver;
//!
//! let mut obs = SimOutputObserver::create(
//!     Path::new("./particles.csv"),
//!     Path::new("./observers.csv"),
//! )?;
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod error;
pub mod observer;
pub mod observer_log;
pub mod particle_log;

#[cfg(test)]
mod tests;

pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use observer_log::ObserverLogWriter;
pub use particle_log::ParticleLogWriter;
