//! `SimOutputObserver` — bridges `evac_sim::SimObserver` to the particle and
//! observer log writers.

use std::path::Path;

use evac_estimator::Estimator;
use evac_observers::Observers;
use evac_population::Population;
use evac_sim::SimObserver;

use crate::error::OutputResult;
use crate::observer_log::ObserverLogWriter;
use crate::particle_log::ParticleLogWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes the particle log and the observer log every
/// tick.
///
/// Errors from either writer are stored internally because `SimObserver`
/// methods have no return value — check for one with
/// [`take_error`][Self::take_error] after `sim.run()` returns.
pub struct SimOutputObserver {
    particles: ParticleLogWriter,
    observers: ObserverLogWriter,
    last_error: Option<OutputError>,
}

impl SimOutputObserver {
    /// Create an observer writing `particle_path` and `observer_path`.
    pub fn create(particle_path: &Path, observer_path: &Path) -> OutputResult<Self> {
        Ok(Self {
            particles: ParticleLogWriter::create(particle_path)?,
            observers: ObserverLogWriter::create(observer_path)?,
            last_error: None,
        })
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl SimObserver for SimOutputObserver {
    fn on_tick_end(
        &mut self,
        tick: u64,
        _population: &Population,
        observers: &Observers,
        estimator: &Estimator,
    ) {
        let particle_result = self.particles.write_tick(tick, estimator.particles());
        self.store_err(particle_result);

        let observer_result = self.observers.write_tick(tick, observers);
        self.store_err(observer_result);
    }

    fn on_sim_end(&mut self, _final_tick: u64) {
        let r1 = self.particles.finish();
        self.store_err(r1);
        let r2 = self.observers.finish();
        self.store_err(r2);
    }
}
