//! Simulation observer trait for progress reporting and data collection.

use evac_estimator::Estimator;
use evac_observers::Observers;
use evac_population::Population;

/// Callbacks invoked by [`crate::Sim::run`] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about. An output writer (particle log,
/// observer log) hangs off `on_tick_end`, reading whatever it needs from the
/// three references without `Sim` knowing anything about file formats.
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: u64) {}

    /// Called at the end of each tick, after the full
    /// simulate → measure → predict → update cycle has run.
    fn on_tick_end(
        &mut self,
        _tick: u64,
        _population: &Population,
        _observers: &Observers,
        _estimator: &Estimator,
    ) {
    }

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: u64) {}
}

/// A [`SimObserver`] that does nothing. Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
