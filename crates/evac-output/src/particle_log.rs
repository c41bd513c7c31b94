//! Advisory per-tick particle location log.
//!
//! Per §6: a "time_step" header line, then one CSV line per agent —
//! `agent_id, loc_p0, loc_p1, …` — giving every particle's node index for
//! that agent at that tick. Written once per tick, agent-major, matching
//! `evac_estimator::ParticleSet`'s flat storage order.

use std::fs::File;
use std::path::Path;

use csv::WriterBuilder;
use evac_estimator::ParticleSet;

use crate::error::OutputResult;

/// Writes the particle log to a single CSV-shaped text file.
pub struct ParticleLogWriter {
    writer: csv::Writer<File>,
    finished: bool,
}

impl ParticleLogWriter {
    /// Create (or truncate) the log file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let writer = WriterBuilder::new().flexible(true).from_path(path)?;
        Ok(Self { writer, finished: false })
    }

    /// Append one tick's block: the `time_step` header followed by one row
    /// per agent.
    pub fn write_tick(&mut self, tick: u64, particles: &ParticleSet) -> OutputResult<()> {
        self.writer.write_record(["time_step", &tick.to_string()])?;

        let n = particles.particles_per_agent();
        for agent in 0..particles.agent_count() {
            let mut row = Vec::with_capacity(n + 1);
            row.push(agent.to_string());
            for k in 0..n {
                let flat = agent * n + k;
                row.push(particles.location(flat).index().to_string());
            }
            self.writer.write_record(&row)?;
        }
        Ok(())
    }

    /// Flush the underlying file. Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}
