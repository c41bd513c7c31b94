//! Advisory per-tick sensor reading log.
//!
//! Per §6: header `time_step,loc_i,sensor_i,true_i,…` (one `loc`/`sensor`/
//! `true` triple per sensor node), one data line per tick.

use std::fs::File;
use std::path::Path;

use csv::WriterBuilder;
use evac_observers::Observers;

use crate::error::OutputResult;

/// Writes the sensor-reading log to a single CSV-shaped text file.
pub struct ObserverLogWriter {
    writer: csv::Writer<File>,
    header_written: bool,
    finished: bool,
}

impl ObserverLogWriter {
    /// Create (or truncate) the log file at `path`. The header depends on
    /// the sensor count, so it is written lazily on the first tick rather
    /// than at construction.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let writer = WriterBuilder::new().has_headers(false).from_path(path)?;
        Ok(Self { writer, header_written: false, finished: false })
    }

    /// Append one tick's reading. Writes the header first if this is the
    /// first call.
    pub fn write_tick(&mut self, tick: u64, obs: &Observers) -> OutputResult<()> {
        if !self.header_written {
            let mut header = vec!["time_step".to_string()];
            for i in 0..obs.len() {
                header.push(format!("loc_{i}"));
                header.push(format!("sensor_{i}"));
                header.push(format!("true_{i}"));
            }
            self.writer.write_record(&header)?;
            self.header_written = true;
        }

        let mut row = Vec::with_capacity(1 + obs.len() * 3);
        row.push(tick.to_string());
        for i in 0..obs.len() {
            row.push(obs.sensor_nodes()[i].index().to_string());
            row.push(obs.sensor_count()[i].to_string());
            row.push(obs.true_count()[i].to_string());
        }
        self.writer.write_record(&row)?;
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
