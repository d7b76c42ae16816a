//! Per-iteration progress records.
//!
//! Engines append one [`IterationRecord`] per iteration when tracing is
//! enabled. Elapsed time is advisory only and never influences the search.

use std::time::Instant;

/// Snapshot of an engine after one iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRecord {
    /// Iteration (generation) number; the GA's initial population is 0.
    pub iteration: usize,
    /// Best cost the engine reports for this iteration.
    pub best_cost: f64,
    /// Seconds since the run started.
    pub elapsed_secs: f64,
    /// Summed violations over the whole population, colony or swarm.
    pub total_violations: f64,
}

/// Collects iteration records for one run.
#[derive(Debug)]
pub(crate) struct Recorder {
    start: Instant,
    enabled: bool,
    records: Vec<IterationRecord>,
}

impl Recorder {
    pub(crate) fn new(enabled: bool, capacity: usize) -> Self {
        Self {
            start: Instant::now(),
            enabled,
            records: if enabled {
                Vec::with_capacity(capacity)
            } else {
                Vec::new()
            },
        }
    }

    pub(crate) fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    pub(crate) fn record(&mut self, iteration: usize, best_cost: f64, total_violations: f64) {
        self.push(iteration, best_cost, self.elapsed_secs(), total_violations);
    }

    pub(crate) fn push(
        &mut self,
        iteration: usize,
        best_cost: f64,
        elapsed_secs: f64,
        total_violations: f64,
    ) {
        if self.enabled {
            self.records.push(IterationRecord {
                iteration,
                best_cost,
                elapsed_secs,
                total_violations,
            });
        }
    }

    pub(crate) fn finish(self) -> Vec<IterationRecord> {
        self.records
    }
}
