//! Run progress records, the final report, and rendering sinks.
//!
//! The optimizer emits structured data only: one [`IterationRecord`] per
//! iteration and one [`RunReport`] at the end, both serde-serializable.
//! Rendering lives entirely in [`ProgressSink`] implementations.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Per-iteration progress summary, emitted after each full swarm sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    /// Iteration index, starting at 0
    pub iteration: usize,
    /// Global best fitness after this iteration's sweep
    pub best_fitness: f64,
    /// Inertia weight used for this iteration
    pub inertia_weight: f64,
}

/// Final result of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Best position found anywhere in the run
    pub best_position: Vec<f64>,
    /// Objective value at `best_position`
    pub best_fitness: f64,
    /// Iteration index of the last global-best improvement, 0 when no
    /// iteration improved on the initialization best
    pub last_improvement: usize,
    /// Number of iterations executed
    pub iterations: usize,
    /// Total objective evaluations, counting initial spawns,
    /// re-evaluations, kill respawns, and global-best recomputations
    pub evaluations: usize,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
    /// Global best fitness after initialization and after each iteration
    pub history: Vec<f64>,
}

/// Receiver for progress records and the final report.
pub trait ProgressSink {
    /// Called once per iteration, after the sweep.
    fn on_iteration(&mut self, record: &IterationRecord);

    /// Called once when the run completes.
    fn on_complete(&mut self, report: &RunReport);
}

/// Sink that discards everything.
///
/// For callers that only want the returned [`RunReport`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn on_iteration(&mut self, _record: &IterationRecord) {}

    fn on_complete(&mut self, _report: &RunReport) {}
}

/// Sink that prints a fixed-width console trace.
///
/// One line per iteration plus a final block with the last improvement,
/// the elapsed time, and the best coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ProgressSink for ConsoleReporter {
    fn on_iteration(&mut self, record: &IterationRecord) {
        println!(
            "#{:<4} Best G = {:<16.12} W = {:<7.5}",
            record.iteration, record.best_fitness, record.inertia_weight
        );
    }

    fn on_complete(&mut self, report: &RunReport) {
        println!(
            "\nLast improvement was on iteration #{}. Time elapsed: {:?}",
            report.last_improvement, report.elapsed
        );
        println!("Coordinates of the best");
        let coordinates: String = report
            .best_position
            .iter()
            .map(|x| format!("{x:>20}"))
            .collect();
        println!("{coordinates}");
    }
}
