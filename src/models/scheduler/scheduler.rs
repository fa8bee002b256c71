use crate::{ProcessSet, ScheduleReport};

/// A scheduling discipline simulated over a fixed process set.
///
/// Implementations keep no state between runs: each call builds its own
/// working copies and never mutates `processes`, so running the same
/// scheduler twice on the same input yields identical reports.
pub trait Scheduler {
    /// Title printed above the report.
    fn title(&self) -> &'static str;

    /// Simulates the whole process set and returns the resulting report.
    fn run(&self, processes: &ProcessSet) -> ScheduleReport;
}
