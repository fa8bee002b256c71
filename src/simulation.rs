use log::info;

use crate::constants::Algorithm;
use crate::{ProcessSet, ScheduleReport};

/// Runs each requested discipline on the same process set, in the given order.
pub fn run(processes: &ProcessSet, algorithms: &[Algorithm]) -> Vec<ScheduleReport> {
    algorithms
        .iter()
        .map(|algorithm| {
            let report = algorithm.scheduler().run(processes);
            info!(
                "{}: {} slices, average wait {:.2}",
                report.title(),
                report.timeline().len(),
                report.metrics().average_wait()
            );
            report
        })
        .collect()
}
