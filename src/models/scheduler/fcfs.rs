use log::debug;

use super::scheduler::Scheduler;
use crate::{ProcessSet, ScheduleReport, ScheduleRow, Timeline, TimeStep};

/// First-come, first-served: processes run to completion in list order.
///
/// The list is not sorted by arrival; callers pass it in execution order.
pub struct FirstComeFirstServed;

impl Scheduler for FirstComeFirstServed {
    fn title(&self) -> &'static str {
        "First-come, first-serve"
    }

    fn run(&self, processes: &ProcessSet) -> ScheduleReport {
        let mut service_time: TimeStep = 0;
        let mut rows = Vec::with_capacity(processes.len());
        let mut timeline = Timeline::new();

        for process in processes.iter() {
            // Back to back: a late arrival starts on the clock, its wait goes negative
            let wait = service_time - process.arrival();
            let start = process.arrival() + wait;
            let row = ScheduleRow::from_wait(process, wait);

            debug!("FCFS: P{} runs [{}, {})", process.id(), start, row.completion());
            timeline.push(process.id(), start, row.completion());
            service_time = row.completion();
            rows.push(row);
        }

        ScheduleReport::new(self.title(), rows, timeline, service_time)
    }
}
