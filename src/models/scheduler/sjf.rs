use log::{debug, trace};

use super::scheduler::Scheduler;
use crate::{Process, ProcessSet, ScheduleReport, ScheduleRow, Timeline, TimeStep};

/// Preemptive shortest-job-first (shortest remaining time), simulated one
/// time unit at a time.
pub struct ShortestJobFirst;

impl ShortestJobFirst {
    /// Picks the arrived, unfinished process with the least remaining burst.
    ///
    /// # Arguments
    /// * `processes` - The input list, scanned in order.
    /// * `remaining` - Remaining burst of each process, by list index.
    /// * `t` - Current time.
    ///
    /// # Returns
    /// The list index of the elected process; ties go to the lowest index.
    /// `None` when nothing is eligible at `t`.
    pub fn select_shortest(processes: &[Process], remaining: &[TimeStep], t: TimeStep) -> Option<usize> {
        let mut shortest: Option<usize> = None;

        for (i, process) in processes.iter().enumerate() {
            if !process.has_arrived(t) || remaining[i] == 0 {
                continue;
            }
            match shortest {
                Some(best) if remaining[i] >= remaining[best] => {}
                _ => shortest = Some(i),
            }
        }

        shortest
    }
}

impl Scheduler for ShortestJobFirst {
    fn title(&self) -> &'static str {
        "Shortest-job-first"
    }

    fn run(&self, processes: &ProcessSet) -> ScheduleReport {
        let processes = processes.get_processes();
        let mut remaining: Vec<TimeStep> = processes.iter().map(Process::burst).collect();
        let mut completed = 0;
        let mut service_time: TimeStep = 0;
        let mut last_completion: TimeStep = 0;
        let mut rows = Vec::with_capacity(processes.len());
        let mut timeline = Timeline::new();

        while completed < processes.len() {
            let Some(elected) = Self::select_shortest(processes, &remaining, service_time) else {
                trace!("SJF: idle at {}", service_time);
                service_time += 1;
                continue;
            };
            let process = &processes[elected];

            remaining[elected] -= 1;
            timeline.extend_or_push(process.id(), service_time, service_time + 1);
            service_time += 1;

            if remaining[elected] == 0 {
                completed += 1;
                last_completion = service_time;
                debug!("SJF: P{} completes at {}", process.id(), service_time);
                rows.push(ScheduleRow::from_completion(process, service_time));
            }
        }

        ScheduleReport::new(self.title(), rows, timeline, last_completion)
    }
}
