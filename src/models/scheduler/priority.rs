use std::cmp::Ordering;

use log::{debug, trace};

use super::scheduler::Scheduler;
use crate::{Process, ProcessSet, ScheduleReport, ScheduleRow, Timeline, TimeStep};

/// Non-preemptive highest-priority-first among the arrived processes.
pub struct PriorityFirst;

impl PriorityFirst {
    /// Orders processes by decreasing priority.
    pub fn by_priority_desc(a: &Process, b: &Process) -> Ordering {
        b.priority().cmp(&a.priority())
    }

    /// Picks the arrived process with the highest priority.
    ///
    /// # Returns
    /// The index in `waiting` of the first process holding the highest
    /// priority among those arrived at `t`, or `None` if none has arrived.
    pub fn select_highest_priority(waiting: &[Process], t: TimeStep) -> Option<usize> {
        let mut best: Option<usize> = None;

        for (i, process) in waiting.iter().enumerate() {
            if !process.has_arrived(t) {
                continue;
            }
            match best {
                Some(b) if process.priority() <= waiting[b].priority() => {}
                _ => best = Some(i),
            }
        }

        best
    }
}

impl Scheduler for PriorityFirst {
    fn title(&self) -> &'static str {
        "Priority"
    }

    fn run(&self, processes: &ProcessSet) -> ScheduleReport {
        // Stable: equal priorities keep their input order
        let mut waiting: Vec<Process> = processes.get_processes().to_vec();
        waiting.sort_by(Self::by_priority_desc);

        let mut service_time: TimeStep = 0;
        let mut rows = Vec::with_capacity(waiting.len());
        let mut timeline = Timeline::new();

        while !waiting.is_empty() {
            let Some(elected) = Self::select_highest_priority(&waiting, service_time) else {
                trace!("Priority: idle at {}", service_time);
                service_time += 1;
                continue;
            };
            let process = waiting.remove(elected);

            let wait = (service_time - process.arrival()).max(0);
            let start = service_time;
            let completion = start + process.burst();

            debug!("Priority: P{} (priority {}) runs [{}, {})", process.id(), process.priority(), start, completion);
            timeline.push(process.id(), start, completion);
            rows.push(ScheduleRow::from_wait(&process, wait));
            service_time = completion;
        }

        ScheduleReport::new(self.title(), rows, timeline, service_time)
    }
}
