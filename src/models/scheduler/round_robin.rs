use log::debug;

use super::scheduler::Scheduler;
use crate::{Process, ProcessSet, ScheduleReport, ScheduleRow, Timeline, TimeStep};

/// Maximum contiguous run granted to a process before it is preempted.
///
/// Fixed for every run; it is not read from the command line.
pub const QUANTUM: TimeStep = 3;

/// Preemptive round-robin: repeated passes over the list in input order,
/// each unfinished process running for at most one quantum per pass.
///
/// Arrival times do not gate execution.
pub struct RoundRobin;

impl Scheduler for RoundRobin {
    fn title(&self) -> &'static str {
        "Round-robin"
    }

    fn run(&self, processes: &ProcessSet) -> ScheduleReport {
        let processes = processes.get_processes();
        let mut remaining: Vec<TimeStep> = processes.iter().map(Process::burst).collect();
        let mut completions: Vec<TimeStep> = vec![0; processes.len()];
        let mut service_time: TimeStep = 0;
        let mut timeline = Timeline::new();

        let mut done = false;
        while !done {
            done = true;
            for (i, process) in processes.iter().enumerate() {
                if remaining[i] == 0 {
                    continue;
                }
                done = false;

                let run = remaining[i].min(QUANTUM);
                let start = service_time;
                service_time += run;
                remaining[i] -= run;
                timeline.push(process.id(), start, service_time);

                if remaining[i] == 0 {
                    completions[i] = service_time;
                    debug!("RR: P{} completes at {}", process.id(), service_time);
                }
            }
        }

        // The run is accounted one quantum past the last completion
        service_time += QUANTUM;

        let rows = processes
            .iter()
            .zip(&completions)
            .map(|(process, &completion)| ScheduleRow::from_completion(process, completion))
            .collect();

        ScheduleReport::new(self.title(), rows, timeline, service_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TimeSlice;

    #[test]
    fn test_alternates_full_quanta() {
        let processes = ProcessSet::new(vec![
            Process::new(1, 9, 0, 0),
            Process::new(2, 9, 0, 0),
        ]);
        let report = RoundRobin.run(&processes);

        let pids: Vec<_> = report.slices().iter().map(|s| s.pid()).collect();
        assert_eq!(pids, vec![1, 2, 1, 2, 1, 2]);
        assert!(report.slices().iter().all(|s| s.duration() == QUANTUM));
        assert_eq!(report.timeline().end(), 18);

        assert_eq!(report.row(1).map(|r| (r.completion(), r.wait())), Some((15, 6)));
        assert_eq!(report.row(2).map(|r| (r.completion(), r.wait())), Some((18, 9)));
        // Throughput is measured over 18 + one trailing quantum
        assert_eq!(report.metrics().throughput(), 2.0 / 21.0);
    }

    #[test]
    fn test_short_remainder_runs_to_completion() {
        let processes = ProcessSet::new(vec![
            Process::new(1, 4, 0, 0),
            Process::new(2, 2, 0, 0),
        ]);
        let report = RoundRobin.run(&processes);

        assert_eq!(
            report.slices(),
            &[
                TimeSlice::new(1, 0, 3),
                TimeSlice::new(2, 3, 5),
                TimeSlice::new(1, 5, 6),
            ]
        );
        assert_eq!(report.row(2).map(|r| r.completion()), Some(5));
    }

    #[test]
    fn test_finished_processes_are_skipped() {
        let processes = ProcessSet::new(vec![
            Process::new(1, 3, 0, 0),
            Process::new(2, 7, 0, 0),
        ]);
        let report = RoundRobin.run(&processes);

        // P1 finishes on the first pass and never reappears
        assert_eq!(report.timeline().slices_for(1).count(), 1);
        assert_eq!(report.timeline().slices_for(2).count(), 3);
        assert_eq!(report.timeline().busy_time(2), 7);
    }

    #[test]
    fn test_fairness_over_three_processes() {
        let processes = ProcessSet::new(vec![
            Process::new(1, 9, 0, 0),
            Process::new(2, 9, 0, 0),
            Process::new(3, 9, 0, 0),
        ]);
        let report = RoundRobin.run(&processes);

        for pid in 1..=3 {
            let slices: Vec<_> = report.timeline().slices_for(pid).collect();
            assert_eq!(slices.len(), 3);
            assert!(slices.iter().all(|s| s.duration() == QUANTUM));
        }
        // No process gets a second turn before every process had its first
        let first_pass: Vec<_> = report.slices()[..3].iter().map(|s| s.pid()).collect();
        assert_eq!(first_pass, vec![1, 2, 3]);
        assert!(report.slices().windows(2).all(|w| w[0].pid() != w[1].pid()));
    }
}
