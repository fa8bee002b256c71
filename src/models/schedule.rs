use super::{Process, TimeSlice, Timeline, TimeStep, ID};

/// Timing of one process under one scheduling discipline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleRow {
    id: ID,
    priority: i64,
    burst: TimeStep,
    arrival: TimeStep,
    wait: TimeStep,         // Time spent eligible but not running
    turnaround: TimeStep,   // wait + burst
    completion: TimeStep,   // Exit time: arrival + wait + burst
}

impl ScheduleRow {
    /// Builds the row of `process` from its waiting time.
    pub fn from_wait(process: &Process, wait: TimeStep) -> Self {
        let turnaround = wait + process.burst();
        Self {
            id: process.id(),
            priority: process.priority(),
            burst: process.burst(),
            arrival: process.arrival(),
            wait,
            turnaround,
            completion: process.arrival() + turnaround,
        }
    }

    /// Builds the row of `process` from its completion time.
    ///
    /// The waiting time goes negative if the process ran before its
    /// arrival, which only round-robin allows.
    pub fn from_completion(process: &Process, completion: TimeStep) -> Self {
        Self::from_wait(process, completion - process.burst() - process.arrival())
    }

    pub fn id(&self) -> ID {
        self.id
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }

    pub fn burst(&self) -> TimeStep {
        self.burst
    }

    pub fn arrival(&self) -> TimeStep {
        self.arrival
    }

    pub fn wait(&self) -> TimeStep {
        self.wait
    }

    pub fn turnaround(&self) -> TimeStep {
        self.turnaround
    }

    pub fn completion(&self) -> TimeStep {
        self.completion
    }
}

/// Aggregate figures of a schedule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    average_wait: f64,
    average_turnaround: f64,
    throughput: f64, // processes per time unit
}

impl Metrics {
    /// Computes the averages over `rows` and the throughput over `elapsed`.
    ///
    /// An empty row set gives NaN averages.
    ///
    /// # Arguments
    /// * `rows` - One row per process.
    /// * `elapsed` - Time the schedule is considered to span.
    pub fn compute(rows: &[ScheduleRow], elapsed: TimeStep) -> Self {
        let count = rows.len() as f64;
        let total_wait: TimeStep = rows.iter().map(ScheduleRow::wait).sum();
        let total_turnaround: TimeStep = rows.iter().map(ScheduleRow::turnaround).sum();

        Self {
            average_wait: total_wait as f64 / count,
            average_turnaround: total_turnaround as f64 / count,
            throughput: count / elapsed as f64,
        }
    }

    pub fn average_wait(&self) -> f64 {
        self.average_wait
    }

    pub fn average_turnaround(&self) -> f64 {
        self.average_turnaround
    }

    pub fn throughput(&self) -> f64 {
        self.throughput
    }
}

/// Everything one scheduling discipline produces for a process set.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleReport {
    title: &'static str,
    rows: Vec<ScheduleRow>,     // Ascending process id
    timeline: Timeline,
    metrics: Metrics,
}

impl ScheduleReport {
    /// Assembles a report. Rows are reordered by ascending process id.
    pub fn new(title: &'static str, mut rows: Vec<ScheduleRow>, timeline: Timeline, elapsed: TimeStep) -> Self {
        rows.sort_by_key(ScheduleRow::id);
        let metrics = Metrics::compute(&rows, elapsed);
        Self {
            title,
            rows,
            timeline,
            metrics,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn row(&self, id: ID) -> Option<&ScheduleRow> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn slices(&self) -> &[TimeSlice] {
        self.timeline.slices()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_completion_keeps_invariants() {
        let process = Process::new(4, 5, 2, 1);
        let row = ScheduleRow::from_completion(&process, 12);

        assert_eq!(row.wait(), 5);
        assert_eq!(row.turnaround(), 10);
        assert_eq!(row.completion(), 12);
        assert_eq!(row.completion(), row.arrival() + row.wait() + row.burst());
    }

    #[test]
    fn test_metrics() {
        let rows = vec![
            ScheduleRow::from_wait(&Process::new(1, 5, 0, 0), 0),
            ScheduleRow::from_wait(&Process::new(2, 3, 0, 0), 5),
        ];
        let metrics = Metrics::compute(&rows, 8);

        assert_eq!(metrics.average_wait(), 2.5);
        assert_eq!(metrics.average_turnaround(), 6.5);
        assert_eq!(metrics.throughput(), 0.25);
    }

    #[test]
    fn test_metrics_of_empty_schedule_are_undefined() {
        let metrics = Metrics::compute(&[], 0);
        assert!(metrics.average_wait().is_nan());
        assert!(metrics.throughput().is_nan());
    }

    #[test]
    fn test_report_orders_rows_by_id() {
        let rows = vec![
            ScheduleRow::from_wait(&Process::new(2, 3, 0, 0), 0),
            ScheduleRow::from_wait(&Process::new(1, 5, 0, 0), 3),
        ];
        let report = ScheduleReport::new("test", rows, Timeline::new(), 8);

        let ids: Vec<ID> = report.rows().iter().map(ScheduleRow::id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(report.row(1).map(ScheduleRow::wait), Some(3));
    }
}
