use super::{TimeStep, ID};

/// A contiguous span `[start, stop)` during which `pid` occupied the CPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeSlice {
    pid: ID,
    start: TimeStep,
    stop: TimeStep,
}

impl TimeSlice {
    pub fn new(pid: ID, start: TimeStep, stop: TimeStep) -> Self {
        Self { pid, start, stop }
    }

    pub fn pid(&self) -> ID {
        self.pid
    }

    pub fn start(&self) -> TimeStep {
        self.start
    }

    pub fn stop(&self) -> TimeStep {
        self.stop
    }

    pub fn duration(&self) -> TimeStep {
        self.stop - self.start
    }

    /// Whether two slices share at least one time unit.
    pub fn overlaps(&self, other: &TimeSlice) -> bool {
        self.start < other.stop && other.start < self.stop
    }
}

/// Chronological list of the slices of one simulation run (the Gantt chart).
///
/// Slices are appended in non-decreasing start order; idle time is every
/// unit no slice covers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timeline {
    slices: Vec<TimeSlice>,
}

impl Timeline {
    pub fn new() -> Self {
        Self { slices: Vec::new() }
    }

    /// Appends a slice as is.
    ///
    /// # Arguments
    /// * `pid` - The process that ran.
    /// * `start` - First time unit of the run.
    /// * `stop` - First time unit after the run.
    pub fn push(&mut self, pid: ID, start: TimeStep, stop: TimeStep) {
        debug_assert!(start <= stop, "slice [{start}, {stop}) is reversed");
        self.slices.push(TimeSlice::new(pid, start, stop));
    }

    /// Appends a slice, merging it into the last one when the same process
    /// simply keeps running.
    pub fn extend_or_push(&mut self, pid: ID, start: TimeStep, stop: TimeStep) {
        if let Some(last) = self.slices.last_mut() {
            if last.pid == pid && last.stop == start {
                last.stop = stop;
                return;
            }
        }
        self.push(pid, start, stop);
    }

    pub fn slices(&self) -> &[TimeSlice] {
        &self.slices
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// The slices during which `pid` ran, in chronological order.
    pub fn slices_for(&self, pid: ID) -> impl Iterator<Item = &TimeSlice> + '_ {
        self.slices.iter().filter(move |slice| slice.pid == pid)
    }

    /// Total CPU time granted to `pid`.
    pub fn busy_time(&self, pid: ID) -> TimeStep {
        self.slices_for(pid).map(TimeSlice::duration).sum()
    }

    /// Stop of the last slice, or 0 for an empty timeline.
    pub fn end(&self) -> TimeStep {
        self.slices.last().map_or(0, TimeSlice::stop)
    }
}
