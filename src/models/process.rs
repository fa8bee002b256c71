use super::{TimeStep, ID};

/// A process to be scheduled on the simulated CPU.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Process {
    id: ID,             // Unique identifier, also the 1-based row of the output table
    arrival: TimeStep,  // Time unit at which the process becomes eligible
    burst: TimeStep,    // Total CPU time required
    priority: i64,      // Higher is more urgent, 0 when absent from the input
}

impl Process {
    pub fn new(id: ID, burst: TimeStep, arrival: TimeStep, priority: i64) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority,
        }
    }

    pub fn id(&self) -> ID {
        self.id
    }

    pub fn arrival(&self) -> TimeStep {
        self.arrival
    }

    pub fn burst(&self) -> TimeStep {
        self.burst
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }

    /// Whether the process has arrived at time `t`.
    pub fn has_arrived(&self, t: TimeStep) -> bool {
        self.arrival <= t
    }
}
