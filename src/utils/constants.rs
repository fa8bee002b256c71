use std::str::FromStr;

use crate::scheduler::{FirstComeFirstServed, PriorityFirst, RoundRobin, Scheduler, ShortestJobFirst};

/// Width of one process label in the Gantt chart.
pub const GANTT_CELL_WIDTH: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Fcfs,
    Sjf,
    Priority,
    RoundRobin,
}

impl Algorithm {
    /// All disciplines in the order their reports are printed.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    pub fn scheduler(self) -> Box<dyn Scheduler> {
        match self {
            Algorithm::Fcfs => Box::new(FirstComeFirstServed),
            Algorithm::Sjf => Box::new(ShortestJobFirst),
            Algorithm::Priority => Box::new(PriorityFirst),
            Algorithm::RoundRobin => Box::new(RoundRobin),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fcfs" => Ok(Algorithm::Fcfs),
            "sjf" => Ok(Algorithm::Sjf),
            "priority" => Ok(Algorithm::Priority),
            "rr" => Ok(Algorithm::RoundRobin),
            _ => Err(format!("unknown algorithm '{}'", s)),
        }
    }
}
