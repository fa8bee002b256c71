//! CPU scheduling simulation: first-come first-served, shortest job first,
//! priority and round-robin over a fixed set of processes.

pub mod simulation;
pub mod models;
pub mod report;
pub mod utils;

pub use models::scheduler;
pub use models::{Metrics, Process, ProcessSet, ScheduleReport, ScheduleRow, TimeSlice, Timeline, TimeStep, ID};
pub use utils::{constants, errors};
pub use utils::{Algorithm, LoadError};
