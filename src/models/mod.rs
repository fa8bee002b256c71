mod process;
pub mod process_set;
pub mod timeline;
pub mod schedule;
pub mod scheduler;

pub use process::Process;
pub use process_set::ProcessSet;
pub use timeline::{TimeSlice, Timeline};
pub use schedule::{Metrics, ScheduleReport, ScheduleRow};

pub type TimeStep = i64;

pub type ID = u32;
