pub mod scheduler;
pub mod fcfs;
pub mod sjf;
pub mod priority;
pub mod round_robin;

pub use scheduler::Scheduler;
pub use fcfs::FirstComeFirstServed;
pub use sjf::ShortestJobFirst;
pub use priority::PriorityFirst;
pub use round_robin::{RoundRobin, QUANTUM};
