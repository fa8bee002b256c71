use super::{Process, TimeStep, ID};

/// The input of every scheduler: processes in the order they were loaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProcessSet {
    processes: Vec<Process>,
}

impl ProcessSet {
    pub fn new(processes: Vec<Process>) -> Self {
        Self { processes }
    }

    pub fn new_empty() -> Self {
        Self {
            processes: Vec::new(),
        }
    }

    pub fn get_processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn get_process_by_id(&self, id: ID) -> Option<&Process> {
        self.processes.iter().find(|process| process.id() == id)
    }

    pub fn add_process(&mut self, process: Process) {
        self.processes.push(process);
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Sum of the bursts of all processes, i.e. the busy time of any schedule.
    pub fn total_burst(&self) -> TimeStep {
        self.processes.iter().map(|process| process.burst()).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }
}

impl FromIterator<Process> for ProcessSet {
    fn from_iter<I: IntoIterator<Item = Process>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
