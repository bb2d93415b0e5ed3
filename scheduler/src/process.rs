use serde::{Deserialize, Serialize};

use crate::common_types::Pid;

/// The static description of a process, as handed over by the caller.
///
/// Records are read-only input: every engine simulates on its own private
/// working copy and the caller's slice is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pid: Pid,
    arrival_time: usize,
    burst_time: usize,
}

impl Process {
    /// Creates a new Process object
    ///
    /// * `pid` - the process identifier
    /// * `arrival_time` - the instant the process becomes eligible to run
    /// * `burst_time` - total CPU time the process needs; must be positive,
    ///                  which is enforced by the engines before simulating
    pub fn new(pid: Pid, arrival_time: usize, burst_time: usize) -> Process {
        Process {
            pid,
            arrival_time,
            burst_time,
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn arrival_time(&self) -> usize {
        self.arrival_time
    }

    pub fn burst_time(&self) -> usize {
        self.burst_time
    }
}
