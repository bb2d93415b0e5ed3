use crate::common_types::{Pid, Timestamp};
use crate::process::Process;

/// The runtime state of one process inside a single scheduling run.
///
/// A block is created from a `Process` when an engine starts simulating,
/// is mutated only by that engine's stepping logic, and is handed back to
/// the caller as the per-process timeline once the run finished. No block
/// outlives the run that created it.
#[derive(Debug, Clone, Copy)]
pub struct ProcessControlBlock {
    process: Process,
    remaining_time: usize,
    start_time: Option<Timestamp>,
    completion_time: Option<Timestamp>,
}

impl ProcessControlBlock {
    pub(crate) fn new(process: Process) -> ProcessControlBlock {
        ProcessControlBlock {
            process,
            remaining_time: process.burst_time(),
            start_time: None,
            completion_time: None,
        }
    }

    pub fn pid(&self) -> Pid {
        self.process.pid()
    }

    pub fn arrival_time(&self) -> usize {
        self.process.arrival_time()
    }

    pub fn burst_time(&self) -> usize {
        self.process.burst_time()
    }

    /// CPU time the process still needs
    pub fn remaining_time(&self) -> usize {
        self.remaining_time
    }

    /// Clock value of the first dispatch, `None` until the process ran
    pub fn start_time(&self) -> Option<Timestamp> {
        self.start_time
    }

    /// Clock value at which the burst was exhausted
    pub fn completion_time(&self) -> Option<Timestamp> {
        self.completion_time
    }

    /// Puts the process on the CPU. The start time is recorded on the
    /// first dispatch only; later dispatches of a preempted process leave
    /// it untouched.
    pub(crate) fn dispatch(&mut self, now: Timestamp) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
    }

    /// Consumes `time` units of the remaining burst
    pub(crate) fn execute(&mut self, time: usize) {
        debug_assert!(time <= self.remaining_time);
        self.remaining_time -= time;
    }

    pub(crate) fn complete(&mut self, now: Timestamp) {
        self.completion_time = Some(now);
    }

    pub fn has_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Completion minus arrival. Defined once the run completed.
    pub fn turnaround(&self) -> Option<usize> {
        self.completion_time
            .map(|time| time.get() - self.process.arrival_time())
    }

    /// Time spent ready but not running
    pub fn waiting(&self) -> Option<usize> {
        self.turnaround()
            .map(|turnaround| turnaround - self.process.burst_time())
    }

    /// Time from arrival to the first dispatch
    pub fn response(&self) -> Option<usize> {
        self.start_time
            .map(|time| time.get() - self.process.arrival_time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> ProcessControlBlock {
        ProcessControlBlock::new(Process::new(Pid::new(1), 2, 4))
    }

    #[test]
    fn start_time_is_set_only_once() {
        let mut pcb = block();
        pcb.dispatch(Timestamp::new(3));
        pcb.execute(2);
        pcb.dispatch(Timestamp::new(7));
        assert_eq!(pcb.start_time().map(|t| t.get()), Some(3));
    }

    #[test]
    fn derived_times_follow_the_timeline() {
        let mut pcb = block();
        pcb.dispatch(Timestamp::new(5));
        pcb.execute(4);
        pcb.complete(Timestamp::new(9));

        assert!(pcb.has_finished());
        assert_eq!(pcb.turnaround(), Some(7));
        assert_eq!(pcb.waiting(), Some(3));
        assert_eq!(pcb.response(), Some(3));
    }

    #[test]
    fn unfinished_block_has_no_derived_times() {
        let pcb = block();
        assert_eq!(pcb.turnaround(), None);
        assert_eq!(pcb.waiting(), None);
        assert_eq!(pcb.response(), None);
    }
}
