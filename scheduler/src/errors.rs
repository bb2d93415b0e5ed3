use thiserror::Error;

use crate::common_types::Pid;

/// Everything that can go wrong while scheduling a process set.
///
/// Engines validate their input before the simulation starts, so a run is
/// atomic: it either fails up front with one of these or completes fully.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerError {
    /// The caller handed over zero processes.
    #[error("cannot schedule an empty process set")]
    EmptyProcessSet,

    /// A process asked for no CPU time at all.
    #[error("process {0} has a zero burst time")]
    ZeroBurstTime(Pid),

    /// The working state for the run could not be allocated.
    #[error("failed to reserve working state for {0} processes")]
    ResourceExhaustion(usize),

    /// A control block reached the collector without a completion time.
    /// Not reachable through the engines, which only hand back finished
    /// runs.
    #[error("process {0} never completed its simulation")]
    IncompleteSimulation(Pid),
}
