//! A CPU scheduling simulator.
//!
//! This library provides the structures and engines necessary to simulate
//! classical single-processor scheduling disciplines over a fixed process
//! set and to report their aggregate performance metrics. The simulation
//! is an offline discrete-event loop: the clock is an integer counter and
//! repeated runs over the same input are fully deterministic.
//!

use std::num::NonZeroUsize;

mod schedulers;

pub use schedulers::FcfsScheduler;
pub use schedulers::SjfScheduler;
pub use schedulers::RoundRobinScheduler;

mod scheduler;
pub use crate::scheduler::Scheduler;

mod common_types;
pub use crate::common_types::Pid;
pub use crate::common_types::Timestamp;

mod process;
pub use crate::process::Process;

mod process_control_block;
pub use process_control_block::ProcessControlBlock;

mod collector;
pub use crate::collector::Metrics;
pub use crate::collector::collect_metrics;

mod errors;
pub use crate::errors::SchedulerError;

mod common_funcs;

/// Returns a structure that implements the `Scheduler` trait with a
/// first-come-first-served policy
///
/// Processes run to completion in arrival order; equal arrival times keep
/// the original input order.
pub fn fcfs() -> impl Scheduler {
    FcfsScheduler::new()
}

/// Returns a structure that implements the `Scheduler` trait with a
/// non-preemptive shortest-job-first policy
///
/// At every decision point the engine picks the arrived process with the
/// least remaining work and lets it run to completion.
pub fn shortest_job_first() -> impl Scheduler {
    SjfScheduler::new()
}

/// Returns a structure that implements the `Scheduler` trait with a
/// preemptive round robin policy
///
/// * `quanta` - the time quantum that a process can run before it is
///              preempted and sent to the back of the ready queue
pub fn round_robin(quanta: NonZeroUsize) -> impl Scheduler {
    RoundRobinScheduler::new(quanta)
}
