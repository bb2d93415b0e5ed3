//! The scheduling engines, one file per discipline.
//!
//! Every engine implements the [`Scheduler`](crate::Scheduler) trait and
//! is exported from here.

mod fcfs;
pub use fcfs::FcfsScheduler;

mod sjf;
pub use sjf::SjfScheduler;

mod round_robin;
pub use round_robin::RoundRobinScheduler;
