use crate::collector::{collect_metrics, Metrics};
use crate::errors::SchedulerError;
use crate::process::Process;
use crate::process_control_block::ProcessControlBlock;

/// The common interface of the scheduling engines.
///
/// An engine receives an immutable view of the process set, simulates it
/// on a private working copy and returns the completed per-process
/// timelines in the original input order. Separate invocations share no
/// state, so the same engine value can be reused across process sets.
pub trait Scheduler {
    /// Short engine name, used in logs and reports
    fn name(&self) -> &'static str;

    /// Runs the whole simulation and returns one finished control block
    /// per input process, in input order
    ///
    /// * `processes` - the process set; left untouched by the run
    fn schedule(
        &self,
        processes: &[Process],
    ) -> Result<Vec<ProcessControlBlock>, SchedulerError>;

    /// Runs the simulation and folds the timelines into their aggregate
    /// metrics
    fn metrics(&self, processes: &[Process]) -> Result<Metrics, SchedulerError> {
        let blocks = self.schedule(processes)?;
        collect_metrics(&blocks)
    }
}
