use serde::Serialize;

use crate::errors::SchedulerError;
use crate::process_control_block::ProcessControlBlock;

/// Aggregate performance metrics of one scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub avg_turnaround: f64,
    pub avg_waiting: f64,
    pub avg_response: f64,
}

/// Folds the completed per-process timelines into their average
/// turnaround, waiting and response time.
///
/// Only defined for at least one block, and every block must carry a full
/// timeline; both conditions hold for anything returned by an engine.
pub fn collect_metrics(blocks: &[ProcessControlBlock]) -> Result<Metrics, SchedulerError> {
    if blocks.is_empty() {
        return Err(SchedulerError::EmptyProcessSet);
    }

    let mut total_turnaround = 0.0;
    let mut total_waiting = 0.0;
    let mut total_response = 0.0;

    for block in blocks {
        let pid = block.pid();

        total_turnaround += block
            .turnaround()
            .ok_or(SchedulerError::IncompleteSimulation(pid))? as f64;
        total_waiting += block
            .waiting()
            .ok_or(SchedulerError::IncompleteSimulation(pid))? as f64;
        total_response += block
            .response()
            .ok_or(SchedulerError::IncompleteSimulation(pid))? as f64;
    }

    let count = blocks.len() as f64;

    Ok(Metrics {
        avg_turnaround: total_turnaround / count,
        avg_waiting: total_waiting / count,
        avg_response: total_response / count,
    })
}
