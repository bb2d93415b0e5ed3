use log::{debug, trace};

use crate::common_funcs::{make_control_blocks, validate_processes};
use crate::common_types::Timestamp;
use crate::errors::SchedulerError;
use crate::process::Process;
use crate::process_control_block::ProcessControlBlock;
use crate::scheduler::Scheduler;

/// First-Come-First-Served: processes run to completion in arrival order,
/// without preemption.
#[derive(Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    pub fn new() -> FcfsScheduler {
        FcfsScheduler
    }
}

impl Scheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "fcfs"
    }

    fn schedule(
        &self,
        processes: &[Process],
    ) -> Result<Vec<ProcessControlBlock>, SchedulerError> {
        validate_processes(processes)?;
        let mut blocks = make_control_blocks(processes)?;

        debug!("fcfs: scheduling {} processes", blocks.len());

        /* Stable sort over indices: equal arrival times keep their
           input order */
        let mut order: Vec<usize> = (0..blocks.len()).collect();
        order.sort_by_key(|&idx| blocks[idx].arrival_time());

        let mut clock = Timestamp::new(0);
        for idx in order {
            let block = &mut blocks[idx];

            /* The CPU sits idle until the next process arrives */
            if clock.get() < block.arrival_time() {
                trace!("fcfs: idle from {} to {}", clock.get(), block.arrival_time());
                clock = Timestamp::new(block.arrival_time());
            }

            block.dispatch(clock);

            let burst = block.burst_time();
            block.execute(burst);
            clock = clock + burst;
            block.complete(clock);

            trace!("fcfs: process {} completed at {}", block.pid(), clock.get());
        }

        Ok(blocks)
    }
}
