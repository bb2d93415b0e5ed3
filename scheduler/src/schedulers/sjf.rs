use log::{debug, trace};

use crate::common_funcs::{make_control_blocks, validate_processes};
use crate::common_types::Timestamp;
use crate::errors::SchedulerError;
use crate::process::Process;
use crate::process_control_block::ProcessControlBlock;
use crate::scheduler::Scheduler;

/// Non-preemptive Shortest-Job-First: at every decision point the arrived
/// process with the least remaining work runs to completion.
#[derive(Default)]
pub struct SjfScheduler;

impl SjfScheduler {
    pub fn new() -> SjfScheduler {
        SjfScheduler
    }
}

/// Picks the eligible process with the smallest remaining burst.
///
/// Ties go to the earlier arrival, then to the earlier input position,
/// which the `<` comparison over `(remaining, arrival)` and the scan order
/// give for free.
fn pick_shortest(blocks: &[ProcessControlBlock], clock: Timestamp) -> Option<usize> {
    let mut shortest: Option<usize> = None;

    for (idx, block) in blocks.iter().enumerate() {
        if block.has_finished() || block.arrival_time() > clock.get() {
            continue;
        }

        match shortest {
            Some(best) => {
                let candidate = (block.remaining_time(), block.arrival_time());
                let current = (blocks[best].remaining_time(), blocks[best].arrival_time());
                if candidate < current {
                    shortest = Some(idx);
                }
            }
            None => shortest = Some(idx),
        }
    }

    shortest
}

/// Earliest arrival among the processes that still have work
fn next_arrival(blocks: &[ProcessControlBlock]) -> Option<usize> {
    blocks
        .iter()
        .filter(|block| !block.has_finished())
        .map(|block| block.arrival_time())
        .min()
}

impl Scheduler for SjfScheduler {
    fn name(&self) -> &'static str {
        "sjf"
    }

    fn schedule(
        &self,
        processes: &[Process],
    ) -> Result<Vec<ProcessControlBlock>, SchedulerError> {
        validate_processes(processes)?;
        let mut blocks = make_control_blocks(processes)?;

        debug!("sjf: scheduling {} processes", blocks.len());

        let mut clock = Timestamp::new(0);
        let mut completed = 0;

        while completed < blocks.len() {
            match pick_shortest(&blocks, clock) {
                Some(idx) => {
                    let block = &mut blocks[idx];
                    block.dispatch(clock);

                    let burst = block.remaining_time();
                    block.execute(burst);
                    clock = clock + burst;
                    block.complete(clock);
                    completed += 1;

                    trace!("sjf: process {} completed at {}", block.pid(), clock.get());
                }
                None => {
                    /* Nothing has arrived yet: jump straight to the next
                       arrival instead of stepping the clock one unit at a
                       time */
                    match next_arrival(&blocks) {
                        Some(time) => {
                            trace!("sjf: idle from {} to {}", clock.get(), time);
                            clock = Timestamp::new(time);
                        }
                        None => break,
                    }
                }
            }
        }

        Ok(blocks)
    }
}
