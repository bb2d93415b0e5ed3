use std::collections::VecDeque;
use std::num::NonZeroUsize;

use log::{debug, trace};

use crate::common_funcs::{make_control_blocks, reserved_vec, validate_processes};
use crate::common_types::Timestamp;
use crate::errors::SchedulerError;
use crate::process::Process;
use crate::process_control_block::ProcessControlBlock;
use crate::scheduler::Scheduler;

/// Preemptive Round Robin: processes take time-sliced turns on the CPU
/// and unfinished ones go back to the tail of a FIFO ready queue.
///
/// The queue grows on demand; a process can be enqueued many times over
/// one run, so no fixed bound by the process count would be correct.
pub struct RoundRobinScheduler {
    quanta: NonZeroUsize,
}

impl RoundRobinScheduler {
    /// Creates a new RoundRobinScheduler
    ///
    /// * `quanta` - the time quantum a process may run before it is
    ///              preempted; a zero quantum is unrepresentable
    pub fn new(quanta: NonZeroUsize) -> RoundRobinScheduler {
        RoundRobinScheduler { quanta }
    }
}

/// Earliest arrival among processes that still have work and are not in
/// the ready queue
fn next_arrival(blocks: &[ProcessControlBlock], queued: &[bool]) -> Option<usize> {
    blocks
        .iter()
        .enumerate()
        .filter(|(idx, block)| !block.has_finished() && !queued[*idx])
        .map(|(_, block)| block.arrival_time())
        .min()
}

/// Moves every arrived, unfinished process that is not queued yet to the
/// tail of the ready queue, in input order
fn enqueue_arrivals(
    blocks: &[ProcessControlBlock],
    queued: &mut [bool],
    ready: &mut VecDeque<usize>,
    clock: Timestamp,
) {
    for (idx, block) in blocks.iter().enumerate() {
        if !block.has_finished() && !queued[idx] && block.arrival_time() <= clock.get() {
            ready.push_back(idx);
            queued[idx] = true;
        }
    }
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "round_robin"
    }

    fn schedule(
        &self,
        processes: &[Process],
    ) -> Result<Vec<ProcessControlBlock>, SchedulerError> {
        validate_processes(processes)?;
        let mut blocks = make_control_blocks(processes)?;

        let mut ready: VecDeque<usize> = VecDeque::new();
        ready
            .try_reserve(blocks.len())
            .map_err(|_| SchedulerError::ResourceExhaustion(blocks.len()))?;

        let mut queued: Vec<bool> = reserved_vec(blocks.len())?;
        queued.resize(blocks.len(), false);

        /* Processes present at time zero enter the queue in input order */
        for (idx, block) in blocks.iter().enumerate() {
            if block.arrival_time() == 0 {
                ready.push_back(idx);
                queued[idx] = true;
            }
        }

        debug!(
            "round_robin: scheduling {} processes with quantum {}",
            blocks.len(),
            self.quanta
        );

        let mut clock = Timestamp::new(0);
        let mut completed = 0;

        while completed < blocks.len() {
            let idx = match ready.pop_front() {
                Some(idx) => idx,
                None => {
                    /* The CPU is idle: jump to the earliest pending
                       arrival, or stop if nothing is left to arrive */
                    match next_arrival(&blocks, &queued) {
                        Some(time) => {
                            trace!("round_robin: idle from {} to {}", clock.get(), time);
                            if clock.get() < time {
                                clock = Timestamp::new(time);
                            }
                            enqueue_arrivals(&blocks, &mut queued, &mut ready, clock);
                            continue;
                        }
                        None => break,
                    }
                }
            };

            let block = &mut blocks[idx];
            block.dispatch(clock);

            let slice = block.remaining_time().min(self.quanta.get());
            block.execute(slice);
            clock = clock + slice;

            /* Arrivals during the slice go in before the preempted
               process: a process that shows up exactly when the quantum
               expires is queued ahead of the requeued one */
            enqueue_arrivals(&blocks, &mut queued, &mut ready, clock);

            if blocks[idx].has_finished() {
                blocks[idx].complete(clock);
                queued[idx] = false;
                completed += 1;
                trace!(
                    "round_robin: process {} completed at {}",
                    blocks[idx].pid(),
                    clock.get()
                );
            } else {
                ready.push_back(idx);
            }
        }

        Ok(blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common_types::Pid;
    use crate::schedulers::FcfsScheduler;

    fn workload(entries: &[(usize, usize, usize)]) -> Vec<Process> {
        entries
            .iter()
            .map(|&(pid, arrival, burst)| Process::new(Pid::new(pid), arrival, burst))
            .collect()
    }

    fn quanta(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).unwrap()
    }

    #[test]
    fn slices_are_bounded_by_the_quantum() {
        let procs = workload(&[(1, 0, 5), (2, 0, 2)]);
        let blocks = RoundRobinScheduler::new(quanta(2)).schedule(&procs).unwrap();

        /* 1 runs 0-2, 2 runs 2-4 and finishes, 1 runs 4-6 and 6-7 */
        assert_eq!(blocks[1].completion_time().map(|t| t.get()), Some(4));
        assert_eq!(blocks[0].completion_time().map(|t| t.get()), Some(7));
    }

    #[test]
    fn first_dispatch_sets_the_response_time() {
        let procs = workload(&[(1, 0, 5), (2, 1, 3), (3, 2, 1)]);
        let blocks = RoundRobinScheduler::new(quanta(2)).schedule(&procs).unwrap();

        assert_eq!(blocks[0].response(), Some(0));
        assert_eq!(blocks[1].response(), Some(1));
        assert_eq!(blocks[2].response(), Some(2));
    }

    #[test]
    fn arrival_at_quantum_boundary_precedes_the_preempted_process() {
        /* 2 arrives exactly when 1's first slice ends, so it runs next */
        let procs = workload(&[(1, 0, 4), (2, 2, 1)]);
        let blocks = RoundRobinScheduler::new(quanta(2)).schedule(&procs).unwrap();

        assert_eq!(blocks[1].start_time().map(|t| t.get()), Some(2));
        assert_eq!(blocks[1].completion_time().map(|t| t.get()), Some(3));
        assert_eq!(blocks[0].completion_time().map(|t| t.get()), Some(5));
    }

    #[test]
    fn idle_gap_jumps_to_the_next_arrival() {
        let procs = workload(&[(1, 3, 2), (2, 9, 2)]);
        let blocks = RoundRobinScheduler::new(quanta(4)).schedule(&procs).unwrap();

        assert_eq!(blocks[0].start_time().map(|t| t.get()), Some(3));
        assert_eq!(blocks[1].start_time().map(|t| t.get()), Some(9));
        assert_eq!(blocks[1].waiting(), Some(0));
    }

    #[test]
    fn large_quantum_degenerates_to_fcfs() {
        let procs = workload(&[(1, 0, 5), (2, 0, 3), (3, 0, 1)]);
        let rr = RoundRobinScheduler::new(quanta(5)).schedule(&procs).unwrap();
        let fcfs = FcfsScheduler::new().schedule(&procs).unwrap();

        for (rr_block, fcfs_block) in rr.iter().zip(fcfs.iter()) {
            assert_eq!(rr_block.completion_time(), fcfs_block.completion_time());
        }
    }

    #[test]
    fn single_process_runs_without_preemption_overhead() {
        let procs = workload(&[(1, 0, 7)]);
        let blocks = RoundRobinScheduler::new(quanta(2)).schedule(&procs).unwrap();

        assert_eq!(blocks[0].turnaround(), Some(7));
        assert_eq!(blocks[0].waiting(), Some(0));
        assert_eq!(blocks[0].response(), Some(0));
    }

    #[test]
    fn rejects_an_empty_set() {
        let result = RoundRobinScheduler::new(quanta(2)).schedule(&[]);
        assert_eq!(result.unwrap_err(), SchedulerError::EmptyProcessSet);
    }
}
