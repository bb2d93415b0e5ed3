use crate::errors::SchedulerError;
use crate::process::Process;
use crate::process_control_block::ProcessControlBlock;

/// Checks the preconditions shared by all engines: at least one process,
/// every burst strictly positive.
pub(crate) fn validate_processes(processes: &[Process]) -> Result<(), SchedulerError> {
    if processes.is_empty() {
        return Err(SchedulerError::EmptyProcessSet);
    }

    for process in processes {
        if process.burst_time() == 0 {
            return Err(SchedulerError::ZeroBurstTime(process.pid()));
        }
    }

    Ok(())
}

/// A vector with `capacity` reserved up front, so an allocation failure
/// surfaces as an error instead of aborting the process.
pub(crate) fn reserved_vec<T>(capacity: usize) -> Result<Vec<T>, SchedulerError> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(capacity)
        .map_err(|_| SchedulerError::ResourceExhaustion(capacity))?;

    Ok(vec)
}

/// Builds the private working copy for one engine invocation, in input
/// order. The caller's records are copied, never mutated.
pub(crate) fn make_control_blocks(
    processes: &[Process],
) -> Result<Vec<ProcessControlBlock>, SchedulerError> {
    let mut blocks = reserved_vec(processes.len())?;
    for process in processes {
        blocks.push(ProcessControlBlock::new(*process));
    }

    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common_types::Pid;

    #[test]
    fn rejects_an_empty_set() {
        assert_eq!(
            validate_processes(&[]),
            Err(SchedulerError::EmptyProcessSet)
        );
    }

    #[test]
    fn rejects_a_zero_burst() {
        let procs = [
            Process::new(Pid::new(1), 0, 3),
            Process::new(Pid::new(2), 1, 0),
        ];
        assert_eq!(
            validate_processes(&procs),
            Err(SchedulerError::ZeroBurstTime(Pid::new(2)))
        );
    }

    #[test]
    fn control_blocks_keep_input_order() {
        let procs = [
            Process::new(Pid::new(9), 4, 2),
            Process::new(Pid::new(3), 0, 1),
        ];
        let blocks = make_control_blocks(&procs).unwrap();
        assert_eq!(blocks[0].pid(), Pid::new(9));
        assert_eq!(blocks[1].pid(), Pid::new(3));
        assert_eq!(blocks[0].remaining_time(), 2);
        assert!(blocks[0].start_time().is_none());
    }
}
