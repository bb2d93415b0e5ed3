//! The workload description consumed by the runner.
//!
//! A workload is a TOML document with an optional Round Robin quantum and
//! one `[[process]]` table per process:
//!
//! ```toml
//! quantum = 2
//!
//! [[process]]
//! pid = 1
//! arrival = 0
//! burst = 5
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use schedsim::{Pid, Process};

/// Quantum used when neither the workload file nor the command line set one
pub const DEFAULT_QUANTUM: usize = 2;

#[derive(Debug, Error)]
pub enum WorkloadError {
    #[error("cannot read workload file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed workload file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid time quantum: {0}")]
    BadQuantum(String),
}

#[derive(Debug, Deserialize)]
pub struct Workload {
    quantum: Option<usize>,
    #[serde(rename = "process")]
    processes: Vec<ProcessEntry>,
}

#[derive(Debug, Deserialize)]
struct ProcessEntry {
    pid: usize,
    arrival: usize,
    burst: usize,
}

impl Workload {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Workload, WorkloadError> {
        let contents = fs::read_to_string(path)?;
        Workload::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Workload, WorkloadError> {
        Ok(toml::from_str(contents)?)
    }

    /// The built-in demo set, used when no workload file is given
    pub fn demo() -> Workload {
        Workload {
            quantum: Some(DEFAULT_QUANTUM),
            processes: vec![
                ProcessEntry { pid: 1, arrival: 0, burst: 5 },
                ProcessEntry { pid: 2, arrival: 1, burst: 3 },
                ProcessEntry { pid: 3, arrival: 2, burst: 1 },
            ],
        }
    }

    pub fn quantum(&self) -> usize {
        self.quantum.unwrap_or(DEFAULT_QUANTUM)
    }

    /// The process records, in file order
    pub fn processes(&self) -> Vec<Process> {
        self.processes
            .iter()
            .map(|entry| Process::new(Pid::new(entry.pid), entry.arrival, entry.burst))
            .collect()
    }
}
