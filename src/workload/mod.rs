//! Workload construction.
//!
//! A [`Workload`] is the run configuration side of a simulation: the ordered
//! page-number sequence for each process. It hands out fresh single-pass
//! streams per engine run (engines are never fed shared cursors) and builds
//! the merged future trace the optimal policy needs.
//!
//! [`name_gen`] is the default generator, turning full names into page
//! sequences. It is a replaceable collaborator: anything producing a finite
//! ordered sequence of small positive integers per process works.

pub mod name_gen;

use crate::common::{Error, PageRef, ProcessId, Result};
use crate::sim::AccessStream;

pub use name_gen::workload_from_names;

/// A multi-process reference workload.
#[derive(Debug, Clone)]
pub struct Workload {
    processes: Vec<(ProcessId, Vec<u32>)>,
}

impl Workload {
    /// Build a workload from per-process page sequences.
    ///
    /// Process order is preserved; it becomes the round-robin visiting
    /// order. A process with no references at all is a configuration error.
    pub fn new(processes: Vec<(ProcessId, Vec<u32>)>) -> Result<Self> {
        for (pid, pages) in &processes {
            if pages.is_empty() {
                return Err(Error::EmptyAccessSequence(pid.0));
            }
        }

        Ok(Self { processes })
    }

    /// Process ids, in round-robin order.
    pub fn process_ids(&self) -> Vec<ProcessId> {
        self.processes.iter().map(|&(pid, _)| pid).collect()
    }

    /// Fresh single-pass streams, one per process.
    ///
    /// Called once per engine run so every run consumes its own cursors.
    pub fn streams(&self) -> Vec<AccessStream> {
        self.processes
            .iter()
            .map(|(pid, pages)| AccessStream::new(*pid, pages))
            .collect()
    }

    /// The merged future trace: the exact order the simulator will consume
    /// references in (round-robin, exhausted processes dropping out).
    ///
    /// This is the look-ahead input for the optimal policy.
    pub fn merged(&self) -> Vec<PageRef> {
        let rounds = self
            .processes
            .iter()
            .map(|(_, pages)| pages.len())
            .max()
            .unwrap_or(0);

        let mut merged = Vec::new();
        for round in 0..rounds {
            for (pid, pages) in &self.processes {
                if let Some(&page) = pages.get(round) {
                    merged.push(PageRef::new(*pid, page));
                }
            }
        }
        merged
    }

    /// Total references across all processes.
    pub fn reference_count(&self) -> usize {
        self.processes.iter().map(|(_, pages)| pages.len()).sum()
    }
}
