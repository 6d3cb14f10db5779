//! Simulation trace and per-run statistics.

use std::fmt;

use crate::common::{PageRef, ProcessId};
use crate::memory::{Policy, Scope};

/// How one reference was serviced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Serviced by a free frame. No fault is counted on this path.
    Allocated,

    /// The referenced page was already resident.
    Hit,

    /// Page fault: the carried page was evicted to make room.
    Fault(PageRef),
}

/// One trace entry per consumed reference. Produced by the simulator,
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    /// Process that issued the reference.
    pub pid: ProcessId,

    /// The referenced page.
    pub page: PageRef,

    /// Resident-set snapshot as the reference was processed (after the
    /// clock tick, before any install or eviction for this reference).
    pub residents: Vec<PageRef>,

    /// How the reference was serviced.
    pub outcome: Outcome,
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> [", self.page)?;
        for (i, page) in self.residents.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", page)?;
        }
        write!(f, "]")?;

        match self.outcome {
            Outcome::Allocated => write!(f, " = ALLOCATION"),
            Outcome::Hit => Ok(()),
            Outcome::Fault(evicted) => write!(f, " = PAGE FAULT -> {}", evicted),
        }
    }
}

/// Counters for one simulation run.
///
/// Owned by a single run and reset implicitly by constructing a fresh
/// simulator; faults increment exactly once per fault-with-eviction entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// References consumed (one per trace entry).
    pub references: u64,

    /// References that found their page resident.
    pub hits: u64,

    /// References serviced by a free frame.
    pub allocations: u64,

    /// Faults serviced by eviction.
    pub faults: u64,
}

impl RunStats {
    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ refs: {}, hits: {}, allocations: {}, faults: {}, fault_rate: {:.2}% }}",
            self.references,
            self.hits,
            self.allocations,
            self.faults,
            self.fault_rate() * 100.0
        )
    }
}

/// Everything one policy run produced: the step-by-step trace plus the
/// final counters, labelled with the policy/scope pair that ran.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    /// Policy the engine ran.
    pub policy: Policy,

    /// Eviction scope the engine ran under.
    pub scope: Scope,

    /// One entry per consumed reference, in consumption order.
    pub trace: Vec<TraceEntry>,

    /// Final counters for the run.
    pub stats: RunStats,
}

impl SimulationReport {
    /// Label for report headers, e.g. `"Global LRU"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.scope, self.policy)
    }

    /// Final fault count.
    #[inline]
    pub fn fault_count(&self) -> u64 {
        self.stats.faults
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label())?;
        for entry in &self.trace {
            writeln!(f, "{}", entry)?;
        }
        writeln!(f, "PAGE FAULTS: {}", self.stats.faults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(pid: char, n: u32) -> PageRef {
        PageRef::new(ProcessId::new(pid), n)
    }

    #[test]
    fn test_trace_entry_display_fault() {
        let entry = TraceEntry {
            pid: ProcessId::new('A'),
            page: page('A', 3),
            residents: vec![page('A', 1), page('B', 2)],
            outcome: Outcome::Fault(page('B', 2)),
        };

        assert_eq!(format!("{}", entry), "A3 -> [A1, B2] = PAGE FAULT -> B2");
    }

    #[test]
    fn test_trace_entry_display_allocation_and_hit() {
        let alloc = TraceEntry {
            pid: ProcessId::new('A'),
            page: page('A', 1),
            residents: vec![],
            outcome: Outcome::Allocated,
        };
        assert_eq!(format!("{}", alloc), "A1 -> [] = ALLOCATION");

        let hit = TraceEntry {
            pid: ProcessId::new('A'),
            page: page('A', 1),
            residents: vec![page('A', 1)],
            outcome: Outcome::Hit,
        };
        assert_eq!(format!("{}", hit), "A1 -> [A1]");
    }

    #[test]
    fn test_stats_fault_rate() {
        let stats = RunStats {
            references: 10,
            hits: 4,
            allocations: 3,
            faults: 3,
        };
        assert!((stats.fault_rate() - 0.3).abs() < 1e-9);

        assert_eq!(RunStats::default().fault_rate(), 0.0);
    }

    #[test]
    fn test_report_display_has_header_and_total() {
        let report = SimulationReport {
            policy: Policy::Fifo,
            scope: Scope::Local,
            trace: vec![],
            stats: RunStats::default(),
        };

        let text = format!("{}", report);
        assert!(text.starts_with("Local FIFO\n"));
        assert!(text.ends_with("PAGE FAULTS: 0\n"));
    }
}
