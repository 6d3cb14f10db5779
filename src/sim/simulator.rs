//! Simulation driver.
//!
//! The [`Simulator`] interleaves the per-process reference streams against
//! one [`FramePool`], round-robin, and records a trace entry per consumed
//! reference. [`run_policy`] wires one policy/scope pair to a fresh copy of
//! a workload; [`run_all`] runs all eight pairs, one thread per engine.

use parking_lot::Mutex;

use crate::common::{Error, PageRef, ProcessId, Result};
use crate::memory::{AccessOutcome, FramePool, Policy, Scope};
use crate::sim::{AccessStream, Outcome, RunStats, SimulationReport, TraceEntry};
use crate::workload::Workload;

/// Which condition gates the free-frame fast path.
///
/// Two variants of this simulator family exist in the wild: one takes the
/// free-frame path only for non-resident pages, the other takes it whenever
/// capacity remains — silently re-installing a resident page and wiping its
/// accumulated frequency/recency. Both are preserved behind this knob;
/// [`AllocationCheck::SkipResident`] is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AllocationCheck {
    /// Free-frame path requires the page not to be resident already.
    #[default]
    SkipResident,

    /// Free-frame path taken on free capacity alone; a resident page gets
    /// re-installed with fresh metadata.
    AllocateBlindly,
}

/// Drives one set of streams against one frame pool.
///
/// # Loop contract
/// Streams are visited in the order supplied, round-robin, until all are
/// exhausted; an exhausted stream is retired without disturbing the others'
/// order. For every reference actually consumed:
/// 1. `advance_time` on the pool, unconditionally.
/// 2. Free-capacity path (subject to [`AllocationCheck`]): `install`,
///    record an allocation entry, count no fault.
/// 3. Otherwise `touch`; a hit is recorded as-is, a fault runs
///    `select_victim` + `install` and increments the fault counter.
///
/// Each simulator owns its pool, streams, trace, and counters; nothing
/// leaks between runs.
///
/// # Run configuration
/// A local-scope pool needs at least one frame per stream. Anything less
/// lets round one fill the pool before every process owns a page, and the
/// next process's first fault would find its own partition empty — so the
/// combination is rejected at construction. With the check passed, victim
/// selection always has an eligible resident: a process allocates on its
/// first reference (the pool cannot be full yet), and local evictions
/// replace pages within the faulting process's partition, which therefore
/// never empties.
pub struct Simulator {
    streams: Vec<AccessStream>,
    pool: FramePool,
    alloc_check: AllocationCheck,
}

impl Simulator {
    /// Create a simulator with the default allocation check.
    ///
    /// # Errors
    /// [`Error::InsufficientFrames`] for a local-scope pool with fewer
    /// frames than streams.
    pub fn new(streams: Vec<AccessStream>, pool: FramePool) -> Result<Self> {
        if pool.scope() == Scope::Local && pool.capacity() < streams.len() {
            return Err(Error::InsufficientFrames {
                frames: pool.capacity(),
                processes: streams.len(),
            });
        }

        Ok(Self {
            streams,
            pool,
            alloc_check: AllocationCheck::default(),
        })
    }

    /// Override the free-frame path's residency check.
    pub fn with_allocation_check(mut self, alloc_check: AllocationCheck) -> Self {
        self.alloc_check = alloc_check;
        self
    }

    /// Run to completion and produce the report.
    ///
    /// Always terminates: every stream is finite and each round consumes
    /// one reference per still-active stream.
    pub fn run(mut self) -> SimulationReport {
        let mut trace = Vec::new();
        let mut stats = RunStats::default();
        let mut finished = vec![false; self.streams.len()];

        while finished.iter().any(|&done| !done) {
            for (i, stream) in self.streams.iter_mut().enumerate() {
                if finished[i] {
                    continue;
                }

                let page = match stream.next() {
                    Some(page) => page,
                    None => {
                        finished[i] = true;
                        continue;
                    }
                };

                stats.references += 1;
                self.pool.advance_time();

                let residents = self.pool.residents();
                let outcome = Self::service(
                    &mut self.pool,
                    self.alloc_check,
                    stream.pid(),
                    page,
                    &mut stats,
                );

                trace.push(TraceEntry {
                    pid: stream.pid(),
                    page,
                    residents,
                    outcome,
                });
            }
        }

        SimulationReport {
            policy: self.pool.policy(),
            scope: self.pool.scope(),
            trace,
            stats,
        }
    }

    /// Service one reference against the pool.
    fn service(
        pool: &mut FramePool,
        alloc_check: AllocationCheck,
        pid: ProcessId,
        page: PageRef,
        stats: &mut RunStats,
    ) -> Outcome {
        let take_free_frame = pool.has_free_capacity()
            && match alloc_check {
                AllocationCheck::SkipResident => !pool.is_resident(page),
                AllocationCheck::AllocateBlindly => true,
            };

        if take_free_frame {
            pool.install(page);
            stats.allocations += 1;
            return Outcome::Allocated;
        }

        match pool.touch(page) {
            AccessOutcome::Hit => {
                stats.hits += 1;
                Outcome::Hit
            }
            AccessOutcome::Fault => {
                let evicted = pool.select_victim(pid);
                pool.install(page);
                stats.faults += 1;
                Outcome::Fault(evicted)
            }
        }
    }
}

/// Run one policy/scope pair against a fresh copy of the workload.
///
/// The optimal engine gets the workload's merged future trace at
/// construction; every engine gets fresh streams, so runs are independent
/// and comparable.
///
/// # Errors
/// [`Error::InsufficientFrames`] for a local-scope run with fewer frames
/// than processes.
pub fn run_policy(
    workload: &Workload,
    policy: Policy,
    scope: Scope,
    capacity: usize,
) -> Result<SimulationReport> {
    let pool = match policy {
        Policy::Optimal => FramePool::optimal(scope, capacity, workload.merged()),
        _ => FramePool::new(policy, scope, capacity),
    };

    Ok(Simulator::new(workload.streams(), pool)?.run())
}

/// Run all eight policy/scope pairs, one thread per engine.
///
/// Engines never share state, so the runs are embarrassingly parallel; each
/// thread gets its own streams (and, for OPT, its own merged trace). Reports
/// come back in the fixed reporting order: Global then Local, each in
/// [`Policy::ALL`] order.
///
/// # Errors
/// [`Error::InsufficientFrames`] when the capacity cannot support the
/// local-scope half of the runs.
pub fn run_all(workload: &Workload, capacity: usize) -> Result<Vec<SimulationReport>> {
    let combos: Vec<(Scope, Policy)> = Scope::ALL
        .iter()
        .flat_map(|&scope| Policy::ALL.iter().map(move |&policy| (scope, policy)))
        .collect();

    let results: Mutex<Vec<(usize, Result<SimulationReport>)>> =
        Mutex::new(Vec::with_capacity(combos.len()));

    std::thread::scope(|s| {
        for (idx, &(scope, policy)) in combos.iter().enumerate() {
            let results = &results;
            s.spawn(move || {
                let report = run_policy(workload, policy, scope, capacity);
                results.lock().push((idx, report));
            });
        }
    });

    let mut reports = results.into_inner();
    reports.sort_by_key(|&(idx, _)| idx);
    reports.into_iter().map(|(_, report)| report).collect()
}
