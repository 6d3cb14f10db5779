//! FramePool - the bounded physical-memory model.
//!
//! One engine type covers all eight policy/scope variants. The policies
//! differ only in their victim-selection key and their time-advance side
//! effect, so they share a single resident map and dispatch internally
//! instead of existing as eight near-identical types.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use crate::common::{PageRef, ProcessId};
use crate::memory::{Policy, Scope};

/// Outcome of [`FramePool::touch`].
///
/// A fault is a modeled event (the page is not resident), not an error.
/// The caller drives the eviction/installation sequence; `touch` itself
/// never mutates residency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The page is resident; on-hit bookkeeping was applied.
    Hit,
    /// The page is not resident; no state was changed.
    Fault,
}

/// Distance to a page's next use, for the optimal policy.
///
/// The derived ordering puts `In(a) < In(b)` for `a < b` and every `In(_)`
/// below `Never`, so "largest distance" naturally prefers pages that are
/// never referenced again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum NextUse {
    In(usize),
    Never,
}

/// Per-resident bookkeeping.
///
/// All three fields are maintained uniformly; each policy reads only its
/// own. Keeping them together lets one map serve every policy.
#[derive(Debug, Clone, Copy)]
struct FrameMeta {
    /// Installation sequence number (FIFO ordering).
    installed: u64,

    /// Hits since installation, starting at 1 (LFU).
    frequency: u64,

    /// Ticks since last touch; reset to 0 on hit and install (LRU).
    recency: u64,
}

/// Look-ahead state for the optimal policy.
///
/// Holds the full merged future reference sequence and, for every page
/// appearing anywhere in it, the distance to its next occurrence at or
/// after the current reference. Recomputed on every tick, like the system
/// it models: O(pages × trace) per tick, fine at workload scale.
struct Lookahead {
    trace: Vec<PageRef>,
    pages: BTreeSet<PageRef>,
    next_use: BTreeMap<PageRef, NextUse>,
    step: usize,
}

impl Lookahead {
    fn new(trace: Vec<PageRef>) -> Self {
        let pages = trace.iter().copied().collect();
        Self {
            trace,
            pages,
            next_use: BTreeMap::new(),
            step: 0,
        }
    }

    /// Recompute every page's next-use distance, measured from the
    /// reference being processed right now, then move past it.
    fn retarget(&mut self) {
        let start = self.step.min(self.trace.len());
        for &page in &self.pages {
            let dist = self.trace[start..]
                .iter()
                .position(|&p| p == page)
                .map_or(NextUse::Never, NextUse::In);
            self.next_use.insert(page, dist);
        }
        self.step += 1;
    }
}

/// A bounded pool of physical frames under one replacement policy.
///
/// # Contract
/// The simulator drives the pool through a fixed sequence per reference:
/// `advance_time`, then either the free-capacity path (`install`) or the
/// full path (`touch`, and on a fault `select_victim` + `install`).
/// `select_victim` requires at least one eligible resident; calling it
/// with none is a driver bookkeeping defect and panics.
///
/// # Invariant
/// The number of residents never exceeds `capacity`, *totalled across all
/// processes* — even for [`Scope::Local`], where only the victim choice is
/// partitioned per process. That asymmetry (shared budget, scoped
/// eviction) is deliberate.
///
/// # Example
/// ```
/// use swapsim::{AccessOutcome, FramePool, PageRef, Policy, ProcessId, Scope};
///
/// let a1 = PageRef::new(ProcessId::new('A'), 1);
/// let mut pool = FramePool::new(Policy::Fifo, Scope::Global, 2);
///
/// pool.advance_time();
/// assert!(pool.has_free_capacity());
/// pool.install(a1);
///
/// pool.advance_time();
/// assert_eq!(pool.touch(a1), AccessOutcome::Hit);
/// ```
pub struct FramePool {
    policy: Policy,
    scope: Scope,
    capacity: usize,

    /// Resident pages with their policy metadata. A `BTreeMap` so candidate
    /// iteration follows the documented tie-break order (smallest PageRef).
    residents: BTreeMap<PageRef, FrameMeta>,

    /// Monotonic installation counter.
    install_seq: u64,

    /// Present only for [`Policy::Optimal`].
    lookahead: Option<Lookahead>,
}

impl FramePool {
    /// Create a pool for one of the causal policies (FIFO, LFU, LRU).
    ///
    /// # Panics
    /// Panics if `capacity` is 0, or if `policy` is [`Policy::Optimal`]
    /// (which needs the future trace; use [`FramePool::optimal`]).
    pub fn new(policy: Policy, scope: Scope, capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        assert!(
            policy != Policy::Optimal,
            "optimal policy requires the future trace; use FramePool::optimal"
        );

        Self {
            policy,
            scope,
            capacity,
            residents: BTreeMap::new(),
            install_seq: 0,
            lookahead: None,
        }
    }

    /// Create an optimal-policy pool from the full merged future trace.
    ///
    /// The trace must be the exact sequence the simulator will consume, in
    /// consumption order; the distances come from it.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn optimal(scope: Scope, capacity: usize, future: Vec<PageRef>) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        Self {
            policy: Policy::Optimal,
            scope,
            capacity,
            residents: BTreeMap::new(),
            install_seq: 0,
            lookahead: Some(Lookahead::new(future)),
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The pool's replacement policy.
    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// The pool's eviction scope.
    #[inline]
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Number of frames in the pool.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total residents across all processes.
    #[inline]
    pub fn resident_count(&self) -> usize {
        self.residents.len()
    }

    /// Whether the given page is resident.
    #[inline]
    pub fn is_resident(&self, page: PageRef) -> bool {
        self.residents.contains_key(&page)
    }

    /// True while the total resident count is below capacity.
    ///
    /// Always the shared total, never a per-process quota, for both scopes.
    #[inline]
    pub fn has_free_capacity(&self) -> bool {
        self.residents.len() < self.capacity
    }

    /// Sorted snapshot of the resident set.
    pub fn residents(&self) -> Vec<PageRef> {
        self.residents.keys().copied().collect()
    }

    // ========================================================================
    // The engine contract
    // ========================================================================

    /// Advance the simulated clock by one reference.
    ///
    /// Called once per consumed reference, before residency and capacity
    /// checks, hit or fault alike. LRU ages every resident; the optimal
    /// policy recomputes next-use distances; FIFO and LFU do nothing.
    pub fn advance_time(&mut self) {
        match self.policy {
            Policy::Lru => {
                for meta in self.residents.values_mut() {
                    meta.recency += 1;
                }
            }
            Policy::Optimal => {
                self.lookahead
                    .as_mut()
                    .expect("optimal pool constructed without a future trace")
                    .retarget();
            }
            Policy::Fifo | Policy::Lfu => {}
        }
    }

    /// Hit-or-fault detection for one reference.
    ///
    /// On a hit, applies on-hit bookkeeping (frequency increments, recency
    /// resets; each policy reads only its own field). On a fault, returns
    /// without mutating anything: eviction and installation are driven by
    /// the caller, not hidden in here.
    pub fn touch(&mut self, page: PageRef) -> AccessOutcome {
        match self.residents.get_mut(&page) {
            Some(meta) => {
                meta.frequency += 1;
                meta.recency = 0;
                AccessOutcome::Hit
            }
            None => AccessOutcome::Fault,
        }
    }

    /// Choose and remove one resident according to the policy.
    ///
    /// For [`Scope::Local`] only `pid`'s own residents are candidates; for
    /// [`Scope::Global`] all residents are. Ties break to the smallest
    /// `PageRef`.
    ///
    /// # Panics
    /// Panics if the eligible set is empty. That can only happen when the
    /// driver's capacity bookkeeping disagrees with the pool's, which is a
    /// defect, not a runtime condition.
    pub fn select_victim(&mut self, pid: ProcessId) -> PageRef {
        let victim = match self.policy {
            Policy::Fifo => self.pick(pid, |_, meta| Reverse(meta.installed)),
            Policy::Lfu => self.pick(pid, |_, meta| Reverse(meta.frequency)),
            Policy::Lru => self.pick(pid, |_, meta| meta.recency),
            Policy::Optimal => {
                let next_use = &self
                    .lookahead
                    .as_ref()
                    .expect("optimal pool constructed without a future trace")
                    .next_use;
                self.pick(pid, |page, _| {
                    next_use.get(&page).copied().unwrap_or(NextUse::Never)
                })
            }
        };

        let victim = victim.unwrap_or_else(|| {
            panic!("select_victim: no eligible resident for process {}", pid)
        });

        self.residents.remove(&victim);
        victim
    }

    /// Insert a newly faulted-in (or freshly allocated) page.
    ///
    /// Metadata starts at frequency 1 and recency 0, at the tail of the
    /// installation order. Installing an already-resident page replaces its
    /// metadata, which is exactly the "blind allocation" variant's
    /// documented behavior.
    pub fn install(&mut self, page: PageRef) {
        let meta = FrameMeta {
            installed: self.install_seq,
            frequency: 1,
            recency: 0,
        };
        self.install_seq += 1;
        self.residents.insert(page, meta);
    }

    // ========================================================================
    // Internal: victim search
    // ========================================================================

    /// Argmax of `key` over the eligible residents.
    ///
    /// Strictly-greater comparison over ascending `PageRef` iteration makes
    /// the smallest tied page win. Min-keyed policies pass `Reverse` keys.
    fn pick<K: Ord>(
        &self,
        pid: ProcessId,
        key: impl Fn(PageRef, &FrameMeta) -> K,
    ) -> Option<PageRef> {
        let mut best: Option<(PageRef, K)> = None;

        for (&page, meta) in &self.residents {
            if self.scope == Scope::Local && page.pid != pid {
                continue;
            }

            let k = key(page, meta);
            let better = match &best {
                Some((_, best_k)) => k > *best_k,
                None => true,
            };
            if better {
                best = Some((page, k));
            }
        }

        best.map(|(page, _)| page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(pid: char, n: u32) -> PageRef {
        PageRef::new(ProcessId::new(pid), n)
    }

    fn pid(c: char) -> ProcessId {
        ProcessId::new(c)
    }

    /// Install a page the way the simulator would: tick first.
    fn step_install(pool: &mut FramePool, p: PageRef) {
        pool.advance_time();
        pool.install(p);
    }

    #[test]
    fn test_capacity_tracking() {
        let mut pool = FramePool::new(Policy::Fifo, Scope::Global, 2);
        assert!(pool.has_free_capacity());
        assert_eq!(pool.resident_count(), 0);

        step_install(&mut pool, page('A', 1));
        assert!(pool.has_free_capacity());

        step_install(&mut pool, page('B', 1));
        assert!(!pool.has_free_capacity());
        assert_eq!(pool.resident_count(), 2);
    }

    #[test]
    fn test_touch_fault_does_not_mutate() {
        let mut pool = FramePool::new(Policy::Lfu, Scope::Global, 2);
        step_install(&mut pool, page('A', 1));

        pool.advance_time();
        assert_eq!(pool.touch(page('A', 2)), AccessOutcome::Fault);
        assert_eq!(pool.residents(), vec![page('A', 1)]);
    }

    #[test]
    fn test_fifo_evicts_oldest() {
        let mut pool = FramePool::new(Policy::Fifo, Scope::Global, 2);
        step_install(&mut pool, page('A', 1));
        step_install(&mut pool, page('B', 1));

        // Touching the oldest page must not save it under FIFO.
        pool.advance_time();
        assert_eq!(pool.touch(page('A', 1)), AccessOutcome::Hit);

        assert_eq!(pool.select_victim(pid('A')), page('A', 1));
        assert_eq!(pool.select_victim(pid('A')), page('B', 1));
    }

    #[test]
    fn test_lfu_evicts_least_frequent() {
        let mut pool = FramePool::new(Policy::Lfu, Scope::Global, 2);
        step_install(&mut pool, page('A', 1));
        step_install(&mut pool, page('B', 1));

        // A1: frequency 3, B1: frequency 1
        pool.advance_time();
        pool.touch(page('A', 1));
        pool.advance_time();
        pool.touch(page('A', 1));

        assert_eq!(pool.select_victim(pid('A')), page('B', 1));
    }

    #[test]
    fn test_lfu_tie_breaks_to_smallest_page() {
        let mut pool = FramePool::new(Policy::Lfu, Scope::Global, 3);
        step_install(&mut pool, page('C', 2));
        step_install(&mut pool, page('A', 5));
        step_install(&mut pool, page('B', 1));

        // All at frequency 1; smallest PageRef is A5.
        assert_eq!(pool.select_victim(pid('B')), page('A', 5));
    }

    #[test]
    fn test_lru_touch_resets_recency() {
        let mut pool = FramePool::new(Policy::Lru, Scope::Global, 2);
        step_install(&mut pool, page('A', 1));
        step_install(&mut pool, page('B', 1));

        // B1 was installed later, but touching A1 makes B1 the stalest.
        pool.advance_time();
        pool.touch(page('A', 1));

        assert_eq!(pool.select_victim(pid('A')), page('B', 1));
    }

    #[test]
    fn test_lru_ages_all_residents_on_tick() {
        let mut pool = FramePool::new(Policy::Lru, Scope::Global, 3);
        step_install(&mut pool, page('A', 1));
        step_install(&mut pool, page('A', 2));

        // A1 has aged one tick more than A2.
        assert_eq!(pool.select_victim(pid('A')), page('A', 1));
    }

    #[test]
    fn test_optimal_evicts_never_used_again() {
        // A2 appears only at the front of the future; A1 and B1 recur.
        let future = vec![page('A', 2), page('A', 1), page('B', 1), page('A', 1), page('B', 1)];
        let mut pool = FramePool::optimal(Scope::Global, 3, future);

        step_install(&mut pool, page('A', 2));
        step_install(&mut pool, page('A', 1));
        step_install(&mut pool, page('B', 1));

        // Whatever the insertion order, the never-again page goes first.
        pool.advance_time();
        assert_eq!(pool.select_victim(pid('B')), page('A', 2));
    }

    #[test]
    fn test_optimal_evicts_farthest_next_use() {
        // After three installs the cursor sits at index 3, where A1 is the
        // current reference, B1 comes next, and C1 is farthest out.
        let future = vec![
            page('A', 1),
            page('B', 1),
            page('C', 1),
            page('A', 1),
            page('B', 1),
            page('C', 1),
        ];
        let mut pool = FramePool::optimal(Scope::Global, 3, future);

        step_install(&mut pool, page('A', 1));
        step_install(&mut pool, page('B', 1));
        step_install(&mut pool, page('C', 1));

        // Tick for the 4th reference (A1): now A1 is nearest, C1 farthest.
        pool.advance_time();
        assert_eq!(pool.select_victim(pid('A')), page('C', 1));
    }

    #[test]
    fn test_local_scope_restricts_candidates() {
        let mut pool = FramePool::new(Policy::Fifo, Scope::Local, 3);
        step_install(&mut pool, page('A', 1));
        step_install(&mut pool, page('B', 1));
        step_install(&mut pool, page('A', 2));

        // B's fault may only evict B's pages, even though A1 is older.
        assert_eq!(pool.select_victim(pid('B')), page('B', 1));
    }

    #[test]
    fn test_local_scope_shares_capacity_budget() {
        let mut pool = FramePool::new(Policy::Lru, Scope::Local, 2);
        step_install(&mut pool, page('A', 1));
        step_install(&mut pool, page('B', 1));

        // Pool is full for everyone, even though each process holds one page.
        assert!(!pool.has_free_capacity());
    }

    #[test]
    #[should_panic(expected = "no eligible resident")]
    fn test_select_victim_empty_eligible_set_panics() {
        let mut pool = FramePool::new(Policy::Fifo, Scope::Local, 2);
        step_install(&mut pool, page('A', 1));

        // B has no residents of its own.
        pool.select_victim(pid('B'));
    }

    #[test]
    #[should_panic(expected = "capacity must be > 0")]
    fn test_zero_capacity_panics() {
        FramePool::new(Policy::Fifo, Scope::Global, 0);
    }

    #[test]
    #[should_panic(expected = "optimal policy requires the future trace")]
    fn test_optimal_without_trace_panics() {
        FramePool::new(Policy::Optimal, Scope::Global, 4);
    }

    #[test]
    fn test_reinstall_resets_metadata() {
        let mut pool = FramePool::new(Policy::Lfu, Scope::Global, 2);
        step_install(&mut pool, page('A', 1));
        step_install(&mut pool, page('B', 1));

        pool.advance_time();
        pool.touch(page('A', 1));
        pool.touch(page('A', 1));

        // Blind re-install drops the accumulated frequency; A1 now loses
        // the LFU comparison it would otherwise win.
        pool.install(page('A', 1));
        pool.advance_time();
        pool.touch(page('B', 1));
        assert_eq!(pool.select_victim(pid('A')), page('A', 1));
    }
}
