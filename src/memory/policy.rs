//! Replacement policy and scope selectors.
//!
//! The four policies crossed with the two scopes give the eight engine
//! variants. They are plain enums: one [`FramePool`](crate::memory::FramePool)
//! type dispatches on them internally, rather than eight separate engine
//! types that would differ in two lines each.

use std::fmt;

/// Which replacement policy a frame pool runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Non-causal look-ahead: evict the resident used farthest in the
    /// future, or never again. Needs the full merged reference trace.
    Optimal,

    /// Evict the resident installed earliest.
    Fifo,

    /// Least-frequently-used: evict the resident with the fewest hits.
    Lfu,

    /// Least-recently-used: evict the resident idle for the longest.
    Lru,
}

impl Policy {
    /// All policies, in reporting order.
    pub const ALL: [Policy; 4] = [Policy::Optimal, Policy::Fifo, Policy::Lfu, Policy::Lru];
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Policy::Optimal => "OPT",
            Policy::Fifo => "FIFO",
            Policy::Lfu => "LFU",
            Policy::Lru => "LRU",
        };
        write!(f, "{}", name)
    }
}

/// How victim selection is scoped.
///
/// Scope only restricts the *candidate set* during victim selection. The
/// capacity bound is always evaluated over the total residents of all
/// processes; a local pool still shares one frame budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Victim may be any resident, regardless of owning process.
    Global,

    /// Victim must belong to the faulting process.
    Local,
}

impl Scope {
    /// Both scopes, in reporting order.
    pub const ALL: [Scope; 2] = [Scope::Global, Scope::Local];
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scope::Global => "Global",
            Scope::Local => "Local",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_display() {
        assert_eq!(format!("{}", Policy::Optimal), "OPT");
        assert_eq!(format!("{}", Policy::Lru), "LRU");
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(format!("{}", Scope::Global), "Global");
        assert_eq!(format!("{}", Scope::Local), "Local");
    }

    #[test]
    fn test_all_covers_every_variant() {
        assert_eq!(Policy::ALL.len(), 4);
        assert_eq!(Scope::ALL.len(), 2);
    }
}
