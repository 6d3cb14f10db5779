//! Page reference type.

use std::fmt;

use crate::common::ProcessId;

/// One memory-page reference: a page number qualified by its owning process.
///
/// Two processes referencing page 3 refer to *different* pages; the process
/// id is part of the identity. Equality and hashing are by value, and the
/// derived ordering (process id first, then page number) is the documented
/// tie-break order for victim selection: when a policy's key leaves several
/// residents tied, the lexicographically smallest `PageRef` is evicted.
///
/// # Example
/// ```
/// use swapsim::{PageRef, ProcessId};
///
/// let page = PageRef::new(ProcessId::new('A'), 3);
/// assert_eq!(format!("{}", page), "A3");
/// assert!(page < PageRef::new(ProcessId::new('B'), 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageRef {
    /// Process that owns this page.
    pub pid: ProcessId,

    /// Page number within the process's address space (positive by
    /// construction in generated workloads).
    pub page: u32,
}

impl PageRef {
    /// Create a new PageRef.
    #[inline]
    pub fn new(pid: ProcessId, page: u32) -> Self {
        PageRef { pid, page }
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pid, self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(pid: char, n: u32) -> PageRef {
        PageRef::new(ProcessId::new(pid), n)
    }

    #[test]
    fn test_page_ref_identity_includes_process() {
        assert_eq!(page('A', 3), page('A', 3));
        assert_ne!(page('A', 3), page('B', 3));
    }

    #[test]
    fn test_page_ref_ordering_is_pid_then_page() {
        assert!(page('A', 9) < page('B', 1));
        assert!(page('A', 1) < page('A', 2));
    }

    #[test]
    fn test_page_ref_display() {
        assert_eq!(format!("{}", page('B', 12)), "B12");
    }
}
