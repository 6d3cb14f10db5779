//! Process identifier type.

use std::fmt;

/// Identifies a simulated process.
///
/// A single `char` is enough: workloads are built from a small, fixed set of
/// processes (the default run uses `A`, `B`, `C`), and a one-character id
/// keeps trace output compact (`A3` reads as "process A, page 3").
///
/// # Example
/// ```
/// use swapsim::ProcessId;
///
/// let pid = ProcessId::new('A');
/// assert_eq!(pid.0, 'A');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProcessId(pub char);

impl ProcessId {
    /// Create a new ProcessId.
    #[inline]
    pub fn new(id: char) -> Self {
        ProcessId(id)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
