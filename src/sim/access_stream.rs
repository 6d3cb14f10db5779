//! Per-process reference stream.

use crate::common::{PageRef, ProcessId};

/// One process's ordered page references, consumed one at a time.
///
/// Strictly sequential and single-pass: the cursor only moves forward, and
/// once it passes the last element the stream is exhausted for good. Running
/// off the end is the normal terminal condition, not an error — `next()`
/// just keeps returning `None`, which is how the simulator learns to retire
/// the stream.
///
/// # Example
/// ```
/// use swapsim::{AccessStream, PageRef, ProcessId};
///
/// let mut stream = AccessStream::new(ProcessId::new('A'), &[3, 1]);
/// assert_eq!(stream.next(), Some(PageRef::new(ProcessId::new('A'), 3)));
/// assert_eq!(stream.next(), Some(PageRef::new(ProcessId::new('A'), 1)));
/// assert_eq!(stream.next(), None);
/// assert_eq!(stream.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct AccessStream {
    pid: ProcessId,
    refs: Vec<PageRef>,
    cursor: usize,
}

impl AccessStream {
    /// Build a stream for one process from its page numbers.
    ///
    /// Each page number is materialized as a `(process_id, page)` reference
    /// up front; the sequence is immutable afterwards.
    pub fn new(pid: ProcessId, pages: &[u32]) -> Self {
        let refs = pages.iter().map(|&p| PageRef::new(pid, p)).collect();
        Self {
            pid,
            refs,
            cursor: 0,
        }
    }

    /// The owning process.
    #[inline]
    pub fn pid(&self) -> ProcessId {
        self.pid
    }

    /// Whether the stream has run out of references.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.refs.len()
    }

    /// Total number of references the stream was built from.
    #[inline]
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// Whether the stream was built from an empty sequence.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}

impl Iterator for AccessStream {
    type Item = PageRef;

    fn next(&mut self) -> Option<PageRef> {
        let item = self.refs.get(self.cursor).copied();
        if item.is_some() {
            self.cursor += 1;
        }
        item
    }
}
