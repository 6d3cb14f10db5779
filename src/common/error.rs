//! Error types for swapsim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All recoverable errors in swapsim.
///
/// These cover run configuration and workload construction. A page fault is
/// deliberately *not* here: faults are a modeled outcome of `touch`, handled
/// by the simulator on every occurrence, never an error. Engine contract
/// violations (victim selection over an empty eligible set) panic instead:
/// they indicate the driver's capacity bookkeeping is inconsistent with the
/// engine's, a defect rather than a condition to report.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading workload input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A full name did not split into exactly three words.
    #[error("malformed full name {0:?}: expected exactly three words")]
    MalformedName(String),

    /// A letter outside the workload generator's alphabet.
    #[error("letter {0:?} is not in the workload alphabet")]
    UnknownLetter(char),

    /// A generated access sequence came out empty, so the process would
    /// never issue a reference.
    #[error("process {0} has an empty access sequence")]
    EmptyAccessSequence(char),

    /// Frame-pool capacity of zero: no reference could ever be serviced.
    #[error("frame-pool capacity must be at least 1")]
    ZeroCapacity,

    /// Local-scope replacement with fewer frames than processes. The first
    /// round of references would fill the pool before every process owns a
    /// resident page, so some process's first fault would have an empty
    /// partition to evict from. With one frame per process this cannot
    /// happen: a local eviction replaces a page inside the faulting
    /// process's own partition, which therefore never shrinks to zero.
    #[error(
        "local scope needs at least one frame per process \
         ({frames} frames for {processes} processes)"
    )]
    InsufficientFrames { frames: usize, processes: usize },
}
