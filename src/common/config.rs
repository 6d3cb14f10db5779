//! Configuration constants for swapsim.

use crate::common::ProcessId;

/// Default number of physical frames in the simulated pool.
///
/// Small enough that the default three-process workloads overflow it and
/// exercise every eviction path, large enough for the policies to diverge
/// visibly in their fault counts.
pub const DEFAULT_FRAME_COUNT: usize = 10;

/// Process ids for the default three-process run.
///
/// Capacity and the process-id set are run configuration: supplied once and
/// shared identically across all eight policy runs so fault counts are
/// comparable.
pub const DEFAULT_PROCESS_IDS: [ProcessId; 3] =
    [ProcessId('A'), ProcessId('B'), ProcessId('C')];
