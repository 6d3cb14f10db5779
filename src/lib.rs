//! swapsim - A virtual-memory simulator with swappable page replacement policies.
//!
//! # Architecture
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                           swapsim                              │
//! ├────────────────────────────────────────────────────────────────┤
//! │  ┌────────────────────────────────────────────────────────┐   │
//! │  │            Workload Layer (workload/)                   │   │
//! │  │   name generator → per-process page sequences           │   │
//! │  └────────────────────────────────────────────────────────┘   │
//! │                             ↓                                  │
//! │  ┌────────────────────────────────────────────────────────┐   │
//! │  │            Simulation Layer (sim/)                      │   │
//! │  │   AccessStreams → round-robin Simulator → trace/stats   │   │
//! │  └────────────────────────────────────────────────────────┘   │
//! │                             ↓                                  │
//! │  ┌────────────────────────────────────────────────────────┐   │
//! │  │         Physical Memory (memory/)  [Swappable]          │   │
//! │  │   ┌────────────────────────────────────────────────┐   │   │
//! │  │   │  Policies: OPT | FIFO | LFU | LRU               │   │   │
//! │  │   │  Scopes:   Global | Local                       │   │   │
//! │  │   └────────────────────────────────────────────────┘   │   │
//! │  │          FramePool (one shared frame budget)            │   │
//! │  └────────────────────────────────────────────────────────┘   │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (ProcessId, PageRef, Error, config)
//! - [`memory`] - The frame pool and its eight policy/scope variants
//! - [`sim`] - Access streams, the round-robin driver, traces and stats
//! - [`workload`] - Workload construction and the name-based generator
//!
//! # Quick Start
//! ```
//! use swapsim::{run_policy, Policy, ProcessId, Scope, Workload};
//!
//! let workload = Workload::new(vec![
//!     (ProcessId::new('A'), vec![1, 2, 1]),
//!     (ProcessId::new('B'), vec![1, 3]),
//! ]).unwrap();
//!
//! let report = run_policy(&workload, Policy::Lru, Scope::Global, 3).unwrap();
//! println!("{}", report); // per-step trace plus the fault total
//! ```

// Core modules
pub mod common;
pub mod memory;
pub mod sim;
pub mod workload;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_FRAME_COUNT, DEFAULT_PROCESS_IDS};
pub use common::{Error, PageRef, ProcessId, Result};

pub use memory::{AccessOutcome, FramePool, Policy, Scope};
pub use sim::{
    run_all, run_policy, AccessStream, AllocationCheck, Outcome, RunStats, SimulationReport,
    Simulator, TraceEntry,
};
pub use workload::{workload_from_names, Workload};
