//! Simulation driver and trace recording.
//!
//! # Components
//! - [`Simulator`] - Round-robin driver for streams against one pool
//! - [`AccessStream`] - Single-pass per-process reference stream
//! - [`TraceEntry`] / [`Outcome`] - Step-by-step fault trace
//! - [`SimulationReport`] / [`RunStats`] - Per-run results
//! - [`run_policy`] / [`run_all`] - One engine, or all eight in parallel

mod access_stream;
mod simulator;
mod trace;

pub use access_stream::AccessStream;
pub use simulator::{run_all, run_policy, AllocationCheck, Simulator};
pub use trace::{Outcome, RunStats, SimulationReport, TraceEntry};
