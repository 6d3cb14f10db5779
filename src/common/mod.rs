//! Common types and utilities shared across swapsim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Identifiers (ProcessId, PageRef)

pub mod config;
pub mod error;
mod page_ref;
mod process_id;

pub use error::{Error, Result};
pub use page_ref::PageRef;
pub use process_id::ProcessId;
