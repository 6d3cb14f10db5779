//! Physical-memory model and replacement policies.
//!
//! A [`FramePool`] is the bounded set of physical frames shared by the
//! simulated processes. One pool type covers all eight variants:
//! {OPT, FIFO, LFU, LRU} × {Global, Local}.
//!
//! # Components
//! - [`FramePool`] - The frame pool (residency, touch, victim selection)
//! - [`Policy`] / [`Scope`] - The policy and scoping selectors
//! - [`AccessOutcome`] - Hit-or-fault result of a touch

mod frame_pool;
mod policy;

pub use frame_pool::{AccessOutcome, FramePool};
pub use policy::{Policy, Scope};
