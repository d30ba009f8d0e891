//! Per-tick systems operating on the director's agents.
//!
//! Systems are plain functions. They hold no state of their own; everything
//! lives in the director, the agents and the collaborators passed in.

pub mod agents;
pub mod cleanup;
pub mod snapshot;
