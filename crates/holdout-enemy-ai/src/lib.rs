//! Enemy AI for HOLDOUT.
//!
//! Implements the per-agent behavior state machine, difficulty-scaled enemy
//! profiles and the cosmetic death timeline.

pub mod fsm;
pub mod profiles;
pub mod timeline;

pub use holdout_core as core;

#[cfg(test)]
mod tests;
