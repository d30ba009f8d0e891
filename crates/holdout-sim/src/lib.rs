//! Simulation engine for HOLDOUT.
//!
//! Owns the wave director, the enemy pool and the combat resolver, runs
//! systems once per tick and produces `MatchSnapshot`s for UI and rendering.

pub mod agent;
pub mod arena;
pub mod combat;
pub mod director;
pub mod engine;
pub mod systems;
pub mod wave;

pub use holdout_core as core;
pub use engine::{SimConfig, SimulationEngine};
