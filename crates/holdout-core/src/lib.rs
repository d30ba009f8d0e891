//! Core types and definitions for the HOLDOUT combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, tuning configuration, commands, events, snapshots, the
//! collaborator traits the simulation consumes, and the generic entity pool.
//! It has no dependency on any runtime framework.

pub mod collaborators;
pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod pool;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
