//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Leave `Initializing` and begin wave 1.
    StartMatch,
    /// Pull the trigger once. Rejected while the weapon is cycling.
    Fire,
    /// Playing <-> Paused.
    TogglePause,
    /// Reset everything and begin a fresh match.
    Restart,
}
