//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level match state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    /// Before the first wave; nothing is simulated.
    #[default]
    Initializing,
    Playing,
    /// No time flows into any timer.
    Paused,
    /// Terminal until an explicit restart.
    GameOver,
}

/// Enemy behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentState {
    /// Target beyond detection range. Pursues like `Chasing`.
    #[default]
    Seeking,
    /// Target within detection range, outside attack range.
    Chasing,
    /// Target within attack range (inclusive).
    Attacking,
    /// Terminal. Running the cosmetic decay timeline.
    Dying,
}

impl AgentState {
    pub fn is_terminal(self) -> bool {
        self == AgentState::Dying
    }
}

/// Stage of the cosmetic death sequence, reported to rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathStage {
    /// Topple interpolation begins.
    Fall,
    /// Colour desaturation begins.
    Desaturate,
    /// Fade to transparent begins.
    Fade,
    /// Corpse removed from the simulation.
    Removed,
}
