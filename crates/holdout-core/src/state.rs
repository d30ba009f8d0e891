//! Match snapshot: the complete visible state returned after each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{FeedbackEvent, UiEvent};
use crate::pool::Handle;
use crate::types::SimTime;

/// Complete match state broadcast to UI and rendering after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub state: MatchState,
    pub wave_number: u32,
    pub score: u32,
    pub enemies_remaining: u32,
    /// Spawns still scheduled in the current wave's stagger.
    pub pending_spawns: u32,
    pub player: PlayerView,
    pub agents: Vec<AgentView>,
    pub accuracy: AccuracyView,
    pub ui_events: Vec<UiEvent>,
    pub feedback_events: Vec<FeedbackEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Option<Vec3>,
    pub health: f32,
    pub max_health: f32,
    pub alive: bool,
}

/// One live agent (including corpses still decaying).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentView {
    pub handle: Handle,
    pub state: AgentState,
    pub position: Vec3,
    /// Yaw in radians about +y.
    pub facing: f32,
    pub health: f32,
    pub max_health: f32,
    pub is_evading: bool,
    /// Present only while dying.
    pub death: Option<DeathVisual>,
}

/// Interpolation values for the death sequence, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeathVisual {
    /// 0 = upright, 1 = lying flat.
    pub topple: f32,
    /// 0 = full colour, 1 = grey.
    pub desaturation: f32,
    /// 1 = opaque, 0 = invisible.
    pub opacity: f32,
}

impl Default for DeathVisual {
    fn default() -> Self {
        Self {
            topple: 0.0,
            desaturation: 0.0,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AccuracyView {
    pub shots_fired: u32,
    pub shots_hit: u32,
}

impl AccuracyView {
    /// Hit ratio, 0 when nothing was fired.
    pub fn ratio(&self) -> f32 {
        if self.shots_fired == 0 {
            0.0
        } else {
            self.shots_hit as f32 / self.shots_fired as f32
        }
    }
}
