//! Events emitted by the simulation for UI and rendering feedback.
//!
//! Events accumulate in an [`EventQueue`] during a tick and are drained into
//! the snapshot returned by that tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::DeathStage;
use crate::pool::Handle;

/// Notifications for the HUD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiEvent {
    ScoreChanged { score: u32 },
    WaveChanged { wave: u32 },
    HealthChanged { current: f32, max: f32 },
    GameOver { score: u32, wave: u32, time_secs: f32 },
    WaveAnnounced { text: String },
}

/// Visual feedback hooks for the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeedbackEvent {
    /// Weapon discharged.
    MuzzleFlash { origin: Vec3 },
    /// Bullet path from the muzzle to the hit point (or maximum range).
    Tracer { origin: Vec3, end: Vec3 },
    /// Agent took non-ignored damage.
    HitFlash { agent: Handle, headshot: bool },
    /// Agent entered a stage of its death sequence.
    DeathStage { agent: Handle, stage: DeathStage },
}

/// Per-tick outbox.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventQueue {
    pub ui: Vec<UiEvent>,
    pub feedback: Vec<FeedbackEvent>,
}

impl EventQueue {
    pub fn ui(&mut self, event: UiEvent) {
        self.ui.push(event);
    }

    pub fn feedback(&mut self, event: FeedbackEvent) {
        self.feedback.push(event);
    }

    /// Take everything queued so far, leaving the queue empty.
    pub fn drain(&mut self) -> EventQueue {
        std::mem::take(self)
    }

    pub fn is_empty(&self) -> bool {
        self.ui.is_empty() && self.feedback.is_empty()
    }
}
