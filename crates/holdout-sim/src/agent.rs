//! Enemy agent data.
//!
//! Agents are plain data stored in the director's pool. Behavior is computed
//! by `holdout_enemy_ai::fsm` and applied here; damage and the death
//! sequence are the only transitions an agent handles itself.

use glam::Vec3;

use holdout_core::config::DeathConfig;
use holdout_core::enums::{AgentState, DeathStage};
use holdout_core::pool::Handle;
use holdout_core::state::{AgentView, DeathVisual};
use holdout_core::types::Aabb;

use holdout_enemy_ai::fsm::{AgentUpdate, Evasion};
use holdout_enemy_ai::profiles::EnemyProfile;
use holdout_enemy_ai::timeline;

/// Result of a damage event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageOutcome {
    /// Agent was already dying.
    Ignored,
    Wounded { remaining: f32 },
    /// This hit took the agent to zero health. Reported exactly once per agent.
    Killed,
}

#[derive(Debug, Clone, Default)]
pub struct EnemyAgent {
    /// Scaled once at spawn.
    pub profile: EnemyProfile,
    pub health: f32,
    pub state: AgentState,
    pub position: Vec3,
    /// Yaw in radians.
    pub facing: f32,
    pub attack_ready_at: f32,
    pub evasion: Evasion,
    /// Seconds since entering `Dying`.
    pub death_timer: f32,
    pub collision_enabled: bool,
    /// Wave this agent was spawned for.
    pub wave: u32,
}

impl EnemyAgent {
    /// Re-initialize this (possibly recycled) agent for a new life.
    pub fn spawn(&mut self, position: Vec3, facing: f32, profile: EnemyProfile, wave: u32) {
        *self = Self {
            profile,
            health: profile.max_health,
            state: AgentState::Seeking,
            position,
            facing,
            attack_ready_at: 0.0,
            evasion: Evasion::default(),
            death_timer: 0.0,
            collision_enabled: true,
            wave,
        };
    }

    pub fn is_dying(&self) -> bool {
        self.state.is_terminal()
    }

    /// Hit volume, absent once the agent is a corpse.
    pub fn collider(&self) -> Option<Aabb> {
        self.collision_enabled
            .then(|| Aabb::standing(self.position, self.profile.radius, self.profile.height))
    }

    pub fn is_headshot(&self, hit_point: Vec3) -> bool {
        hit_point.y > self.position.y + self.profile.headshot_height()
    }

    /// Subtract `amount` (clamped at zero). Reaching zero forces `Dying`
    /// from any state; evasion and attack timers are abandoned.
    pub fn take_damage(&mut self, amount: f32) -> DamageOutcome {
        if self.is_dying() {
            return DamageOutcome::Ignored;
        }

        self.health = (self.health - amount.max(0.0)).max(0.0);
        if self.health > 0.0 {
            return DamageOutcome::Wounded {
                remaining: self.health,
            };
        }

        self.state = AgentState::Dying;
        self.collision_enabled = false;
        self.evasion = Evasion::default();
        self.death_timer = 0.0;
        DamageOutcome::Killed
    }

    /// Apply an FSM result. Never called for a dying agent.
    pub fn apply(&mut self, update: &AgentUpdate) {
        debug_assert!(!self.is_dying());
        self.state = update.new_state;
        self.position = update.position;
        self.facing = update.facing;
        self.evasion = update.evasion;
        self.attack_ready_at = update.attack_ready_at;
    }

    /// Advance the death timeline, returning the stages entered.
    pub fn advance_death(&mut self, dt: f32, config: &DeathConfig) -> Vec<DeathStage> {
        if !self.is_dying() {
            return Vec::new();
        }
        let before = self.death_timer;
        self.death_timer += dt;
        timeline::stages_crossed(before, self.death_timer, config)
    }

    pub fn death_finished(&self, config: &DeathConfig) -> bool {
        self.is_dying() && timeline::is_complete(self.death_timer, config)
    }

    pub fn view(&self, handle: Handle, death: &DeathConfig) -> AgentView {
        AgentView {
            handle,
            state: self.state,
            position: self.position,
            facing: self.facing,
            health: self.health,
            max_health: self.profile.max_health,
            is_evading: self.evasion.active,
            death: self.death_visual(death),
        }
    }

    fn death_visual(&self, config: &DeathConfig) -> Option<DeathVisual> {
        self.is_dying()
            .then(|| timeline::death_visual(self.death_timer, config))
    }
}
