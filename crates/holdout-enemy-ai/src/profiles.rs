//! Difficulty-scaled enemy profiles.
//!
//! A profile is computed once when an agent spawns and never rescaled.

use holdout_core::config::EnemyConfig;

/// Stats for a single agent after difficulty scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    pub max_health: f32,
    /// Ground speed (m/s).
    pub speed: f32,
    pub attack_damage: f32,
    pub attack_range: f32,
    pub detection_range: f32,
    pub attack_cooldown_secs: f32,
    /// Turn rate (rad/s).
    pub rotation_speed: f32,
    /// Evasion probability per second.
    pub evade_chance: f32,
    pub evade_duration_secs: f32,
    pub evade_speed_factor: f32,
    pub evasion_trigger_distance: f32,
    pub height: f32,
    pub radius: f32,
    pub headshot_height_fraction: f32,
}

impl EnemyProfile {
    /// Height above the agent's feet beyond which a hit counts as a headshot.
    pub fn headshot_height(&self) -> f32 {
        self.height * self.headshot_height_fraction
    }
}

impl Default for EnemyProfile {
    fn default() -> Self {
        scaled_profile(&EnemyConfig::default(), 1.0)
    }
}

/// Scale health, damage and speed by `difficulty_factor`.
/// Speed is capped at `config.max_speed`; every other field is copied.
pub fn scaled_profile(config: &EnemyConfig, difficulty_factor: f32) -> EnemyProfile {
    EnemyProfile {
        max_health: config.max_health * difficulty_factor,
        speed: (config.speed * difficulty_factor).min(config.max_speed),
        attack_damage: config.attack_damage * difficulty_factor,
        attack_range: config.attack_range,
        detection_range: config.detection_range,
        attack_cooldown_secs: config.attack_cooldown_secs,
        rotation_speed: config.rotation_speed,
        evade_chance: config.evade_chance,
        evade_duration_secs: config.evade_duration_secs,
        evade_speed_factor: config.evade_speed_factor,
        evasion_trigger_distance: config.evasion_trigger_distance,
        height: config.height,
        radius: config.radius,
        headshot_height_fraction: config.headshot_height_fraction,
    }
}
