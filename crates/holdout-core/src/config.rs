//! Tuning configuration.
//!
//! Defaults come from [`constants`](crate::constants). Any subset of fields
//! can be overridden from JSON; missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Wave cadence, difficulty scaling and score ledger values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    pub base_enemy_count: f32,
    pub enemies_per_wave: f32,
    pub difficulty_scaling: f32,
    pub cooldown_secs: f32,
    pub spawn_interval_secs: f32,
    pub completion_bonus: u32,
    pub kill_score: u32,
    pub headshot_bonus: u32,
    pub pool_capacity: usize,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            base_enemy_count: WAVE_BASE_ENEMY_COUNT,
            enemies_per_wave: WAVE_ENEMIES_PER_WAVE,
            difficulty_scaling: WAVE_DIFFICULTY_SCALING,
            cooldown_secs: WAVE_COOLDOWN_SECS,
            spawn_interval_secs: WAVE_SPAWN_INTERVAL_SECS,
            completion_bonus: WAVE_COMPLETION_BONUS,
            kill_score: KILL_SCORE,
            headshot_bonus: HEADSHOT_BONUS,
            pool_capacity: ENEMY_POOL_CAPACITY,
        }
    }
}

/// Base enemy stats and behavior tuning, before difficulty scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub max_health: f32,
    pub speed: f32,
    pub max_speed: f32,
    pub attack_damage: f32,
    pub attack_range: f32,
    pub detection_range: f32,
    pub attack_cooldown_secs: f32,
    pub rotation_speed: f32,
    pub evade_chance: f32,
    pub evade_duration_secs: f32,
    pub evade_speed_factor: f32,
    pub evasion_trigger_distance: f32,
    pub height: f32,
    pub radius: f32,
    pub headshot_height_fraction: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            max_health: ENEMY_MAX_HEALTH,
            speed: ENEMY_SPEED,
            max_speed: ENEMY_MAX_SPEED,
            attack_damage: ENEMY_ATTACK_DAMAGE,
            attack_range: ENEMY_ATTACK_RANGE,
            detection_range: ENEMY_DETECTION_RANGE,
            attack_cooldown_secs: ENEMY_ATTACK_COOLDOWN_SECS,
            rotation_speed: ENEMY_ROTATION_SPEED,
            evade_chance: ENEMY_EVADE_CHANCE,
            evade_duration_secs: ENEMY_EVADE_DURATION_SECS,
            evade_speed_factor: ENEMY_EVADE_SPEED_FACTOR,
            evasion_trigger_distance: ENEMY_EVASION_TRIGGER_DISTANCE,
            height: ENEMY_HEIGHT,
            radius: ENEMY_RADIUS,
            headshot_height_fraction: HEADSHOT_HEIGHT_FRACTION,
        }
    }
}

/// Cosmetic death timeline, in seconds since death.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeathConfig {
    pub fall_duration_secs: f32,
    pub desaturate_duration_secs: f32,
    pub fade_start_secs: f32,
    pub total_duration_secs: f32,
}

impl Default for DeathConfig {
    fn default() -> Self {
        Self {
            fall_duration_secs: DEATH_FALL_DURATION_SECS,
            desaturate_duration_secs: DEATH_DESATURATE_DURATION_SECS,
            fade_start_secs: DEATH_FADE_START_SECS,
            total_duration_secs: DEATH_TOTAL_DURATION_SECS,
        }
    }
}

/// Player weapon and accuracy-bonus tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    pub fire_rate_secs: f32,
    pub base_damage: f32,
    pub range: f32,
    pub accuracy: f32,
    pub spread_scale: f32,
    pub bonus_min_shots: u32,
    pub bonus_interval: u32,
    pub bonus_threshold: f32,
    pub bonus_points: u32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            fire_rate_secs: WEAPON_FIRE_RATE_SECS,
            base_damage: WEAPON_BASE_DAMAGE,
            range: WEAPON_RANGE,
            accuracy: WEAPON_ACCURACY,
            spread_scale: WEAPON_SPREAD_SCALE,
            bonus_min_shots: ACCURACY_BONUS_MIN_SHOTS,
            bonus_interval: ACCURACY_BONUS_INTERVAL,
            bonus_threshold: ACCURACY_BONUS_THRESHOLD,
            bonus_points: ACCURACY_BONUS_POINTS,
        }
    }
}

/// Complete tuning for one match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    pub waves: WaveConfig,
    pub enemy: EnemyConfig,
    pub death: DeathConfig,
    pub weapon: WeaponConfig,
}

impl CombatConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.waves;
        positive("waves.base_enemy_count", w.base_enemy_count)?;
        non_negative("waves.enemies_per_wave", w.enemies_per_wave)?;
        positive("waves.difficulty_scaling", w.difficulty_scaling)?;
        non_negative("waves.cooldown_secs", w.cooldown_secs)?;
        positive("waves.spawn_interval_secs", w.spawn_interval_secs)?;

        let e = &self.enemy;
        positive("enemy.max_health", e.max_health)?;
        non_negative("enemy.speed", e.speed)?;
        non_negative("enemy.max_speed", e.max_speed)?;
        non_negative("enemy.attack_damage", e.attack_damage)?;
        positive("enemy.attack_range", e.attack_range)?;
        positive("enemy.detection_range", e.detection_range)?;
        if e.attack_range > e.detection_range {
            return Err(ConfigError::RangeOrder {
                attack_range: e.attack_range,
                detection_range: e.detection_range,
            });
        }
        non_negative("enemy.attack_cooldown_secs", e.attack_cooldown_secs)?;
        positive("enemy.rotation_speed", e.rotation_speed)?;
        non_negative("enemy.evade_chance", e.evade_chance)?;
        non_negative("enemy.evade_duration_secs", e.evade_duration_secs)?;
        within("enemy.evade_speed_factor", e.evade_speed_factor, 0.0, 1.0)?;
        positive("enemy.height", e.height)?;
        positive("enemy.radius", e.radius)?;
        within(
            "enemy.headshot_height_fraction",
            e.headshot_height_fraction,
            0.0,
            1.0,
        )?;

        let d = &self.death;
        positive("death.total_duration_secs", d.total_duration_secs)?;
        // Fade must start after death or its stage event is never crossed.
        positive("death.fade_start_secs", d.fade_start_secs)?;
        for (stage, end) in [
            ("fall_duration_secs", d.fall_duration_secs),
            ("desaturate_duration_secs", d.desaturate_duration_secs),
            ("fade_start_secs", d.fade_start_secs),
        ] {
            non_negative(stage, end)?;
            if end > d.total_duration_secs {
                return Err(ConfigError::DeathTimeline {
                    stage,
                    total: d.total_duration_secs,
                });
            }
        }

        let wp = &self.weapon;
        non_negative("weapon.fire_rate_secs", wp.fire_rate_secs)?;
        non_negative("weapon.base_damage", wp.base_damage)?;
        positive("weapon.range", wp.range)?;
        within("weapon.accuracy", wp.accuracy, 0.0, 1.0)?;
        non_negative("weapon.spread_scale", wp.spread_scale)?;
        positive("weapon.bonus_interval", wp.bonus_interval as f32)?;
        within("weapon.bonus_threshold", wp.bonus_threshold, 0.0, 1.0)?;

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    within(field, value, 0.0, f32::MAX)
}

fn within(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
