//! Simulation constants and tuning defaults.
//!
//! Every gameplay value here is the default for a field of
//! [`CombatConfig`](crate::config::CombatConfig) and can be overridden.

/// Fixed tick rate used by drivers that step the simulation at a constant rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at `TICK_RATE`.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Waves ---

/// Enemies in wave 1.
pub const WAVE_BASE_ENEMY_COUNT: f32 = 5.0;

/// Additional enemies per wave after the first.
pub const WAVE_ENEMIES_PER_WAVE: f32 = 2.0;

/// Difficulty factor base: factor = base^(wave - 1).
pub const WAVE_DIFFICULTY_SCALING: f32 = 1.15;

/// Quiet time after a wave is cleared before the next one starts (seconds).
pub const WAVE_COOLDOWN_SECS: f32 = 5.0;

/// Stagger between individual enemy spawns within a wave (seconds).
pub const WAVE_SPAWN_INTERVAL_SECS: f32 = 0.5;

/// Bonus awarded when a wave after the first begins.
pub const WAVE_COMPLETION_BONUS: u32 = 500;

/// Number of pool entries created up front.
pub const ENEMY_POOL_CAPACITY: usize = 16;

// --- Scoring ---

/// Score for any kill.
pub const KILL_SCORE: u32 = 100;

/// Extra score when the killing shot was a headshot.
pub const HEADSHOT_BONUS: u32 = 50;

// --- Enemy ---

pub const ENEMY_MAX_HEALTH: f32 = 100.0;

/// Ground speed (m/s) before difficulty scaling.
pub const ENEMY_SPEED: f32 = 3.5;

/// Hard cap on scaled ground speed (m/s).
pub const ENEMY_MAX_SPEED: f32 = 7.0;

pub const ENEMY_ATTACK_DAMAGE: f32 = 10.0;

/// Attack range (m). A target at exactly this distance is attacked.
pub const ENEMY_ATTACK_RANGE: f32 = 2.5;

/// Detection range (m).
pub const ENEMY_DETECTION_RANGE: f32 = 50.0;

/// Seconds between attacks.
pub const ENEMY_ATTACK_COOLDOWN_SECS: f32 = 1.5;

/// Turn rate (rad/s).
pub const ENEMY_ROTATION_SPEED: f32 = 5.0;

/// Evasion probability per second while chasing inside the trigger distance.
pub const ENEMY_EVADE_CHANCE: f32 = 0.3;

pub const ENEMY_EVADE_DURATION_SECS: f32 = 1.0;

/// Strafe speed while evading, as a fraction of ground speed.
pub const ENEMY_EVADE_SPEED_FACTOR: f32 = 0.6;

/// Evasion is only considered closer than this (m).
pub const ENEMY_EVASION_TRIGGER_DISTANCE: f32 = 15.0;

/// Collider height (m).
pub const ENEMY_HEIGHT: f32 = 2.0;

/// Collider horizontal half-extent (m).
pub const ENEMY_RADIUS: f32 = 0.4;

/// Hits above this fraction of the collider height are headshots.
pub const HEADSHOT_HEIGHT_FRACTION: f32 = 0.7;

// --- Death timeline (seconds since death) ---

pub const DEATH_FALL_DURATION_SECS: f32 = 0.8;
pub const DEATH_DESATURATE_DURATION_SECS: f32 = 0.5;
pub const DEATH_FADE_START_SECS: f32 = 2.0;
pub const DEATH_TOTAL_DURATION_SECS: f32 = 3.0;

// --- Weapon ---

/// Minimum seconds between shots.
pub const WEAPON_FIRE_RATE_SECS: f32 = 0.1;

pub const WEAPON_BASE_DAMAGE: f32 = 25.0;

/// Maximum hit distance (m).
pub const WEAPON_RANGE: f32 = 100.0;

/// 1.0 fires exactly along the aim ray.
pub const WEAPON_ACCURACY: f32 = 0.95;

/// Spread offset (unit-sphere radius) at accuracy 0.
pub const WEAPON_SPREAD_SCALE: f32 = 0.1;

/// Headshots multiply damage by this.
pub const HEADSHOT_DAMAGE_MULTIPLIER: f32 = 2.0;

// --- Accuracy bonus ---

/// Bonus is only considered once more than this many shots were fired.
pub const ACCURACY_BONUS_MIN_SHOTS: u32 = 20;

/// Bonus is checked on every Nth shot.
pub const ACCURACY_BONUS_INTERVAL: u32 = 50;

/// Cumulative hit ratio that must be exceeded.
pub const ACCURACY_BONUS_THRESHOLD: f32 = 0.8;

pub const ACCURACY_BONUS_POINTS: u32 = 250;

// --- Player ---

pub const PLAYER_MAX_HEALTH: f32 = 100.0;

/// Eye height above the player's feet (m).
pub const PLAYER_EYE_HEIGHT: f32 = 1.7;

// --- Arena ---

/// Spawn anchors closer than this to the player are never used (m).
pub const ARENA_MIN_SPAWN_DISTANCE: f32 = 20.0;
