//! Enemy behavior finite state machine.
//!
//! Pure functions that compute state transitions, steering and attack timing
//! for one agent from its current situation. No simulation state lives here;
//! the caller owns the agent and applies the returned update.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::Rng;

use holdout_core::enums::AgentState;
use holdout_core::types::{horizontal_distance, yaw_to_direction, yaw_towards};

use crate::profiles::EnemyProfile;

/// Timed lateral strafe interrupting direct pursuit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Evasion {
    pub active: bool,
    /// Seconds of strafing left.
    pub timer: f32,
    /// Unit ground-plane strafe direction.
    pub direction: Vec3,
}

/// Input to the FSM for a single agent.
pub struct AgentContext {
    pub state: AgentState,
    pub position: Vec3,
    /// Yaw in radians.
    pub facing: f32,
    /// Target position, `None` when the target cannot be resolved this tick.
    pub target: Option<Vec3>,
    pub target_alive: bool,
    /// Match time (seconds).
    pub now: f32,
    pub dt: f32,
    pub attack_ready_at: f32,
    pub evasion: Evasion,
}

/// Output from the FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentUpdate {
    pub new_state: AgentState,
    pub position: Vec3,
    pub facing: f32,
    pub evasion: Evasion,
    pub attack_ready_at: f32,
    /// Damage to apply to the target this tick.
    pub attack: Option<f32>,
    pub state_changed: bool,
}

/// State for a target at ground distance `distance`. Both bounds inclusive.
pub fn select_state(distance: f32, attack_range: f32, detection_range: f32) -> AgentState {
    if distance <= attack_range {
        AgentState::Attacking
    } else if distance <= detection_range {
        AgentState::Chasing
    } else {
        AgentState::Seeking
    }
}

/// Evaluate the FSM for one agent.
pub fn evaluate(ctx: &AgentContext, profile: &EnemyProfile, rng: &mut impl Rng) -> AgentUpdate {
    let no_change = AgentUpdate {
        new_state: ctx.state,
        position: ctx.position,
        facing: ctx.facing,
        evasion: ctx.evasion,
        attack_ready_at: ctx.attack_ready_at,
        attack: None,
        state_changed: false,
    };

    // Dying is terminal; its timeline is driven elsewhere.
    if ctx.state.is_terminal() {
        return no_change;
    }

    // Unresolvable target: idle and try again next tick.
    let Some(target) = ctx.target else {
        return no_change;
    };

    let distance = horizontal_distance(ctx.position, target);
    let new_state = select_state(distance, profile.attack_range, profile.detection_range);

    let mut update = match new_state {
        AgentState::Seeking | AgentState::Chasing => chase(ctx, profile, target, distance, rng),
        AgentState::Attacking => attack(ctx, profile, target),
        AgentState::Dying => no_change,
    };
    update.new_state = new_state;
    update.state_changed = new_state != ctx.state;
    update
}

fn chase(
    ctx: &AgentContext,
    profile: &EnemyProfile,
    target: Vec3,
    distance: f32,
    rng: &mut impl Rng,
) -> AgentUpdate {
    let mut evasion = ctx.evasion;

    if !evasion.active {
        let roll: f32 = rng.gen();
        if roll < profile.evade_chance * ctx.dt && distance < profile.evasion_trigger_distance {
            evasion = start_evasion(ctx.position, ctx.facing, target, profile, rng);
        }
    }

    let facing = rotate_towards(
        ctx.facing,
        yaw_towards(ctx.position, target),
        profile.rotation_speed * ctx.dt,
    );

    let step = if evasion.active {
        evasion.direction * profile.speed * profile.evade_speed_factor * ctx.dt
    } else {
        // Along the facing, not straight at the target: turning radius.
        yaw_to_direction(facing) * profile.speed * ctx.dt
    };

    AgentUpdate {
        new_state: ctx.state,
        position: ctx.position + step,
        facing,
        evasion: tick_evasion(evasion, ctx.dt),
        attack_ready_at: ctx.attack_ready_at,
        attack: None,
        state_changed: false,
    }
}

fn attack(ctx: &AgentContext, profile: &EnemyProfile, target: Vec3) -> AgentUpdate {
    let facing = rotate_towards(
        ctx.facing,
        yaw_towards(ctx.position, target),
        profile.rotation_speed * ctx.dt,
    );

    let mut attack_ready_at = ctx.attack_ready_at;
    let mut attack = None;
    if ctx.target_alive && ctx.now >= ctx.attack_ready_at {
        attack = Some(profile.attack_damage);
        attack_ready_at = ctx.now + profile.attack_cooldown_secs;
    }

    AgentUpdate {
        new_state: ctx.state,
        position: ctx.position,
        facing,
        evasion: tick_evasion(ctx.evasion, ctx.dt),
        attack_ready_at,
        attack,
        state_changed: false,
    }
}

fn start_evasion(
    position: Vec3,
    facing: f32,
    target: Vec3,
    profile: &EnemyProfile,
    rng: &mut impl Rng,
) -> Evasion {
    let mut to_target = target - position;
    to_target.y = 0.0;
    let forward = to_target
        .try_normalize()
        .unwrap_or_else(|| yaw_to_direction(facing));
    let side = Vec3::new(-forward.z, 0.0, forward.x);
    let direction = if rng.gen_bool(0.5) { side } else { -side };

    Evasion {
        active: true,
        timer: profile.evade_duration_secs,
        direction,
    }
}

/// Count an active evasion down; it ends purely on its timer.
fn tick_evasion(evasion: Evasion, dt: f32) -> Evasion {
    if !evasion.active {
        return evasion;
    }
    let timer = evasion.timer - dt;
    if timer <= 0.0 {
        Evasion::default()
    } else {
        Evasion { timer, ..evasion }
    }
}

/// Turn from `current` toward `target` (both yaw radians) by at most `max_step`.
pub fn rotate_towards(current: f32, target: f32, max_step: f32) -> f32 {
    let delta = wrap_angle(target - current);
    if delta.abs() <= max_step {
        wrap_angle(current + delta)
    } else {
        wrap_angle(current + max_step.copysign(delta))
    }
}

/// Wrap an angle into `(-PI, PI]`.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}
