//! Wave director: match state, wave progression and the score ledger.
//!
//! The director owns the enemy pool and the match context. Every enemy is
//! created through `spawn_one` and every kill is reported back through
//! `on_agent_died`, so `enemies_remaining` can only move in one place.

use glam::Vec3;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use holdout_core::collaborators::Environment;
use holdout_core::config::{CombatConfig, DeathConfig};
use holdout_core::enums::MatchState;
use holdout_core::events::{EventQueue, FeedbackEvent, UiEvent};
use holdout_core::pool::{EntityPool, Handle};
use holdout_core::types::{yaw_towards, SimTime};

use holdout_enemy_ai::profiles::scaled_profile;
use holdout_enemy_ai::timeline::ENTRY_STAGES;

use crate::agent::{DamageOutcome, EnemyAgent};
use crate::wave::WaveSpec;

/// Match-wide state. Owned by the director and lent to whoever needs it.
#[derive(Debug, Clone, Default)]
pub struct MatchContext {
    pub state: MatchState,
    /// 0 only before the first wave starts.
    pub wave_number: u32,
    pub score: u32,
    /// Match clock. Stops while paused.
    pub time: SimTime,
    /// Enemies of the current wave not yet dead (spawned or still pending).
    pub enemies_remaining: u32,
    pub events: EventQueue,
}

impl MatchContext {
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.events.ui(UiEvent::ScoreChanged { score: self.score });
    }
}

/// Staggered spawns still owed for the active wave.
///
/// Checked against the match clock every tick, so a paused match simply
/// leaves it untouched until play resumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnSequence {
    pub started_at: f32,
    /// Match time at which the next spawn is due.
    pub fire_at: f32,
    pub remaining: u32,
    pub wave: u32,
    pub difficulty_factor: f32,
}

pub struct WaveDirector {
    config: CombatConfig,
    ctx: MatchContext,
    /// Seconds spent with the wave cleared.
    wave_timer: f32,
    spawn_sequence: Option<SpawnSequence>,
    agents: EntityPool<EnemyAgent>,
}

impl WaveDirector {
    pub fn new(config: &CombatConfig) -> Self {
        Self {
            agents: EntityPool::with_capacity(config.waves.pool_capacity),
            config: config.clone(),
            ctx: MatchContext::default(),
            wave_timer: 0.0,
            spawn_sequence: None,
        }
    }

    /// Leave `Initializing` and begin wave 1. Ignored in any other state.
    pub fn start_match(&mut self) {
        if self.ctx.state != MatchState::Initializing {
            return;
        }
        self.ctx.state = MatchState::Playing;
        info!("match started");
        self.start_next_wave();
    }

    /// Advance the match clock, the wave cooldown and any due spawns.
    pub fn tick<E: Environment>(
        &mut self,
        dt: f32,
        environment: &E,
        player_position: Option<Vec3>,
        rng: &mut ChaCha8Rng,
    ) {
        if self.ctx.state != MatchState::Playing {
            return;
        }

        self.ctx.time.advance(dt);

        if self.ctx.enemies_remaining == 0 && self.spawn_sequence.is_none() {
            self.wave_timer += dt;
            if self.wave_timer >= self.config.waves.cooldown_secs {
                self.start_next_wave();
            }
        }

        self.run_spawn_sequence(environment, player_position, rng);
    }

    /// Begin the next wave. Rejected while the current wave still has
    /// enemies left.
    pub fn start_next_wave(&mut self) -> bool {
        if self.ctx.enemies_remaining > 0 {
            return false;
        }

        self.ctx.wave_number += 1;
        self.wave_timer = 0.0;

        let wave = self.ctx.wave_number;
        let wave_spec = WaveSpec::for_wave(wave, &self.config.waves);
        self.ctx.enemies_remaining = wave_spec.enemy_count;

        if wave > 1 {
            self.ctx.add_score(self.config.waves.completion_bonus);
        }

        self.ctx.events.ui(UiEvent::WaveChanged { wave });
        self.ctx.events.ui(UiEvent::WaveAnnounced {
            text: format!("Wave {wave}"),
        });

        let now = self.now();
        self.spawn_sequence = (wave_spec.enemy_count > 0).then_some(SpawnSequence {
            started_at: now,
            fire_at: now,
            remaining: wave_spec.enemy_count,
            wave,
            difficulty_factor: wave_spec.difficulty_factor,
        });

        info!(
            wave,
            enemies = wave_spec.enemy_count,
            difficulty = wave_spec.difficulty_factor,
            "wave started"
        );
        true
    }

    fn run_spawn_sequence<E: Environment>(
        &mut self,
        environment: &E,
        player_position: Option<Vec3>,
        rng: &mut ChaCha8Rng,
    ) {
        let now = self.now();
        let interval = self.config.waves.spawn_interval_secs;

        while let Some(mut sequence) = self.spawn_sequence.take() {
            if sequence.remaining == 0 {
                break;
            }
            if now < sequence.fire_at {
                self.spawn_sequence = Some(sequence);
                break;
            }

            self.spawn_one(&sequence, environment, player_position, rng);
            sequence.remaining -= 1;
            sequence.fire_at += interval;
            self.spawn_sequence = Some(sequence);
        }
    }

    fn spawn_one<E: Environment>(
        &mut self,
        sequence: &SpawnSequence,
        environment: &E,
        player_position: Option<Vec3>,
        rng: &mut ChaCha8Rng,
    ) {
        let Some(anchor) = environment.spawn_anchor(sequence.wave, player_position, rng) else {
            self.ctx.enemies_remaining = self.ctx.enemies_remaining.saturating_sub(1);
            warn!(
                wave = sequence.wave,
                remaining = self.ctx.enemies_remaining,
                "no spawn anchor available, skipping spawn slot"
            );
            return;
        };

        let facing = player_position
            .map(|target| yaw_towards(anchor, target))
            .unwrap_or_default();
        let profile = scaled_profile(&self.config.enemy, sequence.difficulty_factor);

        let handle = self.agents.acquire();
        if let Some(agent) = self.agents.get_mut(handle) {
            agent.spawn(anchor, facing, profile, sequence.wave);
        }
        debug!(%handle, x = anchor.x, z = anchor.z, "enemy spawned");
    }

    /// Kill notification. Called exactly once per agent, when it enters `Dying`.
    pub fn on_agent_died(&mut self, headshot: bool) {
        self.ctx.enemies_remaining = self.ctx.enemies_remaining.saturating_sub(1);

        let mut points = self.config.waves.kill_score;
        if headshot {
            points += self.config.waves.headshot_bonus;
        }
        self.ctx.add_score(points);

        if self.ctx.enemies_remaining == 0 {
            info!(wave = self.ctx.wave_number, score = self.ctx.score, "wave cleared");
        }
    }

    /// Damage an agent. A lethal hit reports the kill before the death
    /// sequence starts.
    pub fn damage_agent(&mut self, handle: Handle, amount: f32, headshot: bool) -> DamageOutcome {
        let outcome = match self.agents.get_mut(handle) {
            Some(agent) => agent.take_damage(amount),
            None => return DamageOutcome::Ignored,
        };

        if outcome == DamageOutcome::Ignored {
            return outcome;
        }

        self.ctx.events.feedback(FeedbackEvent::HitFlash {
            agent: handle,
            headshot,
        });

        if outcome == DamageOutcome::Killed {
            debug!(%handle, headshot, "enemy killed");
            self.on_agent_died(headshot);
            for stage in ENTRY_STAGES {
                self.ctx.events.feedback(FeedbackEvent::DeathStage {
                    agent: handle,
                    stage,
                });
            }
        }

        outcome
    }

    pub fn add_score(&mut self, points: u32) {
        self.ctx.add_score(points);
    }

    /// Playing and Paused swap; every other state ignores the request.
    pub fn toggle_pause(&mut self) {
        self.ctx.state = match self.ctx.state {
            MatchState::Playing => MatchState::Paused,
            MatchState::Paused => MatchState::Playing,
            _ => return,
        };
        info!(state = ?self.ctx.state, "pause toggled");
    }

    pub fn on_player_died(&mut self) {
        if self.ctx.state != MatchState::Playing {
            return;
        }
        self.ctx.state = MatchState::GameOver;
        self.ctx.events.ui(UiEvent::GameOver {
            score: self.ctx.score,
            wave: self.ctx.wave_number,
            time_secs: self.ctx.time.elapsed_secs,
        });
        info!(
            score = self.ctx.score,
            wave = self.ctx.wave_number,
            "game over"
        );
    }

    /// Reset everything to initial values and begin a fresh match.
    pub fn restart(&mut self) {
        let events = std::mem::take(&mut self.ctx.events);
        self.ctx = MatchContext {
            events,
            ..MatchContext::default()
        };
        self.wave_timer = 0.0;
        self.spawn_sequence = None;
        self.agents.release_all();

        self.ctx.events.ui(UiEvent::ScoreChanged { score: 0 });
        info!("match restarted");
        self.start_match();
    }

    /// Current match time in seconds.
    pub fn now(&self) -> f32 {
        self.ctx.time.elapsed_secs
    }

    pub fn state(&self) -> MatchState {
        self.ctx.state
    }

    pub fn context(&self) -> &MatchContext {
        &self.ctx
    }

    /// Spawns still owed by the active wave's sequence.
    pub fn pending_spawns(&self) -> u32 {
        self.spawn_sequence.map_or(0, |s| s.remaining)
    }

    pub fn spawn_sequence(&self) -> Option<&SpawnSequence> {
        self.spawn_sequence.as_ref()
    }

    pub fn wave_timer(&self) -> f32 {
        self.wave_timer
    }

    pub fn agents(&self) -> &EntityPool<EnemyAgent> {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut EntityPool<EnemyAgent> {
        &mut self.agents
    }

    pub fn events_mut(&mut self) -> &mut EventQueue {
        &mut self.ctx.events
    }

    /// Take the events queued since the last drain.
    pub fn drain_events(&mut self) -> EventQueue {
        self.ctx.events.drain()
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn death_config(&self) -> &DeathConfig {
        &self.config.death
    }
}
