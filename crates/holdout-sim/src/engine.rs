//! Simulation engine: the single driver of a match.
//!
//! `SimulationEngine` owns the wave director, the combat resolver, the
//! collaborators and the seeded RNG. It processes queued player commands at
//! tick boundaries, runs the systems in a fixed order and produces
//! `MatchSnapshot`s. Completely headless, so the same seed always replays
//! the same match.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use holdout_core::collaborators::{Environment, Player};
use holdout_core::commands::PlayerCommand;
use holdout_core::config::CombatConfig;
use holdout_core::constants::DT;
use holdout_core::enums::MatchState;
use holdout_core::events::UiEvent;
use holdout_core::state::MatchSnapshot;

use crate::combat::{CombatResolver, ShotRecord};
use crate::director::WaveDirector;
use crate::systems;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub combat: CombatConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            combat: CombatConfig::default(),
        }
    }
}

pub struct SimulationEngine<P, E> {
    director: WaveDirector,
    combat: CombatResolver,
    player: P,
    environment: E,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    last_shot: Option<ShotRecord>,
}

impl<P: Player, E: Environment> SimulationEngine<P, E> {
    pub fn new(config: SimConfig, player: P, environment: E) -> Self {
        Self {
            director: WaveDirector::new(&config.combat),
            combat: CombatResolver::new(&config.combat.weapon),
            player,
            environment,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            last_shot: None,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one fixed tick.
    pub fn tick(&mut self) -> MatchSnapshot {
        self.step(DT)
    }

    /// Advance by `dt` seconds and return the resulting snapshot.
    pub fn step(&mut self, dt: f32) -> MatchSnapshot {
        self.process_commands();

        if self.director.state() == MatchState::Playing {
            self.run_systems(dt);
        }

        let events = self.director.drain_events();
        systems::snapshot::build_snapshot(&self.director, &self.combat, &self.player, events)
    }

    pub fn state(&self) -> MatchState {
        self.director.state()
    }

    pub fn director(&self) -> &WaveDirector {
        &self.director
    }

    pub fn combat(&self) -> &CombatResolver {
        &self.combat
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    /// Mutable access for the input layer (movement, aim).
    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    pub fn environment(&self) -> &E {
        &self.environment
    }

    /// Result of the most recent accepted `Fire`, if any.
    pub fn last_shot(&self) -> Option<&ShotRecord> {
        self.last_shot.as_ref()
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartMatch => self.director.start_match(),
            PlayerCommand::Fire => {
                if self.director.state() != MatchState::Playing || !self.player.is_alive() {
                    return;
                }
                let shot = self.combat.try_fire(
                    self.director.now(),
                    self.player.aim_ray(),
                    &self.environment,
                    &mut self.director,
                    &mut self.rng,
                );
                match shot {
                    Some(record) => self.last_shot = Some(record),
                    None => debug!(now = self.director.now(), "fire rejected, weapon cycling"),
                }
            }
            PlayerCommand::TogglePause => self.director.toggle_pause(),
            PlayerCommand::Restart => {
                self.player.respawn();
                self.combat.reset();
                self.last_shot = None;
                self.director.restart();
                let (current, max) = self.player.health();
                self.director
                    .events_mut()
                    .ui(UiEvent::HealthChanged { current, max });
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Match clock, wave cooldown, staggered spawns
        self.director.tick(
            dt,
            &self.environment,
            self.player.position(),
            &mut self.rng,
        );
        // 2. Enemy FSM, blocked steps and attacks
        systems::agents::run(
            &mut self.director,
            &mut self.player,
            &self.environment,
            dt,
            &mut self.rng,
        );
        // 3. Death sequences and corpse release
        systems::cleanup::run(&mut self.director, dt);
    }
}
