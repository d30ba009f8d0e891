//! arena-soak: run a scripted HOLDOUT match headlessly and print a summary.
//!
//! The player stands in the middle of an open arena and shoots at the
//! nearest living enemy every tick until it dies or time runs out.
//!
//! Usage:
//!   arena-soak [--config combat.json] [--seconds 300] [--seed 42] [--spawns 12]
//!
//! Set `RUST_LOG=holdout_sim=debug` for per-enemy logging.

use std::path::PathBuf;
use std::process;

use glam::Vec3;
use tracing::info;
use tracing_subscriber::EnvFilter;

use holdout_core::collaborators::Player;
use holdout_core::commands::PlayerCommand;
use holdout_core::config::CombatConfig;
use holdout_core::constants::{DT, TICK_RATE};
use holdout_core::enums::MatchState;
use holdout_core::events::UiEvent;
use holdout_sim::arena::{Arena, ArenaPlayer};
use holdout_sim::{SimConfig, SimulationEngine};

const ARENA_RADIUS: f32 = 40.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| matches!(a.as_str(), "help" | "--help" | "-h")) {
        print_usage();
        return;
    }

    let combat = match parse_flag(&args, "--config").map(PathBuf::from) {
        Some(path) => match CombatConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        None => CombatConfig::default(),
    };

    let seconds: f32 = parse_number(&args, "--seconds", 300.0);
    let seed: u64 = parse_number(&args, "--seed", 42);
    let spawns: usize = parse_number(&args, "--spawns", 12);

    run(SimConfig { seed, combat }, seconds, spawns);
}

fn print_usage() {
    eprintln!(
        "arena-soak: headless HOLDOUT match runner\n\
         \n\
           --config <path>  Combat config JSON (optional, default: built-in tuning)\n\
           --seconds <N>    Match seconds to simulate (default: 300)\n\
           --seed <N>       RNG seed (default: 42)\n\
           --spawns <N>     Spawn points around the arena edge (default: 12)\n"
    );
}

fn parse_flag<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    match parse_flag(args, flag) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("Error: invalid value for {flag}: {raw}");
            process::exit(1);
        }),
        None => default,
    }
}

fn run(config: SimConfig, seconds: f32, spawns: usize) {
    let seed = config.seed;
    let mut engine = SimulationEngine::new(
        config,
        ArenaPlayer::new(Vec3::ZERO),
        Arena::open_field(ARENA_RADIUS, spawns),
    );
    engine.queue_command(PlayerCommand::StartMatch);

    let max_ticks = (seconds * TICK_RATE as f32) as u64;
    let mut highest_wave = 0;
    let mut snapshot = engine.tick();

    while snapshot.time.tick < max_ticks && snapshot.state == MatchState::Playing {
        let eye = engine.player().aim_ray().origin;
        let target = snapshot
            .agents
            .iter()
            .filter(|a| a.death.is_none())
            .min_by(|a, b| {
                a.position
                    .distance_squared(eye)
                    .total_cmp(&b.position.distance_squared(eye))
            })
            .map(|a| a.position + Vec3::Y);

        if let Some(target) = target {
            engine.player_mut().aim_at(target);
            engine.queue_command(PlayerCommand::Fire);
        }

        snapshot = engine.step(DT);

        for event in &snapshot.ui_events {
            match event {
                UiEvent::WaveChanged { wave } => highest_wave = highest_wave.max(*wave),
                UiEvent::GameOver { score, wave, time_secs } => {
                    info!(score, wave, time_secs, "player overrun");
                }
                _ => {}
            }
        }
    }

    let accuracy = snapshot.accuracy;
    println!("seed:          {seed}");
    println!("outcome:       {:?}", snapshot.state);
    println!("match time:    {:.1}s", snapshot.time.elapsed_secs);
    println!("highest wave:  {}", highest_wave.max(snapshot.wave_number));
    println!("score:         {}", snapshot.score);
    println!(
        "accuracy:      {}/{} ({:.1}%)",
        accuracy.shots_hit,
        accuracy.shots_fired,
        accuracy.ratio() * 100.0
    );
    println!(
        "player health: {:.0}/{:.0}",
        snapshot.player.health, snapshot.player.max_health
    );
    println!("pool size:     {}", engine.director().agents().total_count());
}
