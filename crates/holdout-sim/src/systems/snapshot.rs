//! Snapshot system: builds a complete `MatchSnapshot` from the director,
//! the combat resolver and the player.
//!
//! Read-only apart from the events, which are handed over by the caller.

use holdout_core::collaborators::Player;
use holdout_core::events::EventQueue;
use holdout_core::state::{AgentView, MatchSnapshot, PlayerView};

use crate::combat::CombatResolver;
use crate::director::WaveDirector;

pub fn build_snapshot<P: Player>(
    director: &WaveDirector,
    combat: &CombatResolver,
    player: &P,
    events: EventQueue,
) -> MatchSnapshot {
    let ctx = director.context();

    MatchSnapshot {
        time: ctx.time,
        state: ctx.state,
        wave_number: ctx.wave_number,
        score: ctx.score,
        enemies_remaining: ctx.enemies_remaining,
        pending_spawns: director.pending_spawns(),
        player: build_player(player),
        agents: build_agents(director),
        accuracy: combat.accuracy(),
        ui_events: events.ui,
        feedback_events: events.feedback,
    }
}

fn build_player<P: Player>(player: &P) -> PlayerView {
    let (health, max_health) = player.health();
    PlayerView {
        position: player.position(),
        health,
        max_health,
        alive: player.is_alive(),
    }
}

fn build_agents(director: &WaveDirector) -> Vec<AgentView> {
    let death = director.death_config();
    director
        .agents()
        .iter()
        .map(|(handle, agent)| agent.view(handle, death))
        .collect()
}
