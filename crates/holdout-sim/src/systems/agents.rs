//! Agent system: runs the enemy FSM for every living agent, keeps the
//! resulting steps out of static geometry and resolves attacks on the player.

use glam::Vec3;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use holdout_core::collaborators::{Environment, Player};
use holdout_core::events::UiEvent;

use holdout_enemy_ai::fsm::{self, AgentContext};
use holdout_enemy_ai::profiles::EnemyProfile;

use crate::director::WaveDirector;

pub fn run<P: Player, E: Environment>(
    director: &mut WaveDirector,
    player: &mut P,
    environment: &E,
    dt: f32,
    rng: &mut ChaCha8Rng,
) {
    let now = director.now();

    for handle in director.agents().handles() {
        let update = {
            let Some(agent) = director.agents_mut().get_mut(handle) else {
                continue;
            };
            if agent.is_dying() {
                continue;
            }

            let ctx = AgentContext {
                state: agent.state,
                position: agent.position,
                facing: agent.facing,
                target: player.position(),
                target_alive: player.is_alive(),
                now,
                dt,
                attack_ready_at: agent.attack_ready_at,
                evasion: agent.evasion,
            };
            let mut update = fsm::evaluate(&ctx, &agent.profile, rng);
            update.position =
                resolve_step(environment, &agent.profile, agent.position, update.position);
            agent.apply(&update);
            update
        };

        if update.state_changed {
            debug!(%handle, state = ?update.new_state, "enemy state changed");
        }

        if let Some(damage) = update.attack {
            player.take_damage(damage);
            let (current, max) = player.health();
            director
                .events_mut()
                .ui(UiEvent::HealthChanged { current, max });
            debug!(%handle, damage, health = current, "player hit");

            if !player.is_alive() {
                director.on_player_died();
                break;
            }
        }
    }
}

/// Where an agent at `from` ends up when it wants to reach `to`.
///
/// A blocked step slides along whichever ground axis is still free; if
/// neither is, the agent stays put. Casts at half the agent's height.
pub fn resolve_step<E: Environment>(
    environment: &E,
    profile: &EnemyProfile,
    from: Vec3,
    to: Vec3,
) -> Vec3 {
    if from == to {
        return to;
    }

    let lift = Vec3::Y * (profile.height * 0.5);
    let clear = |target: Vec3| !environment.blocks_movement(from + lift, target + lift, profile.radius);

    [to, Vec3::new(to.x, to.y, from.z), Vec3::new(from.x, to.y, to.z)]
        .into_iter()
        .find(|&candidate| clear(candidate))
        .unwrap_or(from)
}
