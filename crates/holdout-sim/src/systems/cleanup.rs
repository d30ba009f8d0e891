//! Cleanup system: advances death sequences and returns finished corpses
//! to the pool.

use holdout_core::events::FeedbackEvent;

use crate::director::WaveDirector;

pub fn run(director: &mut WaveDirector, dt: f32) {
    let death = director.death_config().clone();

    for handle in director.agents().handles() {
        let Some(agent) = director.agents_mut().get_mut(handle) else {
            continue;
        };
        let stages = agent.advance_death(dt, &death);
        let finished = agent.death_finished(&death);

        for stage in stages {
            director
                .events_mut()
                .feedback(FeedbackEvent::DeathStage { agent: handle, stage });
        }

        if finished {
            director.agents_mut().release(handle);
        }
    }
}
