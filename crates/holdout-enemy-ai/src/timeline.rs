//! Cosmetic death timeline.
//!
//! Purely time-driven: given seconds since death it yields interpolation
//! values and the stage boundaries crossed. Nothing here can change an
//! agent's behavior state.

use holdout_core::config::DeathConfig;
use holdout_core::enums::DeathStage;
use holdout_core::state::DeathVisual;

/// Stages that begin the instant an agent dies.
pub const ENTRY_STAGES: [DeathStage; 2] = [DeathStage::Fall, DeathStage::Desaturate];

/// Interpolation values `elapsed` seconds after death.
pub fn death_visual(elapsed: f32, config: &DeathConfig) -> DeathVisual {
    let topple = progress(elapsed, config.fall_duration_secs);
    let desaturation = progress(elapsed, config.desaturate_duration_secs);
    let opacity = if elapsed < config.fade_start_secs {
        1.0
    } else {
        let fade_len = config.total_duration_secs - config.fade_start_secs;
        1.0 - progress(elapsed - config.fade_start_secs, fade_len)
    };

    DeathVisual {
        topple,
        desaturation,
        opacity,
    }
}

/// Stages whose start lies in `(before, after]`.
pub fn stages_crossed(before: f32, after: f32, config: &DeathConfig) -> Vec<DeathStage> {
    let mut stages = Vec::new();
    if before < config.fade_start_secs && after >= config.fade_start_secs {
        stages.push(DeathStage::Fade);
    }
    if before < config.total_duration_secs && after >= config.total_duration_secs {
        stages.push(DeathStage::Removed);
    }
    stages
}

/// Whether the sequence has run to completion.
pub fn is_complete(elapsed: f32, config: &DeathConfig) -> bool {
    elapsed >= config.total_duration_secs
}

fn progress(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        1.0
    } else {
        (elapsed / duration).clamp(0.0, 1.0)
    }
}
