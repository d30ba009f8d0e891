//! Per-wave population and difficulty, derived from the wave number.

use holdout_core::config::WaveConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSpec {
    pub wave_number: u32,
    pub enemy_count: u32,
    /// Multiplier applied once to each spawned agent's stats.
    pub difficulty_factor: f32,
}

impl WaveSpec {
    /// `enemy_count = round(base + (wave - 1) * per_wave)`,
    /// `difficulty_factor = scaling^(wave - 1)`. Wave 0 is treated as wave 1.
    pub fn for_wave(wave_number: u32, config: &WaveConfig) -> Self {
        let steps = wave_number.max(1) - 1;
        let count = config.base_enemy_count + steps as f32 * config.enemies_per_wave;
        Self {
            wave_number,
            enemy_count: count.round().max(0.0) as u32,
            difficulty_factor: config.difficulty_scaling.powi(steps as i32),
        }
    }
}
