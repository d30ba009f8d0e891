//! Error types.
//!
//! The simulation itself never fails; configuration loading is the only
//! fallible surface.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("`{field}` must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("`{field}` must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("attack range {attack_range} exceeds detection range {detection_range}")]
    RangeOrder {
        attack_range: f32,
        detection_range: f32,
    },

    #[error("death timeline stage `{stage}` ends after the total duration {total}")]
    DeathTimeline { stage: &'static str, total: f32 },
}
