//! Game configuration
//!
//! Loaded from TOML or RON through [`arcade_engine::config::Config`].
//! Every section and field is optional in the file; missing values take
//! the defaults below.

use std::path::PathBuf;

use arcade_engine::config::{Config, ConfigError};
use arcade_engine::render::{Color, WorldSize};
use serde::{Deserialize, Serialize};

use crate::asteroid::ASTEROID_COLOR;
use crate::components::{MotionMode, SizeWeights};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Wraparound bounds, also the output surface size
    pub world: WorldSize,

    /// Spawning settings
    pub field: FieldConfig,

    /// How elapsed time affects motion
    pub motion: MotionMode,

    /// Drawing settings
    pub render: RenderConfig,

    /// Headless demo run settings
    pub run: RunConfig,
}

/// Spawning configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Asteroids spawned at startup
    pub asteroid_count: usize,

    /// RNG seed; a fresh one is drawn from the OS when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Relative odds of each size when spawning at random
    pub size_weights: SizeWeights,
}

/// Drawing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Asteroid outline color
    pub stroke_color: Color,

    /// Background fill for headless output
    pub background: Color,
}

/// Headless run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Frames to simulate
    pub frames: u64,

    /// Seconds per simulated frame
    pub timestep: f32,

    /// Where to write the last frame as SVG
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg_output: Option<PathBuf>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            asteroid_count: 5,
            seed: None,
            size_weights: SizeWeights::default(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            stroke_color: ASTEROID_COLOR,
            background: Color::BLACK,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            timestep: 1.0 / 60.0,
            svg_output: None,
        }
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Check values that parse fine but cannot be simulated
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.world.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "world size must be finite and positive, got {}x{}",
                self.world.width, self.world.height
            )));
        }
        if self.field.size_weights.total() == 0 {
            return Err(ConfigError::Invalid("field.size_weights are all zero".to_string()));
        }
        if let MotionMode::TimeScaled { reference_fps } = self.motion {
            if !(reference_fps.is_finite() && reference_fps > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "motion.reference_fps must be positive, got {reference_fps}"
                )));
            }
        }
        if !(self.run.timestep.is_finite() && self.run.timestep >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "run.timestep must be non-negative, got {}",
                self.run.timestep
            )));
        }
        Ok(())
    }
}
