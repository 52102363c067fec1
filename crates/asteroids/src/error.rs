//! Error types for asteroid spawning and drawing

use arcade_engine::config::ConfigError;
use arcade_engine::render::RenderError;

/// Errors raised by asteroids and the asteroid field
#[derive(thiserror::Error, Debug)]
pub enum AsteroidError {
    /// World dimensions that wraparound cannot work with
    #[error("Invalid world size {width}x{height}: dimensions must be finite and positive")]
    InvalidWorldSize {
        /// Rejected width
        width: f32,
        /// Rejected height
        height: f32,
    },

    /// Spawn weights that never select a size
    #[error("Invalid size weights: at least one size needs a positive weight")]
    InvalidSizeWeights,

    /// Drawing surface failure
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    /// Configuration failure
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
