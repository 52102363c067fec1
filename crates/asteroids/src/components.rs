//! Asteroid size classes and motion settings

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::AsteroidError;

/// Asteroid size categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AsteroidSize {
    /// Large and fast
    Large,

    /// Medium, the only size with positive drift
    Medium,

    /// Small and slow
    Small,
}

/// Fixed per-size parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeProfile {
    /// Outline radius in pixels
    pub radius: f32,

    /// Speed in pixels per frame, used once to derive velocity
    pub max_speed: f32,

    /// Heading change per frame in radians
    pub angular_drift: f32,
}

const LARGE: SizeProfile = SizeProfile {
    radius: 30.0,
    max_speed: 1.5,
    angular_drift: -0.08,
};

const MEDIUM: SizeProfile = SizeProfile {
    radius: 20.0,
    max_speed: 1.1,
    angular_drift: 0.02,
};

const SMALL: SizeProfile = SizeProfile {
    radius: 10.0,
    max_speed: 0.7,
    angular_drift: -0.009,
};

impl AsteroidSize {
    /// Every size, largest first
    pub const ALL: [Self; 3] = [Self::Large, Self::Medium, Self::Small];

    /// Get the fixed parameters for this size
    pub const fn profile(self) -> &'static SizeProfile {
        match self {
            Self::Large => &LARGE,
            Self::Medium => &MEDIUM,
            Self::Small => &SMALL,
        }
    }

    /// Outline radius in pixels
    pub const fn radius(self) -> f32 {
        self.profile().radius
    }

    /// Speed in pixels per frame
    pub const fn max_speed(self) -> f32 {
        self.profile().max_speed
    }

    /// Heading change per frame in radians
    pub const fn angular_drift(self) -> f32 {
        self.profile().angular_drift
    }
}

/// How elapsed time feeds into motion
///
/// `PerFrame` moves by exactly one velocity step and one drift step per
/// `update`, whatever the elapsed time. `TimeScaled` multiplies both by
/// `elapsed * reference_fps`, so at the reference rate it matches
/// `PerFrame`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MotionMode {
    /// Fixed step per update call
    #[default]
    PerFrame,

    /// Step scaled by elapsed seconds
    TimeScaled {
        /// Frame rate at which one update equals one fixed step
        reference_fps: f32,
    },
}

impl MotionMode {
    /// Upper bound on a single time-scaled step, in fixed steps.
    ///
    /// Keeps a long stall from moving an asteroid more than one world
    /// width in a single update, which single-step wrapping cannot undo.
    pub const MAX_STEP_SCALE: f32 = 4.0;

    /// Multiplier applied to velocity and drift for one update
    pub fn step_scale(self, elapsed: f32) -> f32 {
        match self {
            Self::PerFrame => 1.0,
            Self::TimeScaled { reference_fps } => {
                let scale = elapsed * reference_fps;
                if scale.is_finite() {
                    scale.clamp(0.0, Self::MAX_STEP_SCALE)
                } else {
                    0.0
                }
            }
        }
    }
}

/// Relative spawn weights per size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeWeights {
    /// Weight for large asteroids
    pub large: u32,

    /// Weight for medium asteroids
    pub medium: u32,

    /// Weight for small asteroids
    pub small: u32,
}

impl Default for SizeWeights {
    fn default() -> Self {
        Self {
            large: 1,
            medium: 1,
            small: 1,
        }
    }
}

impl SizeWeights {
    /// Weights that only ever pick `size`
    pub const fn only(size: AsteroidSize) -> Self {
        let mut weights = Self {
            large: 0,
            medium: 0,
            small: 0,
        };
        match size {
            AsteroidSize::Large => weights.large = 1,
            AsteroidSize::Medium => weights.medium = 1,
            AsteroidSize::Small => weights.small = 1,
        }
        weights
    }

    /// Sum of all weights
    pub const fn total(&self) -> u64 {
        self.large as u64 + self.medium as u64 + self.small as u64
    }

    /// Check that at least one size can be picked
    pub fn validate(&self) -> Result<(), AsteroidError> {
        if self.total() == 0 {
            Err(AsteroidError::InvalidSizeWeights)
        } else {
            Ok(())
        }
    }

    /// Pick a size with probability proportional to its weight
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<AsteroidSize, AsteroidError> {
        self.validate()?;
        let roll = rng.gen_range(0..self.total());
        let large = u64::from(self.large);
        let medium = large + u64::from(self.medium);
        let size = if roll < large {
            AsteroidSize::Large
        } else if roll < medium {
            AsteroidSize::Medium
        } else {
            AsteroidSize::Small
        };
        Ok(size)
    }
}
