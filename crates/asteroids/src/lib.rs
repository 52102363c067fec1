//! # Asteroids
//!
//! Drifting asteroid obstacles for a 2D arcade game.
//!
//! Each [`Asteroid`] belongs to one of three [`AsteroidSize`] classes that
//! fix its radius, speed and angular drift. Asteroids move along a straight
//! line picked at spawn time and wrap around the edges of the world. The
//! host game loop calls [`Asteroid::update`] and then [`Asteroid::render`]
//! once per frame, or drives a whole [`AsteroidField`] at once.
//!
//! ```rust
//! use arcade_engine::prelude::*;
//! use asteroids::{Asteroid, AsteroidSize};
//!
//! let world = WorldSize::new(800.0, 600.0);
//! let mut asteroid = Asteroid::with_angle(AsteroidSize::Large, Point2::new(0.0, 0.0), world, 0.0)?;
//! asteroid.update(1.0 / 60.0);
//! assert_eq!(asteroid.position(), Point2::new(0.0, 598.5));
//!
//! let mut surface = RecordingSurface::new(world);
//! asteroid.render(1.0 / 60.0, &mut surface)?;
//! assert_eq!(surface.depth(), 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod asteroid;
pub mod components;
pub mod config;
pub mod error;
pub mod field;
pub mod velocity;

pub use asteroid::{Asteroid, ASTEROID_COLOR};
pub use components::{AsteroidSize, MotionMode, SizeProfile, SizeWeights};
pub use config::GameConfig;
pub use error::AsteroidError;
pub use field::{AsteroidField, AsteroidId};
pub use velocity::calculate_velocity;
