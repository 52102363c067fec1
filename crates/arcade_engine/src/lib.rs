//! # Arcade Engine
//!
//! Shared plumbing for small 2D arcade games.
//!
//! ## Features
//!
//! - **Math**: nalgebra-backed 2D aliases
//! - **Timing**: frame timer and stopwatch
//! - **Configuration**: TOML/RON file-backed settings
//! - **Drawing surfaces**: a canvas-style `Surface2D` trait with scoped
//!   save/restore, plus recording and SVG implementations
//!
//! ## Quick Start
//!
//! ```rust
//! use arcade_engine::prelude::*;
//!
//! let mut surface = RecordingSurface::new(WorldSize::new(800.0, 600.0));
//! {
//!     let mut scoped = SurfaceGuard::new(&mut surface);
//!     scoped.translate(10.0, 20.0);
//!     scoped.begin_path();
//!     scoped.arc(0.0, 0.0, 5.0, 0.0, std::f32::consts::TAU).unwrap();
//!     scoped.stroke().unwrap();
//! }
//! assert_eq!(surface.depth(), 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod render;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::{
            math::{Point2, Vec2},
            time::FrameClock,
        },
        render::{
            Color, DrawCommand, RecordingSurface, RenderError, Surface2D, SurfaceGuard,
            SvgSurface, WorldSize,
        },
    };
}
