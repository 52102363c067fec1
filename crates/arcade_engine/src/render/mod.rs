//! 2D drawing surfaces
//!
//! [`Surface2D`] is the canvas-style contract games draw against: a
//! save/restore transform stack, translation, path building with arcs,
//! and stroking. Hosts provide the real surface; this module ships a
//! [`RecordingSurface`] for tests and an [`SvgSurface`] for headless output.

mod recording;
mod svg;

pub use recording::{DrawCommand, RecordingSurface};
pub use svg::SvgSurface;

use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// Rendering errors
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// `restore` called with no matching `save`
    #[error("restore called without a matching save")]
    UnbalancedRestore,

    /// Geometry the surface cannot draw (negative radius, NaN, ...)
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Surface backend failure
    #[error("Surface error: {0}")]
    Backend(String),

    /// IO error while writing surface output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Dimensions of a drawing surface or game world, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldSize {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl WorldSize {
    /// Create a new world size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both dimensions are finite and strictly positive
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Whether a point lies inside `[0, width) x [0, height)`
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..self.width).contains(&x) && (0.0..self.height).contains(&y)
    }
}

impl Default for WorldSize {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// RGBA color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Opaque black
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Create an opaque color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color with alpha
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS `rgb(...)` notation, ignoring alpha
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_css_rgb(&self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("rgb({},{},{})", channel(self.r), channel(self.g), channel(self.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Canvas-style 2D drawing surface
///
/// Coordinates are in pixels with the origin at the top-left. `arc`
/// angles are in radians.
pub trait Surface2D {
    /// Current pixel dimensions of the surface
    fn size(&self) -> WorldSize;

    /// Push the current transform and style state
    fn save(&mut self);

    /// Pop the most recently saved state
    fn restore(&mut self) -> Result<(), RenderError>;

    /// Offset the current transform
    fn translate(&mut self, dx: f32, dy: f32);

    /// Start a new path, discarding any unstroked one
    fn begin_path(&mut self);

    /// Close the current sub-path
    fn close_path(&mut self);

    /// Add an arc centered at `(cx, cy)` to the current path
    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32) -> Result<(), RenderError>;

    /// Set the stroke color used by subsequent `stroke` calls
    fn set_stroke_color(&mut self, color: Color);

    /// Stroke the current path
    fn stroke(&mut self) -> Result<(), RenderError>;
}

/// Scoped save/restore over a surface
///
/// `save` runs on creation and `restore` on drop, so transform changes made
/// through the guard never outlive it, even on early return through `?`.
/// Use [`SurfaceGuard::finish`] to observe a failing restore.
pub struct SurfaceGuard<'a, S: Surface2D + ?Sized> {
    surface: &'a mut S,
    restored: bool,
}

impl<'a, S: Surface2D + ?Sized> SurfaceGuard<'a, S> {
    /// Save the surface state and return a guard over it
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface, restored: false }
    }

    /// Restore now and report the outcome
    pub fn finish(mut self) -> Result<(), RenderError> {
        self.restored = true;
        self.surface.restore()
    }
}

impl<S: Surface2D + ?Sized> Deref for SurfaceGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &Self::Target {
        self.surface
    }
}

impl<S: Surface2D + ?Sized> DerefMut for SurfaceGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.surface
    }
}

impl<S: Surface2D + ?Sized> Drop for SurfaceGuard<'_, S> {
    fn drop(&mut self) {
        if !self.restored {
            if let Err(e) = self.surface.restore() {
                log::error!("Failed to restore surface state: {e}");
            }
        }
    }
}

/// Shared argument check for `arc` implementations
pub(crate) fn validate_arc(cx: f32, cy: f32, radius: f32, start: f32, end: f32) -> Result<(), RenderError> {
    if ![cx, cy, radius, start, end].iter().all(|v| v.is_finite()) {
        return Err(RenderError::InvalidGeometry(format!(
            "non-finite arc ({cx}, {cy}, r={radius}, {start}..{end})"
        )));
    }
    if radius < 0.0 {
        return Err(RenderError::InvalidGeometry(format!("negative arc radius {radius}")));
    }
    Ok(())
}
