//! Surface that records draw calls instead of rasterizing them

use super::{validate_arc, Color, RenderError, Surface2D, WorldSize};
use crate::foundation::math::Vec2;

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// `save`
    Save,
    /// `restore`
    Restore,
    /// `translate`
    Translate {
        /// X offset
        dx: f32,
        /// Y offset
        dy: f32,
    },
    /// `begin_path`
    BeginPath,
    /// `close_path`
    ClosePath,
    /// `arc`
    Arc {
        /// Center x in local coordinates
        cx: f32,
        /// Center y in local coordinates
        cy: f32,
        /// Radius
        radius: f32,
        /// Start angle in radians
        start_angle: f32,
        /// End angle in radians
        end_angle: f32,
    },
    /// `set_stroke_color`
    SetStrokeColor(Color),
    /// `stroke`, with the translation in effect when it ran
    Stroke {
        /// Color used
        color: Color,
        /// Absolute translation at stroke time
        origin: Vec2,
    },
}

#[derive(Debug, Clone, Copy)]
struct SavedState {
    translation: Vec2,
    stroke_color: Color,
}

/// Records every call and tracks the transform stack
///
/// Used to check draw order and save/restore pairing without a real
/// rendering backend.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: WorldSize,
    commands: Vec<DrawCommand>,
    stack: Vec<SavedState>,
    translation: Vec2,
    stroke_color: Color,
    fail_on_stroke: bool,
}

impl RecordingSurface {
    /// Create an empty recording surface
    pub fn new(size: WorldSize) -> Self {
        Self {
            size,
            commands: Vec::new(),
            stack: Vec::new(),
            translation: Vec2::zeros(),
            stroke_color: Color::BLACK,
            fail_on_stroke: false,
        }
    }

    /// Make every `stroke` call fail with a backend error
    #[must_use]
    pub fn failing_on_stroke(mut self) -> Self {
        self.fail_on_stroke = true;
        self
    }

    /// Change the reported surface size, as a window resize would
    pub fn resize(&mut self, size: WorldSize) {
        self.size = size;
    }

    /// Recorded calls in order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of saves not yet restored
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Translation currently in effect
    pub const fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Current stroke color
    pub const fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    /// Number of successful `stroke` calls
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke { .. }))
            .count()
    }

    /// Forget recorded calls, keeping transform state
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface2D for RecordingSurface {
    fn size(&self) -> WorldSize {
        self.size
    }

    fn save(&mut self) {
        self.stack.push(SavedState {
            translation: self.translation,
            stroke_color: self.stroke_color,
        });
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) -> Result<(), RenderError> {
        let state = self.stack.pop().ok_or(RenderError::UnbalancedRestore)?;
        self.translation = state.translation;
        self.stroke_color = state.stroke_color;
        self.commands.push(DrawCommand::Restore);
        Ok(())
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.translation += Vec2::new(dx, dy);
        self.commands.push(DrawCommand::Translate { dx, dy });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32) -> Result<(), RenderError> {
        validate_arc(cx, cy, radius, start_angle, end_angle)?;
        self.commands.push(DrawCommand::Arc {
            cx,
            cy,
            radius,
            start_angle,
            end_angle,
        });
        Ok(())
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn stroke(&mut self) -> Result<(), RenderError> {
        if self.fail_on_stroke {
            return Err(RenderError::Backend("stroke rejected by surface".to_string()));
        }
        self.commands.push(DrawCommand::Stroke {
            color: self.stroke_color,
            origin: self.translation,
        });
        Ok(())
    }
}
