//! Headless surface that renders strokes into an SVG document

use std::path::Path;

use super::{validate_arc, Color, RenderError, Surface2D, WorldSize};
use crate::foundation::math::{constants::TAU, Vec2};

#[derive(Debug, Clone, Copy)]
struct PendingArc {
    center: Vec2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
}

/// Accumulates stroked arcs as SVG elements
///
/// Only arcs are supported as path segments; that is all the arcade
/// entities draw. Call [`SvgSurface::clear`] between frames to keep only
/// the latest one.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    size: WorldSize,
    background: Color,
    translation: Vec2,
    stroke_color: Color,
    stack: Vec<(Vec2, Color)>,
    path: Vec<PendingArc>,
    elements: Vec<String>,
}

impl SvgSurface {
    /// Create an empty surface with a black background
    pub fn new(size: WorldSize) -> Self {
        Self {
            size,
            background: Color::BLACK,
            translation: Vec2::zeros(),
            stroke_color: Color::BLACK,
            stack: Vec::new(),
            path: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Use a different background fill
    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Number of stroked elements so far
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Drop all stroked elements
    pub fn clear(&mut self) {
        self.elements.clear();
        self.path.clear();
    }

    /// Render the accumulated elements as a standalone SVG document
    pub fn to_svg_string(&self) -> String {
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.size.width,
            h = self.size.height,
        );
        out.push('\n');
        out.push_str(&format!(
            "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
            self.background.to_css_rgb()
        ));
        for element in &self.elements {
            out.push_str("  ");
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }

    /// Write the SVG document to disk
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        std::fs::write(path.as_ref(), self.to_svg_string())?;
        log::debug!("Wrote {} SVG elements to {}", self.elements.len(), path.as_ref().display());
        Ok(())
    }

    fn arc_element(arc: &PendingArc, color: Color) -> String {
        let stroke = color.to_css_rgb();
        let sweep = arc.end_angle - arc.start_angle;
        if sweep.abs() >= TAU {
            return format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" stroke="{stroke}" stroke-opacity="{:.2}"/>"#,
                arc.center.x, arc.center.y, arc.radius, color.a
            );
        }

        let point = |angle: f32| arc.center + Vec2::new(angle.cos(), angle.sin()) * arc.radius;
        let from = point(arc.start_angle);
        let to = point(arc.end_angle);
        let large_arc = u8::from(sweep.abs() > TAU / 2.0);
        let clockwise = u8::from(sweep > 0.0);
        format!(
            r#"<path d="M {:.2} {:.2} A {r:.2} {r:.2} 0 {large_arc} {clockwise} {:.2} {:.2}" fill="none" stroke="{stroke}" stroke-opacity="{:.2}"/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            color.a,
            r = arc.radius,
        )
    }
}

impl Surface2D for SvgSurface {
    fn size(&self) -> WorldSize {
        self.size
    }

    fn save(&mut self) {
        self.stack.push((self.translation, self.stroke_color));
    }

    fn restore(&mut self) -> Result<(), RenderError> {
        let (translation, color) = self.stack.pop().ok_or(RenderError::UnbalancedRestore)?;
        self.translation = translation;
        self.stroke_color = color;
        Ok(())
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.translation += Vec2::new(dx, dy);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn close_path(&mut self) {}

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32) -> Result<(), RenderError> {
        validate_arc(cx, cy, radius, start_angle, end_angle)?;
        self.path.push(PendingArc {
            center: self.translation + Vec2::new(cx, cy),
            radius,
            start_angle,
            end_angle,
        });
        Ok(())
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn stroke(&mut self) -> Result<(), RenderError> {
        let color = self.stroke_color;
        self.elements
            .extend(self.path.iter().map(|arc| Self::arc_element(arc, color)));
        Ok(())
    }
}
