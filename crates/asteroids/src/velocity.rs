//! Heading-to-velocity conversion

use arcade_engine::foundation::math::Vec2;

/// Velocity for a heading `angle` (radians) at `max_speed`.
///
/// The heading is measured from the +y axis: `x = sin(angle) * max_speed`,
/// `y = cos(angle) * max_speed`.
pub fn calculate_velocity(angle: f32, max_speed: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(sin * max_speed, cos * max_speed)
}
