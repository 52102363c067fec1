//! Math utilities and types
//!
//! Provides the 2D math types used by arcade games.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Common mathematical constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Tau constant (2 * Pi), one full turn
    pub const TAU: f32 = 2.0 * PI;
}

/// Math utility functions
pub mod utils {
    /// Wrap a coordinate into `[0, extent)` with a single correction step.
    ///
    /// Values below zero get `extent` added, values at or above `extent`
    /// get it subtracted. This is not a modulo: a value more than one
    /// extent outside the range stays outside. A negative value so small
    /// that adding `extent` rounds up to `extent` lands on zero.
    pub fn wrap_once(value: f32, extent: f32) -> f32 {
        let wrapped = if value < 0.0 {
            value + extent
        } else if value >= extent {
            value - extent
        } else {
            value
        };

        if wrapped >= extent && value < 0.0 {
            0.0
        } else {
            wrapped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::utils::wrap_once;

    #[test]
    fn test_wrap_inside_range_is_identity() {
        assert_eq!(wrap_once(12.5, 100.0), 12.5);
        assert_eq!(wrap_once(0.0, 100.0), 0.0);
    }

    #[test]
    fn test_wrap_below_zero() {
        assert_eq!(wrap_once(-1.5, 600.0), 598.5);
    }

    #[test]
    fn test_wrap_at_or_above_extent() {
        assert_eq!(wrap_once(800.0, 800.0), 0.0);
        assert_eq!(wrap_once(801.0, 800.0), 1.0);
    }

    #[test]
    fn test_wrap_is_single_step() {
        // Two extents out only gets one correction
        assert_eq!(wrap_once(-150.0, 100.0), -50.0);
        assert_eq!(wrap_once(250.0, 100.0), 150.0);
    }

    #[test]
    fn test_wrap_tiny_negative_stays_in_range() {
        let wrapped = wrap_once(-1.0e-9, 600.0);
        assert!((0.0..600.0).contains(&wrapped));
    }
}
