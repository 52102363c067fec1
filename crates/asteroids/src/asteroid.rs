//! The asteroid entity
//!
//! An asteroid travels in a straight line chosen at spawn time and wraps
//! around the world edges. Its heading angle keeps drifting by a fixed
//! amount every update, but the velocity is never recomputed from it.

use arcade_engine::foundation::math::{constants::TAU, utils::wrap_once, Point2, Vec2};
use arcade_engine::render::{Color, RenderError, Surface2D, SurfaceGuard, WorldSize};
use rand::Rng;

use crate::components::{AsteroidSize, MotionMode, SizeProfile};
use crate::error::AsteroidError;
use crate::velocity::calculate_velocity;

/// Outline color shared by every asteroid, CSS `#D3D3D3`
pub const ASTEROID_COLOR: Color = Color::rgb(211.0 / 255.0, 211.0 / 255.0, 211.0 / 255.0);

/// Drifting circular obstacle
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    size: AsteroidSize,
    position: Point2,
    velocity: Vec2,
    angle: f32,
    color: Color,
    world: WorldSize,
    motion: MotionMode,
}

impl Asteroid {
    /// Spawn an asteroid with a random heading in `[-1, 1)` radians.
    ///
    /// `world` fixes the wraparound bounds for the asteroid's whole life.
    pub fn new<R: Rng + ?Sized>(
        size: AsteroidSize,
        position: Point2,
        world: WorldSize,
        rng: &mut R,
    ) -> Result<Self, AsteroidError> {
        let angle = rng.gen_range(-1.0_f32..1.0);
        Self::with_angle(size, position, world, angle)
    }

    /// Spawn an asteroid with a known heading
    pub fn with_angle(
        size: AsteroidSize,
        position: Point2,
        world: WorldSize,
        angle: f32,
    ) -> Result<Self, AsteroidError> {
        if !world.is_valid() {
            log::warn!("Rejected asteroid spawn in {}x{} world", world.width, world.height);
            return Err(AsteroidError::InvalidWorldSize {
                width: world.width,
                height: world.height,
            });
        }

        let velocity = calculate_velocity(angle, size.max_speed());
        log::trace!(
            "Spawned {size:?} asteroid at ({}, {}) heading {angle:.3}",
            position.x,
            position.y
        );

        Ok(Self {
            size,
            position,
            velocity,
            angle,
            color: ASTEROID_COLOR,
            world,
            motion: MotionMode::default(),
        })
    }

    /// Use a different motion mode
    #[must_use]
    pub const fn with_motion(mut self, motion: MotionMode) -> Self {
        self.motion = motion;
        self
    }

    /// Use a different outline color
    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Advance one frame.
    ///
    /// Moves against the velocity vector, wraps each coordinate back into
    /// the world with a single correction, then applies the size's angular
    /// drift. In [`MotionMode::PerFrame`] `elapsed` has no effect.
    pub fn update(&mut self, elapsed: f32) {
        let step = self.motion.step_scale(elapsed);

        self.position -= self.velocity * step;
        self.position.x = wrap_once(self.position.x, self.world.width);
        self.position.y = wrap_once(self.position.y, self.world.height);

        self.angle += self.profile().angular_drift * step;
    }

    /// Stroke the outline circle at the current position.
    ///
    /// The surface's transform state is saved before drawing and restored
    /// afterwards, including when a draw call fails.
    pub fn render<S: Surface2D + ?Sized>(&self, _elapsed: f32, surface: &mut S) -> Result<(), RenderError> {
        let mut scoped = SurfaceGuard::new(surface);
        scoped.translate(self.position.x, self.position.y);
        scoped.begin_path();
        scoped.arc(0.0, 0.0, self.radius(), 0.0, TAU)?;
        scoped.close_path();
        scoped.set_stroke_color(self.color);
        scoped.stroke()?;
        scoped.finish()
    }

    /// Size class
    pub const fn size(&self) -> AsteroidSize {
        self.size
    }

    /// Fixed parameters of this asteroid's size class
    pub const fn profile(&self) -> &'static SizeProfile {
        self.size.profile()
    }

    /// Current position
    pub const fn position(&self) -> Point2 {
        self.position
    }

    /// Velocity fixed at spawn time
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Current heading in radians
    pub const fn angle(&self) -> f32 {
        self.angle
    }

    /// Outline radius
    pub const fn radius(&self) -> f32 {
        self.size.radius()
    }

    /// Outline color
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Wraparound bounds captured at spawn time
    pub const fn world(&self) -> WorldSize {
        self.world
    }

    /// Motion mode in effect
    pub const fn motion(&self) -> MotionMode {
        self.motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use arcade_engine::render::{DrawCommand, RecordingSurface};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const WORLD: WorldSize = WorldSize::new(800.0, 600.0);

    fn asteroid(size: AsteroidSize, x: f32, y: f32, angle: f32) -> Asteroid {
        Asteroid::with_angle(size, Point2::new(x, y), WORLD, angle).unwrap()
    }

    #[test]
    fn test_large_wraps_off_top_edge() {
        let mut large = asteroid(AsteroidSize::Large, 0.0, 0.0, 0.0);
        assert_eq!(large.velocity(), Vec2::new(0.0, 1.5));

        large.update(1.0 / 60.0);

        assert_eq!(large.position(), Point2::new(0.0, 598.5));
        assert_eq!(large.angle(), -0.08);
    }

    #[test]
    fn test_medium_single_step() {
        let mut medium = asteroid(AsteroidSize::Medium, 400.0, 300.0, 0.0);
        assert_eq!(medium.velocity(), Vec2::new(0.0, 1.1));

        medium.update(1.0 / 60.0);

        assert_eq!(medium.angle(), 0.02);
        assert_eq!(medium.position().x, 400.0);
        assert_relative_eq!(medium.position().y, 298.9, epsilon = 1e-4);
    }

    #[test]
    fn test_wraps_off_bottom_and_right_edges() {
        // Heading of pi points the velocity down the negative y axis,
        // so subtracting it moves the asteroid toward larger y.
        let mut small = asteroid(AsteroidSize::Small, 799.8, 599.8, std::f32::consts::PI);
        small.update(0.0);
        assert!(small.position().y < 1.0, "y = {}", small.position().y);

        let mut sideways = asteroid(AsteroidSize::Large, 799.0, 10.0, -std::f32::consts::FRAC_PI_2);
        sideways.update(0.0);
        assert_relative_eq!(sideways.position().x, 0.5, epsilon = 1e-3);
    }

    #[test]
    fn test_random_heading_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let a = Asteroid::new(AsteroidSize::Small, Point2::new(1.0, 1.0), WORLD, &mut rng).unwrap();
            assert!((-1.0..1.0).contains(&a.angle()), "angle {}", a.angle());
        }
    }

    #[test]
    fn test_seeded_spawns_are_reproducible() {
        let spawn = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            Asteroid::new(AsteroidSize::Medium, Point2::new(5.0, 5.0), WORLD, &mut rng).unwrap()
        };
        assert_eq!(spawn(9), spawn(9));
    }

    #[test]
    fn test_velocity_follows_spawn_heading() {
        let mut rng = StdRng::seed_from_u64(3);
        for size in AsteroidSize::ALL {
            let a = Asteroid::new(size, Point2::new(100.0, 100.0), WORLD, &mut rng).unwrap();
            assert_relative_eq!(a.velocity().x, a.angle().sin() * size.max_speed(), epsilon = 1e-6);
            assert_relative_eq!(a.velocity().y, a.angle().cos() * size.max_speed(), epsilon = 1e-6);
            assert_relative_eq!(a.velocity().norm(), size.max_speed(), epsilon = 1e-5);
        }
    }

    #[test]
    fn test_drift_does_not_steer() {
        let mut large = asteroid(AsteroidSize::Large, 400.0, 300.0, 0.5);
        let velocity = large.velocity();
        for _ in 0..100 {
            large.update(1.0 / 60.0);
        }
        assert_eq!(large.velocity(), velocity);
        assert_relative_eq!(large.angle(), 0.5 - 100.0 * 0.08, epsilon = 1e-4);
    }

    #[test]
    fn test_drift_ignores_elapsed_time() {
        for size in AsteroidSize::ALL {
            let mut a = asteroid(size, 400.0, 300.0, 0.3);
            for elapsed in [0.0, 1.0 / 144.0, 1.0 / 30.0, 2.5] {
                let before = a.angle();
                a.update(elapsed);
                assert_eq!(a.angle(), before + size.angular_drift());
            }
        }
    }

    #[test]
    fn test_time_scaled_half_step() {
        let mut medium = asteroid(AsteroidSize::Medium, 400.0, 300.0, 0.0)
            .with_motion(MotionMode::TimeScaled { reference_fps: 64.0 });
        medium.update(1.0 / 128.0);
        assert_relative_eq!(medium.position().y, 300.0 - 0.55, epsilon = 1e-4);
        assert_relative_eq!(medium.angle(), 0.01, epsilon = 1e-7);
    }

    #[test]
    fn test_invalid_world_rejected() {
        for world in [
            WorldSize::new(0.0, 600.0),
            WorldSize::new(800.0, -5.0),
            WorldSize::new(f32::NAN, 600.0),
        ] {
            let result = Asteroid::with_angle(AsteroidSize::Large, Point2::origin(), world, 0.0);
            assert!(matches!(result, Err(AsteroidError::InvalidWorldSize { .. })));
        }
    }

    #[test]
    fn test_render_draws_translated_circle() {
        let a = asteroid(AsteroidSize::Medium, 120.0, 80.0, 0.0);
        let mut surface = RecordingSurface::new(WORLD);
        a.render(1.0 / 60.0, &mut surface).unwrap();

        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::Save,
                DrawCommand::Translate { dx: 120.0, dy: 80.0 },
                DrawCommand::BeginPath,
                DrawCommand::Arc {
                    cx: 0.0,
                    cy: 0.0,
                    radius: 20.0,
                    start_angle: 0.0,
                    end_angle: TAU,
                },
                DrawCommand::ClosePath,
                DrawCommand::SetStrokeColor(ASTEROID_COLOR),
                DrawCommand::Stroke {
                    color: ASTEROID_COLOR,
                    origin: Vec2::new(120.0, 80.0),
                },
                DrawCommand::Restore,
            ]
        );
        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.translation(), Vec2::zeros());
    }

    #[test]
    fn test_render_restores_after_failed_stroke() {
        let a = asteroid(AsteroidSize::Small, 50.0, 50.0, 0.0);
        let mut surface = RecordingSurface::new(WORLD).failing_on_stroke();

        assert!(matches!(a.render(0.0, &mut surface), Err(RenderError::Backend(_))));
        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.translation(), Vec2::zeros());
        assert_eq!(surface.commands().last(), Some(&DrawCommand::Restore));
    }

    #[test]
    fn test_render_through_trait_object() {
        let a = asteroid(AsteroidSize::Large, 10.0, 10.0, 0.0);
        let mut recording = RecordingSurface::new(WORLD);
        let surface: &mut dyn Surface2D = &mut recording;
        a.render(0.0, surface).unwrap();
        assert_eq!(recording.stroke_count(), 1);
    }

    #[test]
    fn test_radius_and_color_are_stable() {
        let mut a = asteroid(AsteroidSize::Large, 10.0, 10.0, 0.2);
        let mut surface = RecordingSurface::new(WORLD);
        for _ in 0..500 {
            a.update(1.0 / 60.0);
            a.render(1.0 / 60.0, &mut surface).unwrap();
            assert_eq!(a.radius(), 30.0);
            assert_eq!(a.color(), ASTEROID_COLOR);
        }
    }

    #[test]
    fn test_outline_is_light_grey() {
        assert_eq!(ASTEROID_COLOR.to_css_rgb(), "rgb(211,211,211)");
        assert_eq!(ASTEROID_COLOR.a, 1.0);

        let a = asteroid(AsteroidSize::Small, 50.0, 50.0, 0.0);
        let mut surface = RecordingSurface::new(WORLD);
        a.render(0.0, &mut surface).unwrap();
        let stroked = surface.commands().iter().find_map(|c| match c {
            DrawCommand::Stroke { color, .. } => Some(*color),
            _ => None,
        });
        assert_eq!(stroked.map(|c| c.to_css_rgb()).as_deref(), Some("rgb(211,211,211)"));
    }

    #[test]
    fn test_world_bounds_are_captured_at_spawn() {
        let mut surface = RecordingSurface::new(WORLD);
        let mut a = Asteroid::with_angle(AsteroidSize::Large, Point2::new(1.0, 1.0), surface.size(), 0.0).unwrap();
        surface.resize(WorldSize::new(100.0, 100.0));
        a.update(0.0);
        assert_eq!(a.world(), WORLD);
        assert_relative_eq!(a.position().y, 599.5, epsilon = 1e-4);
    }
}
