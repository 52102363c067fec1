//! Collection of live asteroids
//!
//! The field is the spawner the host talks to: it owns every asteroid,
//! hands out stable [`AsteroidId`] handles, and drives update/render for
//! all of them once per frame. Destroying asteroids stays the host's call
//! through [`AsteroidField::despawn`].

use arcade_engine::foundation::math::Point2;
use arcade_engine::render::{Color, Surface2D, WorldSize};
use rand::Rng;
use slotmap::{new_key_type, SlotMap};

use crate::asteroid::{Asteroid, ASTEROID_COLOR};
use crate::components::{AsteroidSize, MotionMode, SizeWeights};
use crate::config::GameConfig;
use crate::error::AsteroidError;

new_key_type! {
    /// Stable handle to an asteroid in a field
    pub struct AsteroidId;
}

/// Owns and drives a set of asteroids sharing one world
pub struct AsteroidField {
    world: WorldSize,
    motion: MotionMode,
    color: Color,
    size_weights: SizeWeights,
    asteroids: SlotMap<AsteroidId, Asteroid>,
}

impl AsteroidField {
    /// Create an empty field
    pub fn new(world: WorldSize, motion: MotionMode) -> Result<Self, AsteroidError> {
        if !world.is_valid() {
            return Err(AsteroidError::InvalidWorldSize {
                width: world.width,
                height: world.height,
            });
        }

        Ok(Self {
            world,
            motion,
            color: ASTEROID_COLOR,
            size_weights: SizeWeights::default(),
            asteroids: SlotMap::with_key(),
        })
    }

    /// Build and populate a field from game settings
    pub fn from_config<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, AsteroidError> {
        config.validate()?;

        let mut field = Self::new(config.world, config.motion)?
            .with_color(config.render.stroke_color)
            .with_size_weights(config.field.size_weights)?;
        field.populate(config.field.asteroid_count, rng)?;

        log::info!(
            "Asteroid field ready: {} asteroids in {}x{} world ({:?})",
            field.len(),
            config.world.width,
            config.world.height,
            config.motion
        );
        Ok(field)
    }

    /// Outline color for asteroids spawned from now on
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Size weights used by [`AsteroidField::spawn_random`]
    pub fn with_size_weights(mut self, size_weights: SizeWeights) -> Result<Self, AsteroidError> {
        size_weights.validate()?;
        self.size_weights = size_weights;
        Ok(self)
    }

    /// Spawn one asteroid with a random heading
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        size: AsteroidSize,
        position: Point2,
        rng: &mut R,
    ) -> Result<AsteroidId, AsteroidError> {
        let asteroid = Asteroid::new(size, position, self.world, rng)?
            .with_motion(self.motion)
            .with_color(self.color);
        Ok(self.insert(asteroid))
    }

    /// Spawn one asteroid of a weighted-random size at a random position
    pub fn spawn_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<AsteroidId, AsteroidError> {
        let size = self.size_weights.choose(rng)?;
        let position = Point2::new(
            rng.gen_range(0.0..self.world.width),
            rng.gen_range(0.0..self.world.height),
        );
        self.spawn(size, position, rng)
    }

    /// Spawn `count` random asteroids
    pub fn populate<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Result<(), AsteroidError> {
        for _ in 0..count {
            self.spawn_random(rng)?;
        }
        Ok(())
    }

    /// Take ownership of an already built asteroid
    pub fn insert(&mut self, asteroid: Asteroid) -> AsteroidId {
        let size = asteroid.size();
        let id = self.asteroids.insert(asteroid);
        log::debug!("Spawned {size:?} asteroid {id:?}");
        id
    }

    /// Remove an asteroid, returning it if it was still alive
    pub fn despawn(&mut self, id: AsteroidId) -> Option<Asteroid> {
        let removed = self.asteroids.remove(id);
        if removed.is_some() {
            log::debug!("Despawned asteroid {id:?}");
        }
        removed
    }

    /// Look up a live asteroid
    pub fn get(&self, id: AsteroidId) -> Option<&Asteroid> {
        self.asteroids.get(id)
    }

    /// Whether `id` still refers to a live asteroid
    pub fn contains(&self, id: AsteroidId) -> bool {
        self.asteroids.contains_key(id)
    }

    /// Number of live asteroids
    pub fn len(&self) -> usize {
        self.asteroids.len()
    }

    /// Whether the field has no asteroids
    pub fn is_empty(&self) -> bool {
        self.asteroids.is_empty()
    }

    /// Iterate over live asteroids
    pub fn iter(&self) -> impl Iterator<Item = (AsteroidId, &Asteroid)> {
        self.asteroids.iter()
    }

    /// World bounds shared by every asteroid in the field
    pub const fn world(&self) -> WorldSize {
        self.world
    }

    /// Advance every asteroid one frame
    pub fn update(&mut self, elapsed: f32) {
        for asteroid in self.asteroids.values_mut() {
            asteroid.update(elapsed);
        }
    }

    /// Render every asteroid, stopping at the first surface error
    pub fn render<S: Surface2D + ?Sized>(&self, elapsed: f32, surface: &mut S) -> Result<(), AsteroidError> {
        for asteroid in self.asteroids.values() {
            asteroid.render(elapsed, surface)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use arcade_engine::render::RecordingSurface;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field() -> AsteroidField {
        AsteroidField::new(WorldSize::new(800.0, 600.0), MotionMode::PerFrame).unwrap()
    }

    #[test]
    fn test_spawn_and_despawn() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut field = field();
        let id = field.spawn(AsteroidSize::Small, Point2::new(10.0, 10.0), &mut rng).unwrap();

        assert_eq!(field.len(), 1);
        assert_eq!(field.get(id).map(Asteroid::size), Some(AsteroidSize::Small));

        let removed = field.despawn(id).unwrap();
        assert_eq!(removed.position(), Point2::new(10.0, 10.0));
        assert!(field.is_empty());
        assert!(!field.contains(id));
        assert!(field.despawn(id).is_none());
    }

    #[test]
    fn test_stale_id_does_not_alias_new_asteroid() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut field = field();
        let old = field.spawn(AsteroidSize::Large, Point2::new(1.0, 1.0), &mut rng).unwrap();
        field.despawn(old);
        let new = field.spawn(AsteroidSize::Medium, Point2::new(2.0, 2.0), &mut rng).unwrap();

        assert_ne!(old, new);
        assert!(field.get(old).is_none());
        assert!(field.get(new).is_some());
    }

    #[test]
    fn test_random_spawns_start_inside_world() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut field = field();
        field.populate(100, &mut rng).unwrap();

        assert_eq!(field.len(), 100);
        for (_, asteroid) in field.iter() {
            let p = asteroid.position();
            assert!(field.world().contains(p.x, p.y));
        }
    }

    #[test]
    fn test_spawned_asteroids_inherit_field_settings() {
        let mut rng = StdRng::seed_from_u64(2);
        let mode = MotionMode::TimeScaled { reference_fps: 30.0 };
        let mut field = AsteroidField::new(WorldSize::new(320.0, 240.0), mode)
            .unwrap()
            .with_color(Color::WHITE);
        let id = field.spawn(AsteroidSize::Medium, Point2::new(5.0, 5.0), &mut rng).unwrap();

        let asteroid = field.get(id).unwrap();
        assert_eq!(asteroid.motion(), mode);
        assert_eq!(asteroid.color(), Color::WHITE);
        assert_eq!(asteroid.world(), WorldSize::new(320.0, 240.0));
    }

    #[test]
    fn test_update_moves_every_asteroid() {
        let mut field = field();
        let a = field.insert(
            Asteroid::with_angle(AsteroidSize::Large, Point2::new(100.0, 100.0), field.world(), 0.0).unwrap(),
        );
        let b = field.insert(
            Asteroid::with_angle(AsteroidSize::Small, Point2::new(200.0, 200.0), field.world(), 0.0).unwrap(),
        );

        field.update(1.0 / 60.0);

        assert_eq!(field.get(a).unwrap().position(), Point2::new(100.0, 98.5));
        assert_relative_eq!(field.get(b).unwrap().position(), Point2::new(200.0, 199.3), epsilon = 1e-4);
    }

    #[test]
    fn test_render_draws_each_asteroid_once() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut field = field();
        field.populate(7, &mut rng).unwrap();

        let mut surface = RecordingSurface::new(field.world());
        field.render(0.0, &mut surface).unwrap();

        assert_eq!(surface.stroke_count(), 7);
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn test_render_stops_on_surface_error() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut field = field();
        field.populate(3, &mut rng).unwrap();

        let mut surface = RecordingSurface::new(field.world()).failing_on_stroke();
        assert!(matches!(field.render(0.0, &mut surface), Err(AsteroidError::Render(_))));
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn test_invalid_world_and_weights() {
        assert!(matches!(
            AsteroidField::new(WorldSize::new(-1.0, 10.0), MotionMode::PerFrame),
            Err(AsteroidError::InvalidWorldSize { .. })
        ));

        let empty = SizeWeights { large: 0, medium: 0, small: 0 };
        assert!(matches!(field().with_size_weights(empty), Err(AsteroidError::InvalidSizeWeights)));
    }
}
