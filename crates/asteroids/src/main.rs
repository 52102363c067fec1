//! Headless asteroid field demo
//!
//! Usage: `asteroids [config.toml|config.ron]`
//!
//! Spawns a field from the configuration, steps it for `run.frames` frames
//! against an SVG surface and optionally writes the last frame to
//! `run.svg_output`.

use arcade_engine::config::Config;
use arcade_engine::foundation::logging;
use arcade_engine::foundation::time::FrameClock;
use arcade_engine::render::SvgSurface;
use asteroids::{AsteroidField, GameConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Frames between progress log lines
const REPORT_INTERVAL: u64 = 60;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading configuration from {path}");
            GameConfig::load_or_default(&path)?
        }
        None => GameConfig::default(),
    };
    config.validate()?;

    let mut rng = match config.field.seed {
        Some(seed) => {
            log::info!("Using fixed seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut field = AsteroidField::from_config(&config, &mut rng)?;
    let mut surface = SvgSurface::new(config.world).with_background(config.render.background);
    let mut clock = FrameClock::new(config.run.timestep);

    for _ in 0..config.run.frames {
        let elapsed = clock.tick();

        field.update(elapsed);
        surface.clear();
        field.render(elapsed, &mut surface)?;

        if clock.frame() % REPORT_INTERVAL == 0 {
            log::debug!(
                "Frame {}: {} asteroids, {:.1}s simulated, {:.0} frames/s",
                clock.frame(),
                field.len(),
                clock.sim_time(),
                clock.throughput()
            );
        }
    }

    log::info!(
        "Simulated {} frames ({:.1}s game time) in {:.3}s",
        clock.frame(),
        clock.sim_time(),
        clock.wall_time().as_secs_f64()
    );

    if let Some(path) = &config.run.svg_output {
        surface.write_to(path)?;
        log::info!("Wrote final frame to {}", path.display());
    }

    Ok(())
}
