//! Frame clock for fixed-step simulation

use std::time::{Duration, Instant};

/// Fixed-step frame clock
///
/// Simulated time advances by exactly one `timestep` per [`FrameClock::tick`],
/// however long the frame really took. Wall time is tracked alongside it so
/// headless runs can report throughput.
#[derive(Debug, Clone)]
pub struct FrameClock {
    timestep: f32,
    frame: u64,
    started: Instant,
}

impl FrameClock {
    /// Start a clock that steps by `timestep` seconds per frame
    pub fn new(timestep: f32) -> Self {
        Self {
            timestep,
            frame: 0,
            started: Instant::now(),
        }
    }

    /// Begin the next frame, returning its elapsed time in seconds
    pub fn tick(&mut self) -> f32 {
        self.frame += 1;
        self.timestep
    }

    /// Seconds per frame
    pub const fn timestep(&self) -> f32 {
        self.timestep
    }

    /// Frames ticked so far
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Simulated seconds so far.
    ///
    /// Derived from the frame count, so rounding does not accumulate.
    #[allow(clippy::cast_precision_loss)]
    pub fn sim_time(&self) -> f64 {
        self.frame as f64 * f64::from(self.timestep)
    }

    /// Real time since the clock was created
    pub fn wall_time(&self) -> Duration {
        self.started.elapsed()
    }

    /// Frames simulated per wall-clock second
    #[allow(clippy::cast_precision_loss)]
    pub fn throughput(&self) -> f64 {
        let secs = self.wall_time().as_secs_f64();
        if secs > 0.0 {
            self.frame as f64 / secs
        } else {
            0.0
        }
    }
}
