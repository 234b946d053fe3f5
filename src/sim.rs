//! Per-tick orchestration: surface config -> progress -> controller ->
//! dynamics -> telemetry. Call order is the contract; every stage feeds the
//! next within the same tick.

use nalgebra::Point2;

use crate::autopilot::Autopilot;
use crate::car::{Car, Telemetry, COMPACT};
use crate::track::{Track, PROGRESS_SAMPLES};

pub struct Simulation {
    pub track: Track,
    pub car: Car,
    pub autopilot: Autopilot,
}

impl Simulation {
    pub fn new() -> Self {
        Self {
            track: Track::new(Point2::new(350.0, 300.0), 240.0, 160.0, 10),
            car: Car::new(COMPACT, Point2::new(400.0, 300.0)),
            autopilot: Autopilot::default(),
        }
    }

    /// One simulation tick under the currently selected surface and gravity.
    pub fn step(&mut self, dt: f32, surface: &str, gravity: f32) -> Telemetry {
        self.track.set_all_surfaces(surface);
        self.car.config.gravity = gravity;

        let progress = self
            .track
            .nearest_progress(&self.car.position, PROGRESS_SAMPLES);
        let (steering, throttle) = self.autopilot.compute(&self.car, &self.track, progress);
        let mu = self.track.friction_at(progress);
        let zone = self.track.zone_of(progress);

        self.car.advance(dt, steering, throttle, mu, zone);
        self.car.telemetry(progress)
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
