//! Proportional path follower: lookahead point on the curve, heading error,
//! friction- and corner-scaled cruise speed.

use nalgebra::Vector2;

use crate::car::Car;
use crate::track::Track;

/// Surface the cruise speed was tuned on.
const MU_REFERENCE: f32 = 0.9;
/// Heading error at which the speed scale bottoms out.
const FULL_SPEED_ERROR: f32 = 1.047_197_6; // 60 degrees
/// Velocity error (units/s) mapped to full throttle.
const THROTTLE_GAIN: f32 = 50.0;

pub struct Autopilot {
    pub lookahead: f32,         // progress offset; larger -> smoother, less exact
    pub max_heading_error: f32, // radians mapped to full steering
    pub v_target: f32,          // cruise speed, units/s
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            lookahead: 0.03,
            max_heading_error: 0.610_865_2, // 35 degrees
            v_target: 110.0,
        }
    }
}

impl Autopilot {
    /// Steering and throttle in [-1, 1] for the current snapshot.
    ///
    /// Pure function of (car, track, progress); no state survives the call.
    pub fn compute(&self, car: &Car, track: &Track, progress: f32) -> (f32, f32) {
        let t_target = (progress + self.lookahead).rem_euclid(1.0);
        let target = track.curve_point(t_target);

        let forward = car.forward();
        let to_target = target - car.position;
        let dist = to_target.norm();
        // on top of the target there is no direction to correct toward
        let dir: Vector2<f32> = if dist > 1e-6 {
            to_target / dist
        } else {
            forward
        };

        // signed angle between heading and target direction, wrapped to [-pi, pi]
        let cross = forward.x * dir.y - forward.y * dir.x;
        let dot = forward.dot(&dir);
        let heading_error = cross.atan2(dot);

        let steering = (heading_error / self.max_heading_error).clamp(-1.0, 1.0);

        // slow down on low grip and when turning hard
        let mu = track.friction_at(progress);
        let mut v_des = self.v_target * (mu / MU_REFERENCE).clamp(0.35, 1.0);
        v_des *= (1.0 - heading_error.abs() / FULL_SPEED_ERROR).clamp(0.4, 1.0);

        let throttle = ((v_des - car.velocity) / THROTTLE_GAIN).clamp(-1.0, 1.0);

        (steering, throttle)
    }
}
