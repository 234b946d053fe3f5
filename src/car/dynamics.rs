//! Traction-limited kinematic bicycle model, explicit Euler, fixed call order.

use nalgebra::{Point2, Vector2};

use crate::car::axle::{solve_axles, AxlePair};
use crate::car::config::CarConfig;

pub struct Car {
    pub config: CarConfig,

    pub position: Point2<f32>,
    pub velocity: f32,       // units/s, floored at 0 (no reverse)
    pub yaw: f32,            // radians, unbounded (wraps through trig)
    pub steering_angle: f32, // radians, |angle| <= max_steer_angle

    // track-derived context, stored for telemetry
    pub mu: f32,
    pub zone: usize,

    pub laptime_s: f32,
    pub tire_wear: f32, // percent, 100 -> 0, never refilled

    // derived each step
    pub a_long: f32,   // units/s^2, after ceiling + drag
    pub a_lat: f32,    // units/s^2, v * yaw_rate
    pub f_long: f32,   // N
    pub f_lat: f32,    // N
    pub yaw_rate: f32, // rad/s
    pub axles: AxlePair,
}

impl Car {
    pub fn new(config: CarConfig, position: Point2<f32>) -> Self {
        Self {
            config,
            position,
            velocity: 0.0,
            yaw: 0.0,
            steering_angle: 0.0,
            mu: 0.9,
            zone: 0,
            laptime_s: 0.0,
            tire_wear: 100.0,
            a_long: 0.0,
            a_lat: 0.0,
            f_long: 0.0,
            f_lat: 0.0,
            yaw_rate: 0.0,
            axles: AxlePair::at_rest(config.mass, config.gravity, 0.9),
        }
    }

    /// Unit vector along the current heading.
    pub fn forward(&self) -> Vector2<f32> {
        Vector2::new(self.yaw.cos(), self.yaw.sin())
    }

    /// Advance one timestep. No-op when `dt <= 0`.
    ///
    /// Caller contract: `steering_input` and `throttle_input` in [-1, 1]
    /// (values outside propagate linearly, they are not re-clamped here),
    /// `mu > 0`, `zone` only tags telemetry.
    pub fn advance(
        &mut self,
        dt: f32,
        steering_input: f32,
        throttle_input: f32,
        mu: f32,
        zone: usize,
    ) {
        if dt <= 0.0 {
            return;
        }

        let cfg = self.config;
        self.mu = mu;
        self.zone = zone;

        // steering rack: rate-limited integration, hard angle stop
        self.steering_angle = (self.steering_angle + steering_input * cfg.max_steer_rate * dt)
            .clamp(-cfg.max_steer_angle, cfg.max_steer_angle);

        // commanded accel, then the traction ceiling: no request may exceed
        // the friction-limited acceleration, whatever the axles report later
        let a_cmd = throttle_input * cfg.max_accel;
        let a_grip = mu * cfg.gravity;
        let a_limited = a_cmd.clamp(-a_grip, a_grip);

        // linear drag, velocity floor
        self.a_long = a_limited - cfg.drag_coeff * self.velocity;
        self.velocity = (self.velocity + self.a_long * dt).max(0.0);

        // kinematic bicycle yaw
        self.yaw_rate = self.velocity / cfg.wheelbase * self.steering_angle.tan();
        self.yaw += self.yaw_rate * dt;

        // translate along the heading
        self.position += self.forward() * (self.velocity * dt);

        // lateral accel and force telemetry
        self.a_lat = self.velocity * self.yaw_rate;
        self.f_long = cfg.mass * self.a_long;
        self.f_lat = cfg.mass * self.a_lat;

        // axle breakdown sees the raw demand, not the limited one
        self.axles = solve_axles(cfg.mass, cfg.gravity, mu, a_cmd);

        // wear is telemetry-only, no feedback into grip
        let wear_rate = cfg.wear_long * self.a_long.abs() + cfg.wear_lat * self.a_lat.abs();
        self.tire_wear = (self.tire_wear - wear_rate * dt * 100.0).clamp(0.0, 100.0);

        self.laptime_s += dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::car::config::COMPACT;
    use rand::Rng;

    fn car() -> Car {
        Car::new(COMPACT, Point2::new(400.0, 300.0))
    }

    #[test]
    fn zero_dt_is_a_noop() {
        let mut c = car();
        c.velocity = 12.0;
        c.yaw = 0.4;
        c.steering_angle = 0.1;
        let pos = c.position;

        c.advance(0.0, 1.0, 1.0, 0.9, 3);

        assert_eq!(c.velocity, 12.0);
        assert_eq!(c.yaw, 0.4);
        assert_eq!(c.steering_angle, 0.1);
        assert_eq!(c.position, pos);
        assert_eq!(c.laptime_s, 0.0);
        assert_eq!(c.tire_wear, 100.0);
    }

    #[test]
    fn negative_dt_is_a_noop() {
        let mut c = car();
        c.advance(-0.016, 1.0, 1.0, 0.9, 0);
        assert_eq!(c.velocity, 0.0);
        assert_eq!(c.laptime_s, 0.0);
    }

    #[test]
    fn converges_to_drag_equilibrium() {
        // mu*g - drag*v = 0  =>  v = 0.9 * 9.81 / 0.25 = 35.316
        let mut c = car();
        let dt = 1.0 / 60.0;
        for _ in 0..6000 {
            c.advance(dt, 0.0, 1.0, 0.9, 0);
        }
        assert!((c.velocity - 35.316).abs() < 0.1, "v = {}", c.velocity);
    }

    #[test]
    fn traction_ceiling_limits_acceleration() {
        let mut c = car();
        c.advance(1.0 / 60.0, 0.0, 1.0, 0.1, 0);
        // a_cmd = 10, ceiling = 0.1 * 9.81 = 0.981
        assert!(c.a_long <= 0.1 * 9.81 + 1e-6);
        assert!(c.axles.front.fx_eff <= c.axles.front.f_max + 1e-3);
        assert!(c.axles.front.slip > 0.0);
    }

    #[test]
    fn no_reverse_motion() {
        let mut c = car();
        for _ in 0..100 {
            c.advance(1.0 / 60.0, 0.0, -1.0, 0.9, 0);
        }
        assert_eq!(c.velocity, 0.0);
    }

    #[test]
    fn steering_angle_saturates() {
        let mut c = car();
        for _ in 0..120 {
            c.advance(1.0 / 60.0, 1.0, 0.0, 0.9, 0);
        }
        assert!((c.steering_angle - COMPACT.max_steer_angle).abs() < 1e-6);
    }

    #[test]
    fn tire_wear_never_increases() {
        let mut c = car();
        let mut rng = rand::thread_rng();
        let mut last = c.tire_wear;
        for _ in 0..2000 {
            let steer: f32 = rng.gen_range(-1.0..1.0);
            let throttle: f32 = rng.gen_range(-1.0..1.0);
            let mu: f32 = rng.gen_range(0.05..1.0);
            c.advance(1.0 / 60.0, steer, throttle, mu, 0);
            assert!(c.tire_wear <= last);
            assert!((0.0..=100.0).contains(&c.tire_wear));
            last = c.tire_wear;
        }
    }

    #[test]
    fn straight_line_motion_matches_heading() {
        let mut c = car();
        c.velocity = 10.0;
        c.advance(0.1, 0.0, 0.0, 0.9, 0);
        // yaw 0, steering 0: moves along +x only
        assert!(c.position.x > 400.0);
        assert!((c.position.y - 300.0).abs() < 1e-4);
    }
}
