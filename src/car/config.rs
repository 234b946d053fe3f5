//! Car tuning constants, grouped so presets stay copyable values.

#[derive(Debug, Clone, Copy)]
pub struct CarConfig {
    pub mass: f32,            // kg
    pub wheelbase: f32,       // world units (front axle to rear axle)
    pub max_accel: f32,       // units/s^2 at full throttle
    pub max_steer_angle: f32, // radians
    pub max_steer_rate: f32,  // radians / sec
    pub drag_coeff: f32,      // 1/s, linear aero + rolling drag
    pub gravity: f32,         // units/s^2, live-tunable from the UI
    pub wear_long: f32,       // wear fraction per (unit/s^2)*s, longitudinal
    pub wear_lat: f32,        // wear fraction per (unit/s^2)*s, lateral
}

pub const COMPACT: CarConfig = CarConfig {
    mass: 1200.0,
    wheelbase: 55.0,
    max_accel: 10.0,
    max_steer_angle: 0.523_598_8, // 30 degrees
    max_steer_rate: 0.872_664_6,  // 50 degrees per second
    drag_coeff: 0.25,
    gravity: 9.81,
    wear_long: 0.0002,
    wear_lat: 0.0004,
};
