//! Fixed-schema telemetry snapshot. The serialized field names are the wire
//! contract with the rendering clients and must not change.

use serde::Serialize;

use crate::car::axle::AxlePair;
use crate::car::dynamics::Car;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Forces {
    #[serde(rename = "Fx")]
    pub fx: f32, // N, longitudinal
    #[serde(rename = "Fy")]
    pub fy: f32, // N, lateral
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CornerForces {
    #[serde(rename = "F_centripetal")]
    pub centripetal: f32,
    #[serde(rename = "F_centrifugal")]
    pub centrifugal: f32,
    #[serde(rename = "F_centripetal_abs")]
    pub centripetal_abs: f32,
    #[serde(rename = "F_centrifugal_abs")]
    pub centrifugal_abs: f32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Telemetry {
    pub zone: usize,
    pub speed_kmh: f32,
    pub tire_wear: f32,
    pub g_force: f32,
    pub grade_percent: f32, // always 0, no grade model
    pub friction_n: f32,
    pub laptime_s: f32,
    pub track_progress: f32,
    pub forces: Forces,
    pub corner_forces: CornerForces,
    pub axle: AxlePair,
}

impl Car {
    /// Read-only snapshot for the HUD / views; `progress` is echoed back.
    pub fn telemetry(&self, progress: f32) -> Telemetry {
        let g = self.config.gravity;
        let g_force = if g > 0.0 {
            self.a_long.hypot(self.a_lat) / g
        } else {
            0.0
        };

        Telemetry {
            zone: self.zone,
            speed_kmh: self.velocity * 3.6,
            tire_wear: self.tire_wear,
            g_force,
            grade_percent: 0.0,
            friction_n: self.mu * self.config.mass * g,
            laptime_s: self.laptime_s,
            track_progress: progress,
            forces: Forces {
                fx: self.f_long,
                fy: self.f_lat,
            },
            corner_forces: CornerForces {
                centripetal: self.f_lat,
                centrifugal: -self.f_lat,
                centripetal_abs: self.f_lat.abs(),
                centrifugal_abs: self.f_lat.abs(),
            },
            axle: self.axles,
        }
    }
}
