//! Per-axle drive force breakdown for a front-driven car.
//!
//! Static 50/50 normal load split, no weight transfer. The front axle carries
//! the full drive demand, the rear carries none in this model.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AxleState {
    #[serde(rename = "Fz")]
    pub fz: f32, // N, static normal load
    pub mu: f32,
    #[serde(rename = "Fmax")]
    pub f_max: f32, // N, friction-limited ceiling
    #[serde(rename = "Fx_req")]
    pub fx_req: f32, // N, requested drive force (pre-drag, pre-ceiling)
    #[serde(rename = "Fx_eff")]
    pub fx_eff: f32, // N, delivered after the traction clamp
    pub slip: f32, // 0 within the limit, unbounded above (display clamps)
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AxlePair {
    pub front: AxleState,
    pub rear: AxleState,
}

impl AxlePair {
    pub fn at_rest(mass: f32, gravity: f32, mu: f32) -> Self {
        solve_axles(mass, gravity, mu, 0.0)
    }
}

/// Resolve the per-axle record from the raw commanded acceleration.
///
/// `a_cmd` is the demand before drag and before the traction ceiling; the
/// clamp to `±Fmax` happens here, per axle, so the slip indicator reflects
/// how far the request exceeded capacity.
pub fn solve_axles(mass: f32, gravity: f32, mu: f32, a_cmd: f32) -> AxlePair {
    let fz = 0.5 * mass * gravity;
    let f_max = mu * fz;

    let fx_req = mass * a_cmd;
    let fx_eff = fx_req.clamp(-f_max, f_max);
    let slip = ((fx_req.abs() - f_max) / f_max.max(1e-6)).max(0.0);

    AxlePair {
        front: AxleState {
            fz,
            mu,
            f_max,
            fx_req,
            fx_eff,
            slip,
        },
        rear: AxleState {
            fz,
            mu,
            f_max,
            fx_req: 0.0,
            fx_eff: 0.0,
            slip: 0.0,
        },
    }
}
