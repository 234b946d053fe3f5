//! car - single-vehicle dynamics (pure state + integrator, engine-agnostic)

pub mod axle;
pub mod config;
pub mod dynamics;
pub mod telemetry;

pub use axle::{AxlePair, AxleState};
pub use config::{CarConfig, COMPACT};
pub use dynamics::Car;
pub use telemetry::Telemetry;
