//! autosim-server - single-car track simulation with a WebSocket telemetry feed.

pub mod autopilot;
pub mod car;
pub mod net;
pub mod sim;
pub mod state;
pub mod track;
