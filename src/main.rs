use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Mutex;
use tokio::time::{interval, Duration};

use autosim_server::net::start_websocket_server;
use autosim_server::sim::Simulation;
use autosim_server::state::{track_geometry_json, SharedSimState};

#[tokio::main]
async fn main() {
    println!("🚗 Starting autosim server...");

    let mut sim = Simulation::new();
    let state = Arc::new(Mutex::new(SharedSimState::new(track_geometry_json(
        &sim.track,
    ))));

    // Viewers connect here for telemetry and push surface/gravity config back
    tokio::spawn(start_websocket_server(Arc::clone(&state)));

    // ~60 Hz ticker; dt is measured wall-clock, the core takes it as-is
    let mut ticker = interval(Duration::from_millis(16));
    let mut last = Instant::now();

    loop {
        ticker.tick().await;

        let now = Instant::now();
        let dt = (now - last).as_secs_f32();
        last = now;

        let mut shared = state.lock().await;
        let surface = shared.config.surface.clone();
        let gravity = shared.config.gravity;

        let telemetry = sim.step(dt, &surface, gravity);

        shared.tick += 1;
        shared.broadcast_snapshot(&telemetry);
    }
}
