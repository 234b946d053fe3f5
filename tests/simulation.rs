//! End-to-end autopilot run: rest start on Asphalt, 10 simulated seconds at
//! 60 Hz.

use autosim_server::sim::Simulation;

#[test]
fn ten_seconds_on_asphalt() {
    let mut sim = Simulation::new();
    let dt = 1.0 / 60.0;
    let ticks = 600;

    let mut peak_velocity: f32 = 0.0;
    let mut last = sim.step(dt, "Asphalt", 9.81);
    for _ in 1..ticks {
        last = sim.step(dt, "Asphalt", 9.81);
        peak_velocity = peak_velocity.max(sim.car.velocity);
    }

    // velocity rises toward the drag equilibrium (0.9 * 9.81 / 0.25 = 35.3)
    // and cannot overshoot it
    assert!(peak_velocity > 20.0, "peak = {peak_velocity}");
    assert!(peak_velocity < 35.4, "peak = {peak_velocity}");
    assert!(sim.car.velocity > 10.0, "final = {}", sim.car.velocity);

    // lap time is the accumulated dt
    assert!((last.laptime_s - 10.0).abs() < 1e-2, "laptime = {}", last.laptime_s);

    // yaw stays bounded while following the closed curve
    assert!(sim.car.yaw.is_finite());
    assert!(sim.car.yaw.abs() < 10.0, "yaw = {}", sim.car.yaw);

    // tires wore, but nowhere near out
    assert!(last.tire_wear < 100.0);
    assert!(last.tire_wear > 0.0);

    // the controller keeps the car in the track's neighborhood
    let offset = sim.car.position - sim.track.center;
    assert!(offset.norm() < 800.0, "drifted to {:?}", sim.car.position);

    assert!((0.0..1.0).contains(&last.track_progress));
    assert!(last.zone < sim.track.zones);
}

#[test]
fn low_grip_surface_is_slower() {
    let dt = 1.0 / 60.0;

    let mut asphalt = Simulation::new();
    let mut rasen = Simulation::new();
    for _ in 0..600 {
        asphalt.step(dt, "Asphalt", 9.81);
        rasen.step(dt, "Rasen", 9.81);
    }

    // Rasen: ceiling 0.35 * 9.81 = 3.43, equilibrium 13.7; Asphalt gets well past it
    assert!(asphalt.car.velocity > rasen.car.velocity + 5.0);
    assert!(rasen.car.velocity < 14.0);
}

#[test]
fn surface_switch_mid_run_takes_effect() {
    let dt = 1.0 / 60.0;
    let mut sim = Simulation::new();

    for _ in 0..300 {
        sim.step(dt, "Asphalt", 9.81);
    }
    let v_before = sim.car.velocity;

    let mut snap = sim.step(dt, "Dirt", 9.81);
    assert!((sim.car.mu - 0.5).abs() < 1e-6);

    for _ in 0..600 {
        snap = sim.step(dt, "Dirt", 9.81);
    }
    // Dirt equilibrium: 0.5 * 9.81 / 0.25 = 19.6, below the Asphalt speed
    assert!(sim.car.velocity < v_before);
    assert!((snap.friction_n - 0.5 * 1200.0 * 9.81).abs() < 1.0);
}
