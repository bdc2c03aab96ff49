use nalgebra::Vector3;

use fixedwing::utils::constants::MAX_TIMESTEP;
use fixedwing::utils::units::{knots, meters_per_second};
use fixedwing::{Aircraft, AircraftConfig, ControlInputs, SimError};

/// Headless step loop: fly the trainer hands-mostly-off for one minute of
/// simulated time and print a one-line telemetry summary each second.
fn main() -> Result<(), SimError> {
    let config = AircraftConfig::trainer();
    let mut aircraft = Aircraft::from_config(&config)?;

    aircraft
        .rigid_body
        .set_position(Vector3::new(0.0, 4000.0, 0.0));
    aircraft
        .rigid_body
        .set_velocity(Vector3::new(meters_per_second(600.0), 0.0, 0.0));
    aircraft.set_throttle(0.75);
    aircraft.set_controls(ControlInputs {
        roll: 0.0,
        yaw: 0.0,
        pitch: 0.05,
    });

    let dt = (1.0 / 60.0_f64).min(MAX_TIMESTEP);
    let steps = 60 * 60;

    println!("flying '{}' for {} steps at dt = {:.4} s", config.name, steps, dt);
    for step in 0..steps {
        aircraft.update(dt);

        if step % 60 == 0 {
            println!(
                "t = {:5.1} s  alt = {:7.1} m  speed = {:6.1} kt  throttle = {:.2}",
                step as f64 * dt,
                aircraft.altitude(),
                knots(aircraft.airspeed()),
                aircraft.throttle(),
            );
        }
    }

    let position = aircraft.position();
    println!(
        "final position: ({:.1}, {:.1}, {:.1}) m",
        position.x, position.y, position.z
    );

    Ok(())
}
