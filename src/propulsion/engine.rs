use crate::physics::RigidBody;
use crate::utils::constants::forward;

/// A powerplant thrusting along the body forward axis, through the center of
/// mass. Produces no torque.
#[derive(Debug, Clone)]
pub struct Engine {
    /// Commanded throttle, expected in [0, 1]. The caller owns clamping.
    pub throttle: f64,
    /// Maximum thrust (N).
    thrust: f64,
    // Display data, not part of the force model.
    pub rpm: f64,
    pub horsepower: f64,
    pub propeller_diameter: f64,
}

impl Engine {
    pub fn new(thrust: f64) -> Self {
        Self {
            throttle: 0.5,
            thrust,
            rpm: 2400.0,
            horsepower: 1000.0,
            propeller_diameter: 1.8,
        }
    }

    /// Maximum thrust (N).
    pub fn thrust(&self) -> f64 {
        self.thrust
    }

    /// Apply throttle-scaled thrust to the carrying body.
    pub fn apply_forces(&self, rigid_body: &mut RigidBody) {
        let force = self.thrust * self.throttle;
        rigid_body.add_relative_force(&(forward() * force));
    }
}
