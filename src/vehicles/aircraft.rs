use log::info;
use nalgebra::{Matrix3, Matrix4, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::aerodynamics::Wing;
use crate::physics::{RigidBody, RigidBodyParams};
use crate::propulsion::Engine;
use crate::utils::constants::{
    MAX_AILERON_DEFLECTION, MAX_ELEVATOR_DEFLECTION, MAX_RUDDER_DEFLECTION,
};
use crate::utils::units::kilometers_per_hour;

/// Pilot input axes, each roughly in [-1, 1]. The caller owns clamping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInputs {
    pub roll: f64,
    pub yaw: f64,
    pub pitch: f64,
}

/// The fixed set of surfaces on the airframe.
///
/// The set and its application order never change after construction. The
/// ailerons, elevator and rudder are the deflecting members; the main wings
/// only ever fly at their mounting incidence.
#[derive(Debug, Clone)]
pub struct ControlSurfaces {
    pub left_wing: Wing,
    pub left_aileron: Wing,
    pub right_aileron: Wing,
    pub right_wing: Wing,
    pub elevator: Wing,
    pub rudder: Wing,
}

impl ControlSurfaces {
    /// Surfaces in their fixed application order.
    pub fn iter(&self) -> impl Iterator<Item = &Wing> {
        [
            &self.left_wing,
            &self.left_aileron,
            &self.right_aileron,
            &self.right_wing,
            &self.elevator,
            &self.rudder,
        ]
        .into_iter()
    }
}

/// A complete airframe: one rigid body driven by an engine and a fixed set
/// of aerodynamic surfaces.
#[derive(Debug, Clone)]
pub struct Aircraft {
    pub rigid_body: RigidBody,
    pub engine: Engine,
    pub surfaces: ControlSurfaces,
    pub controls: ControlInputs,
    log_timer: f64,
}

impl Aircraft {
    pub fn new(mass: f64, thrust: f64, inertia: Matrix3<f64>, surfaces: ControlSurfaces) -> Self {
        let rigid_body = RigidBody::new(RigidBodyParams {
            mass,
            inertia,
            ..Default::default()
        });
        Self {
            rigid_body,
            engine: Engine::new(thrust),
            surfaces,
            controls: ControlInputs::default(),
            log_timer: 0.0,
        }
    }

    pub fn set_controls(&mut self, controls: ControlInputs) {
        self.controls = controls;
    }

    /// Throttle setting in [0, 1].
    pub fn throttle(&self) -> f64 {
        self.engine.throttle
    }

    pub fn set_throttle(&mut self, throttle: f64) {
        self.engine.throttle = throttle.clamp(0.0, 1.0);
    }

    /// Nudge the throttle, keeping it in [0, 1].
    pub fn adjust_throttle(&mut self, delta: f64) {
        self.set_throttle(self.engine.throttle + delta);
    }

    pub fn position(&self) -> &Vector3<f64> {
        self.rigid_body.position()
    }

    pub fn velocity(&self) -> &Vector3<f64> {
        self.rigid_body.velocity()
    }

    pub fn attitude(&self) -> &UnitQuaternion<f64> {
        self.rigid_body.orientation()
    }

    /// Angular velocity (body space).
    pub fn angular_velocity(&self) -> &Vector3<f64> {
        self.rigid_body.angular_velocity()
    }

    /// Homogeneous pose for a render layer.
    pub fn pose(&self) -> Matrix4<f64> {
        self.rigid_body.pose()
    }

    /// Height above the world origin plane (m).
    pub fn altitude(&self) -> f64 {
        self.rigid_body.position().y
    }

    /// Ground speed magnitude (m/s).
    pub fn airspeed(&self) -> f64 {
        self.rigid_body.velocity().norm()
    }

    /// Advance the simulation by one step.
    ///
    /// Maps the control inputs onto surface deflections and accumulates every
    /// surface and engine force before the single rigid body integration.
    pub fn update(&mut self, dt: f64) {
        let aileron = self.controls.roll * MAX_AILERON_DEFLECTION;
        self.surfaces.left_aileron.deflection = aileron;
        self.surfaces.right_aileron.deflection = -aileron;
        self.surfaces.elevator.deflection = -(self.controls.pitch * MAX_ELEVATOR_DEFLECTION);
        self.surfaces.rudder.deflection = self.controls.yaw * MAX_RUDDER_DEFLECTION;

        for wing in self.surfaces.iter() {
            wing.apply_forces(&mut self.rigid_body);
        }
        self.engine.apply_forces(&mut self.rigid_body);

        self.log_timer += dt;
        if self.log_timer > 0.5 {
            self.log_timer = 0.0;
            let rates = self.rigid_body.angular_velocity();
            info!(
                "{:.2} km/h, thr: {:.2}, alt: {:.2} m, ang. vel: {:.2}, {:.2}, {:.2}",
                kilometers_per_hour(self.airspeed()),
                self.engine.throttle,
                self.altitude(),
                rates.x,
                rates.y,
                rates.z,
            );
        }

        self.rigid_body.update(dt);
    }
}
