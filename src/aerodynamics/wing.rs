use std::sync::Arc;

use nalgebra::{Rotation3, Unit, Vector3};

use crate::physics::RigidBody;
use crate::utils::constants::{forward, AIR_DENSITY, EPSILON};
use crate::utils::math::{deg_to_rad, rad_to_deg};

use super::Airfoil;

/// A lifting or control surface mounted on the airframe.
///
/// Every step the surface resolves the airflow at its mounting point and
/// samples its airfoil polar at the resulting angle of attack. The lift and
/// drag that fall out are applied through the carrying rigid body.
#[derive(Debug, Clone)]
pub struct Wing {
    /// Mounting position (body space, m).
    position: Vector3<f64>,
    /// Reference area (m²).
    area: f64,
    /// Surface normal at zero deflection (body space).
    normal: Vector3<f64>,
    airfoil: Arc<Airfoil>,
    /// Current deflection (degrees). Bounds are the owner's responsibility.
    pub deflection: f64,
    pub lift_multiplier: f64,
    pub drag_multiplier: f64,
}

impl Wing {
    pub fn new(
        position: Vector3<f64>,
        area: f64,
        airfoil: Arc<Airfoil>,
        normal: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            area,
            normal,
            airfoil,
            deflection: 0.0,
            lift_multiplier: 1.0,
            drag_multiplier: 1.0,
        }
    }

    /// Build a surface from its planform dimensions.
    pub fn from_planform(
        position: Vector3<f64>,
        wingspan: f64,
        chord: f64,
        airfoil: Arc<Airfoil>,
        normal: Vector3<f64>,
    ) -> Self {
        Self::new(position, wingspan * chord, airfoil, normal)
    }

    pub fn position(&self) -> &Vector3<f64> {
        &self.position
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    /// Surface normal with the current deflection applied. The hinge axis
    /// lies in the surface plane, perpendicular to the forward axis.
    fn deflected_normal(&self) -> Vector3<f64> {
        if self.deflection.abs() <= EPSILON {
            return self.normal;
        }
        match Unit::try_new(forward().cross(&self.normal), EPSILON) {
            Some(axis) => Rotation3::from_axis_angle(&axis, deg_to_rad(self.deflection)) * self.normal,
            None => self.normal,
        }
    }

    /// Compute and apply lift and drag to the carrying body.
    pub fn apply_forces(&self, rigid_body: &mut RigidBody) {
        let local_velocity = rigid_body.get_point_velocity(&self.position);
        let speed = local_velocity.norm();

        if speed <= EPSILON {
            return;
        }

        let wing_normal = self.deflected_normal();

        // Drag opposes the local airflow.
        let drag_direction = (-local_velocity).normalize();

        // Lift stays perpendicular to drag even when the normal is not
        // perpendicular to the flow. Degenerates to pure drag when the flow
        // runs along the normal.
        let lift_direction = Unit::try_new(
            drag_direction.cross(&wing_normal).cross(&drag_direction),
            EPSILON,
        )
        .map(Unit::into_inner)
        .unwrap_or_else(Vector3::zeros);

        // Angle between the surface plane and the oncoming flow.
        let angle_of_attack = rad_to_deg(drag_direction.dot(&wing_normal).clamp(-1.0, 1.0).asin());

        let (lift_coefficient, drag_coefficient) = self.airfoil.sample(angle_of_attack);

        let dynamic_pressure = 0.5 * speed.powi(2) * AIR_DENSITY * self.area;

        let lift = lift_direction * lift_coefficient * self.lift_multiplier * dynamic_pressure;
        let drag = drag_direction * drag_coefficient * self.drag_multiplier * dynamic_pressure;

        rigid_body.add_force_at_point(&(lift + drag), &self.position);
    }
}
