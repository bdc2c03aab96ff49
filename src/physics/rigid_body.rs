use log::warn;
use nalgebra::{Isometry3, Matrix3, Matrix4, Quaternion, Translation3, UnitQuaternion, Vector3};

use crate::utils::constants::GRAVITY;

use super::inertia;

/// Initial conditions for a rigid body.
#[derive(Debug, Clone)]
pub struct RigidBodyParams {
    pub mass: f64,
    pub inertia: Matrix3<f64>,
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub angular_velocity: Vector3<f64>,
    pub orientation: UnitQuaternion<f64>,
    pub apply_gravity: bool,
}

impl Default for RigidBodyParams {
    fn default() -> Self {
        Self {
            mass: 1.0,
            inertia: inertia::tensor(&inertia::cube(&Vector3::new(1.0, 1.0, 1.0), 1.0)),
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
            apply_gravity: true,
        }
    }
}

/// A six degree of freedom rigid body advanced by semi-implicit Euler steps.
///
/// Forces accumulate in world space and torques in body space until `update`
/// integrates them and clears both accumulators. The inertia inverse and the
/// orientation inverse are maintained eagerly so frame transforms never
/// recompute them per call.
///
/// Mass must be strictly positive and the inertia tensor invertible; the
/// integrator performs no validation of either.
#[derive(Debug, Clone)]
pub struct RigidBody {
    mass: f64,
    inertia: Matrix3<f64>,
    inertia_inv: Matrix3<f64>,
    position: Vector3<f64>,
    orientation: UnitQuaternion<f64>,
    orientation_inverse: UnitQuaternion<f64>,
    velocity: Vector3<f64>,
    angular_velocity: Vector3<f64>,
    force: Vector3<f64>,
    torque: Vector3<f64>,
    apply_gravity: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new(RigidBodyParams::default())
    }
}

impl RigidBody {
    pub fn new(params: RigidBodyParams) -> Self {
        Self {
            mass: params.mass,
            inertia: params.inertia,
            inertia_inv: invert_inertia(&params.inertia),
            position: params.position,
            orientation: params.orientation,
            orientation_inverse: params.orientation.inverse(),
            velocity: params.velocity,
            angular_velocity: params.angular_velocity,
            force: Vector3::zeros(),
            torque: Vector3::zeros(),
            apply_gravity: params.apply_gravity,
        }
    }

    /// Velocity, in body space, of a material point offset from the origin.
    pub fn get_point_velocity(&self, point: &Vector3<f64>) -> Vector3<f64> {
        self.inverse_transform_direction(&self.velocity) + self.angular_velocity.cross(point)
    }

    /// Apply a body-space force at a body-space point. The torque arm and the
    /// force share a frame, so the torque term needs no rotation.
    pub fn add_force_at_point(&mut self, force: &Vector3<f64>, point: &Vector3<f64>) {
        self.force += self.transform_direction(force);
        self.torque += point.cross(force);
    }

    /// Rotate a direction from body space into world space.
    pub fn transform_direction(&self, direction: &Vector3<f64>) -> Vector3<f64> {
        self.orientation * direction
    }

    /// Rotate a direction from world space into body space.
    pub fn inverse_transform_direction(&self, direction: &Vector3<f64>) -> Vector3<f64> {
        self.orientation_inverse * direction
    }

    /// Linear velocity expressed in body space.
    pub fn get_body_velocity(&self) -> Vector3<f64> {
        self.inverse_transform_direction(&self.velocity)
    }

    /// Replace the inertia tensor. The inverse is recomputed immediately.
    pub fn set_inertia(&mut self, inertia_tensor: Matrix3<f64>) {
        self.inertia = inertia_tensor;
        self.inertia_inv = invert_inertia(&self.inertia);
    }

    /// Accumulate a world-space force.
    pub fn add_force(&mut self, force: &Vector3<f64>) {
        self.force += force;
    }

    /// Accumulate a body-space force.
    pub fn add_relative_force(&mut self, force: &Vector3<f64>) {
        self.force += self.transform_direction(force);
    }

    /// Accumulate a world-space torque.
    pub fn add_torque(&mut self, torque: &Vector3<f64>) {
        self.torque += self.inverse_transform_direction(torque);
    }

    /// Accumulate a body-space torque.
    pub fn add_relative_torque(&mut self, torque: &Vector3<f64>) {
        self.torque += torque;
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn inertia(&self) -> &Matrix3<f64> {
        &self.inertia
    }

    /// Accumulated force (world space).
    pub fn force(&self) -> &Vector3<f64> {
        &self.force
    }

    /// Accumulated torque (body space).
    pub fn torque(&self) -> &Vector3<f64> {
        &self.torque
    }

    pub fn position(&self) -> &Vector3<f64> {
        &self.position
    }

    pub fn velocity(&self) -> &Vector3<f64> {
        &self.velocity
    }

    /// Angular velocity (body space).
    pub fn angular_velocity(&self) -> &Vector3<f64> {
        &self.angular_velocity
    }

    pub fn orientation(&self) -> &UnitQuaternion<f64> {
        &self.orientation
    }

    /// Homogeneous pose, usable as a model or view-building matrix.
    pub fn pose(&self) -> Matrix4<f64> {
        Isometry3::from_parts(Translation3::from(self.position), self.orientation).to_homogeneous()
    }

    pub fn set_position(&mut self, position: Vector3<f64>) {
        self.position = position;
    }

    pub fn set_velocity(&mut self, velocity: Vector3<f64>) {
        self.velocity = velocity;
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: Vector3<f64>) {
        self.angular_velocity = angular_velocity;
    }

    pub fn set_orientation(&mut self, orientation: UnitQuaternion<f64>) {
        self.orientation = orientation;
        self.orientation_inverse = orientation.inverse();
    }

    pub fn set_apply_gravity(&mut self, apply_gravity: bool) {
        self.apply_gravity = apply_gravity;
    }

    /// Advance the body by one time step.
    ///
    /// Semi-implicit Euler: acceleration feeds velocity before the position
    /// advances. Body rates follow the Euler rotation equation including the
    /// gyroscopic `ω × Iω` term. Orientation takes the first-order quaternion
    /// increment `q · (0, ω) · ½dt` and is renormalized, which also refreshes
    /// the cached inverse. Accumulators are cleared on exit.
    pub fn update(&mut self, dt: f64) {
        let mut acceleration = self.force / self.mass;

        if self.apply_gravity {
            acceleration.y -= GRAVITY;
        }

        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;

        let gyroscopic = self
            .angular_velocity
            .cross(&(self.inertia * self.angular_velocity));
        self.angular_velocity += self.inertia_inv * (self.torque - gyroscopic) * dt;

        let spin = Quaternion::from_imag(self.angular_velocity);
        let q = self.orientation.into_inner();
        self.orientation = UnitQuaternion::from_quaternion(q + q * spin * (0.5 * dt));
        self.orientation_inverse = self.orientation.inverse();

        // reset accumulators
        self.force = Vector3::zeros();
        self.torque = Vector3::zeros();
    }
}

fn invert_inertia(inertia: &Matrix3<f64>) -> Matrix3<f64> {
    inertia.try_inverse().unwrap_or_else(|| {
        warn!("inertia tensor is not invertible, falling back to a zero inverse");
        Matrix3::zeros()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn free_body() -> RigidBody {
        RigidBody::new(RigidBodyParams {
            apply_gravity: false,
            ..Default::default()
        })
    }

    #[test]
    fn test_free_body_keeps_velocities() {
        let mut body = RigidBody::new(RigidBodyParams {
            inertia: Matrix3::identity(),
            velocity: Vector3::new(3.0, -1.0, 2.0),
            angular_velocity: Vector3::new(0.1, 0.2, 0.3),
            apply_gravity: false,
            ..Default::default()
        });

        let dt = 0.01;
        let steps = 500;
        for _ in 0..steps {
            body.update(dt);
        }

        // Isotropic inertia makes the gyroscopic term vanish, so both
        // velocities stay put and position advances linearly.
        assert_relative_eq!(body.velocity().x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(body.velocity().y, -1.0, epsilon = 1e-12);
        assert_relative_eq!(body.velocity().z, 2.0, epsilon = 1e-12);
        assert_relative_eq!(
            body.angular_velocity(),
            &Vector3::new(0.1, 0.2, 0.3),
            epsilon = 1e-12
        );
        let elapsed = dt * steps as f64;
        assert_relative_eq!(
            body.position(),
            &(Vector3::new(3.0, -1.0, 2.0) * elapsed),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_gyroscopic_term_conserves_rotational_energy() {
        let inertia = inertia::tensor(&Vector3::new(1.0, 2.0, 3.0));
        let omega0 = Vector3::new(1.0, 0.5, -0.3);
        let mut body = RigidBody::new(RigidBodyParams {
            inertia,
            angular_velocity: omega0,
            apply_gravity: false,
            ..Default::default()
        });

        let energy = |omega: &Vector3<f64>| 0.5 * omega.dot(&(inertia * omega));
        let initial_energy = energy(&omega0);

        let mut min_speed = f64::INFINITY;
        let mut max_speed = f64::NEG_INFINITY;
        for _ in 0..5000 {
            body.update(0.001);
            let speed = body.angular_velocity().norm();
            min_speed = min_speed.min(speed);
            max_speed = max_speed.max(speed);
        }

        // An asymmetric tensor tumbles: the rate magnitude wanders while the
        // rotational kinetic energy stays put.
        assert!(
            max_speed - min_speed > 1e-4,
            "angular rate unexpectedly constant: {} .. {}",
            min_speed,
            max_speed
        );
        assert_relative_eq!(
            energy(body.angular_velocity()),
            initial_energy,
            max_relative = 1e-2
        );
    }

    #[test]
    fn test_gravity_accelerates_down() {
        let mut body = RigidBody::new(RigidBodyParams::default());
        body.update(0.1);
        assert_relative_eq!(body.velocity().y, -GRAVITY * 0.1, epsilon = 1e-12);
        assert_relative_eq!(body.velocity().x, 0.0);
    }

    #[test]
    fn test_accumulators_reset_after_update() {
        let mut body = free_body();
        body.add_force(&Vector3::new(1.0, 2.0, 3.0));
        body.add_relative_torque(&Vector3::new(0.1, 0.0, 0.0));
        body.update(0.01);
        assert_eq!(body.force(), &Vector3::zeros());
        assert_eq!(body.torque(), &Vector3::zeros());
    }

    #[test]
    fn test_point_velocity_combines_linear_and_angular() {
        let mut body = free_body();
        body.set_velocity(Vector3::new(10.0, 0.0, 0.0));
        body.set_angular_velocity(Vector3::new(0.0, 0.0, 2.0));

        // Point one meter forward on a body spinning about +z.
        let v = body.get_point_velocity(&Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(v, Vector3::new(10.0, 2.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_force_at_point_produces_torque() {
        let mut body = free_body();
        let force = Vector3::new(0.0, 5.0, 0.0);
        let point = Vector3::new(2.0, 0.0, 0.0);
        body.add_force_at_point(&force, &point);

        assert_relative_eq!(body.force(), &force, epsilon = 1e-12);
        assert_relative_eq!(body.torque(), &point.cross(&force), epsilon = 1e-12);
    }

    #[test]
    fn test_relative_force_rotates_with_orientation() {
        let mut body = free_body();
        // Yaw 90 degrees: body +x ends up along world -z.
        body.set_orientation(UnitQuaternion::from_axis_angle(
            &Vector3::y_axis(),
            FRAC_PI_2,
        ));
        body.add_relative_force(&Vector3::new(1.0, 0.0, 0.0));

        assert_relative_eq!(body.force().x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(body.force().z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_body_velocity_counter_rotates() {
        let mut body = free_body();
        body.set_orientation(UnitQuaternion::from_axis_angle(
            &Vector3::y_axis(),
            FRAC_PI_2,
        ));
        body.set_velocity(Vector3::new(1.0, 0.0, 0.0));

        // Nose points along world -z, so world +x reads as body +z.
        let v = body.get_body_velocity();
        assert_relative_eq!(v, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_world_torque_enters_body_frame() {
        let mut body = free_body();
        body.set_orientation(UnitQuaternion::from_axis_angle(
            &Vector3::y_axis(),
            FRAC_PI_2,
        ));
        body.add_torque(&Vector3::new(1.0, 0.0, 0.0));

        // World +x reads as body +z after the inverse rotation.
        assert_relative_eq!(body.torque().z, 1.0, epsilon = 1e-12);
        assert_relative_eq!(body.torque().x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_orientation_stays_normalized() {
        let mut body = RigidBody::new(RigidBodyParams {
            inertia: inertia::tensor(&Vector3::new(1.0, 2.0, 3.0)),
            angular_velocity: Vector3::new(2.0, -1.0, 0.5),
            apply_gravity: false,
            ..Default::default()
        });

        for _ in 0..2000 {
            body.update(0.005);
            let norm = body.orientation().as_ref().norm();
            assert_relative_eq!(norm, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_set_inertia_refreshes_inverse() {
        let mut body = free_body();
        body.set_inertia(inertia::tensor(&Vector3::new(2.0, 2.0, 2.0)));
        body.add_relative_torque(&Vector3::new(1.0, 0.0, 0.0));
        body.update(1.0);
        // alpha = I^-1 * tau = 0.5
        assert_relative_eq!(body.angular_velocity().x, 0.5, epsilon = 1e-9);
    }
}
