use nalgebra::Vector3;

pub const GRAVITY: f64 = 9.81; // m/s^2
pub const AIR_DENSITY: f64 = 1.225; // kg/m^3 at sea level
pub const EPSILON: f64 = 1e-8;

/// Largest timestep the integrator stays well behaved at. Callers are
/// expected to clamp `dt` before stepping; the core does not.
pub const MAX_TIMESTEP: f64 = 0.02; // s

// Control surface limits (degrees)
pub const MAX_AILERON_DEFLECTION: f64 = 15.0;
pub const MAX_ELEVATOR_DEFLECTION: f64 = 5.0;
pub const MAX_RUDDER_DEFLECTION: f64 = 5.0;

// Body frame: +x forward, +y up, +z right.

#[inline]
pub fn forward() -> Vector3<f64> {
    Vector3::x()
}

#[inline]
pub fn up() -> Vector3<f64> {
    Vector3::y()
}

#[inline]
pub fn right() -> Vector3<f64> {
    Vector3::z()
}
