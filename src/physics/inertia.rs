use nalgebra::{Matrix3, Vector3};

/// A primitive mass element of a composite body.
#[derive(Debug, Clone)]
pub struct MassElement {
    /// Mass of the element (kg).
    pub mass: f64,
    /// Centroid position in design coordinates (m).
    pub position: Vector3<f64>,
    /// Principal moments about the element's own centroid (kg·m²).
    pub inertia: Vector3<f64>,
    /// Offset from the composite center of gravity (m).
    pub offset: Vector3<f64>,
}

/// Principal moments of inertia of a solid cuboid about its centroid.
pub fn cube(size: &Vector3<f64>, mass: f64) -> Vector3<f64> {
    let c = mass / 12.0;
    Vector3::new(
        c * (size.y.powi(2) + size.z.powi(2)),
        c * (size.x.powi(2) + size.z.powi(2)),
        c * (size.x.powi(2) + size.y.powi(2)),
    )
}

/// Principal moments of inertia of a solid cylinder aligned with its x axis.
pub fn cylinder(radius: f64, length: f64, mass: f64) -> Vector3<f64> {
    let side = (mass / 12.0) * (3.0 * radius.powi(2) + length.powi(2));
    Vector3::new(0.5 * mass * radius.powi(2), side, side)
}

/// Diagonal inertia tensor from a principal-moment vector.
pub fn tensor(moment_of_inertia: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::from_diagonal(moment_of_inertia)
}

/// Cuboid mass element positioned in design coordinates.
pub fn cube_element(position: Vector3<f64>, size: Vector3<f64>, mass: f64) -> MassElement {
    MassElement {
        mass,
        position,
        inertia: cube(&size, mass),
        offset: position,
    }
}

/// Composite inertia tensor of a set of connected mass elements, taken about
/// their common center of gravity.
///
/// Each element contributes its own centroidal moments plus a parallel-axis
/// term from its offset. Product-of-inertia terms carry the conventional
/// negated sign in the assembled symmetric tensor.
///
/// # Arguments
/// * `elements` - Mass elements; offsets are written back unless precomputed.
/// * `precomputed_offset` - Take `offset` fields as given instead of deriving
///   them from the mass-weighted centroid.
///
/// Total mass must be positive; a zero total divides by zero in the centroid.
pub fn composite_tensor(elements: &mut [MassElement], precomputed_offset: bool) -> Matrix3<f64> {
    let mut ixx = 0.0;
    let mut iyy = 0.0;
    let mut izz = 0.0;
    let mut ixy = 0.0;
    let mut ixz = 0.0;
    let mut iyz = 0.0;

    let mut mass = 0.0;
    let mut moment = Vector3::zeros();

    for element in elements.iter() {
        mass += element.mass;
        moment += element.mass * element.position;
    }

    let center_of_gravity = moment / mass;

    for element in elements.iter_mut() {
        if !precomputed_offset {
            element.offset = element.position - center_of_gravity;
        }

        let offset = element.offset;

        ixx += element.inertia.x + element.mass * (offset.y.powi(2) + offset.z.powi(2));
        iyy += element.inertia.y + element.mass * (offset.z.powi(2) + offset.x.powi(2));
        izz += element.inertia.z + element.mass * (offset.x.powi(2) + offset.y.powi(2));
        ixy += element.mass * (offset.x * offset.y);
        ixz += element.mass * (offset.x * offset.z);
        iyz += element.mass * (offset.y * offset.z);
    }

    Matrix3::new(
        ixx, -ixy, -ixz, //
        -ixy, iyy, -iyz, //
        -ixz, -iyz, izz,
    )
}
