pub mod inertia;
pub mod rigid_body;

pub use rigid_body::{RigidBody, RigidBodyParams};
